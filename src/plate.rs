use std::{fmt::Display, str::FromStr};

use crate::plate_error::PlateError;

/// A single plate denomination, stored in grams.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Ord, Eq, Hash)]
pub struct Plate {
    weight: u32,
}

impl Plate {
    #[must_use]
    pub fn new(weight: u32) -> Self {
        Plate { weight }
    }

    /// Builds a plate from a weight in kilograms, rounded to the nearest gram.
    ///
    /// # Errors
    /// If the weight is not finite or rounds to zero grams.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_kilograms(kilograms: f64) -> Result<Self, PlateError> {
        let grams = (kilograms * 1000.0).round();
        if !grams.is_finite() || grams < 1.0 || grams > f64::from(u32::MAX) {
            return Err(PlateError::InvalidPlate(kilograms.to_string()));
        }
        Ok(Plate::new(grams as u32))
    }

    #[must_use]
    pub fn weight(&self) -> u32 {
        self.weight
    }

    #[must_use]
    pub fn kilograms(&self) -> f64 {
        f64::from(self.weight) / 1000.0
    }
}

impl Display for Plate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kilograms())
    }
}

impl FromStr for Plate {
    type Err = PlateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().to_lowercase();
        let number = trimmed.strip_suffix("kg").unwrap_or(&trimmed).trim();
        let kilograms = number
            .parse::<f64>()
            .map_err(|_| PlateError::InvalidPlate(s.to_string()))?;
        Plate::from_kilograms(kilograms)
    }
}
