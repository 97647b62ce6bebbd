use std::{fmt::Display, str::FromStr};

use itertools::Itertools;

use crate::{plate::Plate, plate_error::PlateError};

const STANDARD_PLATES: [u32; 6] = [1250, 2500, 5000, 10_000, 20_000, 25_000];

/// The denominations available for loading, in the order the resolver examines them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlateCatalog {
    plates: Vec<Plate>,
}

impl PlateCatalog {
    ///
    /// # Errors
    /// If `plates` is empty, holds a zero-weight plate, or names the same denomination twice.
    ///
    pub fn new(plates: Vec<Plate>) -> Result<Self, PlateError> {
        if plates.is_empty() {
            return Err(PlateError::EmptyCatalog);
        }

        if let Some(plate) = plates.iter().find(|p| p.weight() == 0) {
            return Err(PlateError::InvalidPlate(plate.to_string()));
        }

        if let Some(plate) = plates.iter().duplicates().next() {
            return Err(PlateError::DuplicatePlate(*plate));
        }

        Ok(PlateCatalog { plates })
    }

    ///
    /// # Errors
    /// If any weight is not a valid plate, or as for [`PlateCatalog::new`].
    ///
    pub fn from_kilograms(weights: &[f64]) -> Result<Self, PlateError> {
        let plates = weights
            .iter()
            .map(|w| Plate::from_kilograms(*w))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(plates)
    }

    /// 1.25, 2.5, 5, 10, 20 and 25 kg.
    #[must_use]
    pub fn standard() -> Self {
        PlateCatalog {
            plates: STANDARD_PLATES.into_iter().map(Plate::new).collect(),
        }
    }

    #[must_use]
    pub fn plates(&self) -> &[Plate] {
        &self.plates
    }

    #[must_use]
    pub fn min(&self) -> Plate {
        self.plates
            .iter()
            .copied()
            .min()
            .unwrap_or(Plate::new(0))
    }

    /// Largest weight in grams that divides every denomination.
    ///
    /// Equal to [`PlateCatalog::min`] whenever each plate is a multiple of the lightest one.
    #[must_use]
    pub fn unit(&self) -> u32 {
        self.plates
            .iter()
            .map(Plate::weight)
            .fold(0, gcd)
    }

    /// Denominations expressed in multiples of [`PlateCatalog::unit`], in catalog order.
    #[must_use]
    pub fn scaled(&self) -> Vec<u32> {
        let unit = self.unit();
        self.plates.iter().map(|p| p.weight() / unit).collect()
    }
}

impl Default for PlateCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl Display for PlateCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.plates.iter().join(", "))
    }
}

impl FromStr for PlateCatalog {
    type Err = PlateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let plates = s
            .split(',')
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(Plate::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(plates)
    }
}

fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 { a } else { gcd(b, a % b) }
}
