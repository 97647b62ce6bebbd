use thiserror::Error;

use crate::plate::Plate;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlateError {
    #[error("total weight must be greater than or equal to bar weight (total {total}kg, bar {bar}kg)")]
    TotalBelowBar { total: f64, bar: f64 },
    #[error(
        "required side weight must be greater than or equal to the minimum plate denomination (side {side}kg, minimum {min}kg)"
    )]
    SideBelowMinimum { side: f64, min: Plate },
    #[error("Side weight {side}kg is above the {max}kg this catalog resolves.")]
    SideTooHeavy { side: f64, max: f64 },
    #[error("Invalid weight {0}: weights must be finite and non-negative.")]
    InvalidWeight(f64),
    #[error("Invalid plate '{0}'.")]
    InvalidPlate(String),
    #[error("Plate catalog must contain at least one plate.")]
    EmptyCatalog,
    #[error("Plate {0}kg appears more than once in the catalog.")]
    DuplicatePlate(Plate),
}

impl PlateError {
    /// Whether the error rejects the requested loading itself rather than its configuration.
    #[must_use]
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            PlateError::TotalBelowBar { .. } | PlateError::SideBelowMinimum { .. }
        )
    }
}
