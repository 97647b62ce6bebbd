#![warn(clippy::pedantic)]

pub mod calculator;
pub mod plate;
pub mod plate_catalog;
pub mod plate_error;
pub mod resolver;
pub mod side_plates;

pub use crate::resolver::scaled_side_plates;

use crate::{
    calculator::PlateCalculator, plate_catalog::PlateCatalog, plate_error::PlateError,
    side_plates::SidePlates,
};

///
/// Plates per side to bring a `bar` up to `total` kilograms with the standard catalog.
///
/// # Errors
/// If `total` is lighter than `bar`, or the weight left for each side is lighter than 1.25kg.
///
pub fn side_plates(total: f64, bar: f64) -> Result<SidePlates, PlateError> {
    PlateCalculator::new(PlateCatalog::standard()).side_plates(total, bar)
}

