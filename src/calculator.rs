use tracing::debug;

use crate::{
    plate::Plate,
    plate_catalog::PlateCatalog,
    plate_error::PlateError,
    resolver::{MinimumCount, Resolver},
    side_plates::SidePlates,
};

/// Largest side weight, in catalog units, handed to the resolver by default.
///
/// The resolver's working tables grow linearly with this value.
pub const DEFAULT_MAX_SCALED_SIDE: u32 = 1_000_000;

/// Works out the plates for one side of a symmetrically loaded bar.
///
/// Real-world weights are mapped onto whole multiples of the catalog's unit before being
/// handed to the resolver, and mapped back afterwards.
#[derive(Clone, Debug)]
pub struct PlateCalculator<R = MinimumCount> {
    catalog: PlateCatalog,
    resolver: R,
    max_scaled_side: u32,
}

impl PlateCalculator {
    #[must_use]
    pub fn new(catalog: PlateCatalog) -> Self {
        Self::with_resolver(catalog, MinimumCount)
    }
}

impl Default for PlateCalculator {
    fn default() -> Self {
        Self::new(PlateCatalog::standard())
    }
}

impl<R: Resolver> PlateCalculator<R> {
    #[must_use]
    pub fn with_resolver(catalog: PlateCatalog, resolver: R) -> Self {
        PlateCalculator {
            catalog,
            resolver,
            max_scaled_side: DEFAULT_MAX_SCALED_SIDE,
        }
    }

    /// Caps the side weight, in multiples of [`PlateCatalog::unit`], that will be resolved.
    #[must_use]
    pub fn with_max_scaled_side(mut self, max_scaled_side: u32) -> Self {
        self.max_scaled_side = max_scaled_side;
        self
    }

    /// Heaviest side weight in kilograms this calculator will resolve.
    #[must_use]
    pub fn max_side_kilograms(&self) -> f64 {
        f64::from(self.max_scaled_side) * f64::from(self.catalog.unit()) / 1000.0
    }

    #[must_use]
    pub fn catalog(&self) -> &PlateCatalog {
        &self.catalog
    }

    ///
    /// # Errors
    /// If either weight is negative or not finite, if `total` is lighter than `bar`,
    /// if the weight left for each side is lighter than the lightest plate, or if it is
    /// heavier than [`PlateCalculator::max_side_kilograms`].
    ///
    /// An exact loading that cannot be built from the catalog yields empty [`SidePlates`].
    ///
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn side_plates(&self, total: f64, bar: f64) -> Result<SidePlates, PlateError> {
        for weight in [total, bar] {
            if !weight.is_finite() || weight < 0.0 {
                return Err(PlateError::InvalidWeight(weight));
            }
        }

        if total < bar {
            return Err(PlateError::TotalBelowBar { total, bar });
        }

        let side = (total - bar) / 2.0;
        if side <= 0.0 {
            return Ok(SidePlates::default());
        }

        let min = self.catalog.min();
        if side < min.kilograms() {
            return Err(PlateError::SideBelowMinimum { side, min });
        }

        let unit = self.catalog.unit();
        let scaled_plates = self.catalog.scaled();
        let scaled_side = (side * 1000.0 / f64::from(unit)).round();
        if scaled_side > f64::from(self.max_scaled_side) {
            return Err(PlateError::SideTooHeavy {
                side,
                max: self.max_side_kilograms(),
            });
        }
        let scaled_side = scaled_side as u32;

        debug!(side, unit, scaled_side, "resolving side plates");

        let usage = self.resolver.breakdown(&scaled_plates, scaled_side);
        if usage.is_empty() {
            debug!(side, catalog = %self.catalog, "no exact loading");
        }

        Ok(usage
            .into_iter()
            .filter_map(|(scaled, count)| Some((Plate::new(scaled.checked_mul(unit)?), count)))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use hashbrown::HashMap;

    use super::*;

    /// Records every call and answers with a canned breakdown.
    #[derive(Default)]
    struct Recording {
        calls: RefCell<Vec<(Vec<u32>, u32)>>,
        answer: HashMap<u32, u32>,
    }

    impl Recording {
        fn answering(pairs: &[(u32, u32)]) -> Self {
            Recording {
                calls: RefCell::default(),
                answer: pairs.iter().copied().collect(),
            }
        }
    }

    impl Resolver for &Recording {
        fn breakdown(&self, denominations: &[u32], target: u32) -> HashMap<u32, u32> {
            self.calls
                .borrow_mut()
                .push((denominations.to_vec(), target));
            self.answer.clone()
        }
    }

    fn calculator(resolver: &Recording) -> PlateCalculator<&Recording> {
        PlateCalculator::with_resolver(PlateCatalog::standard(), resolver)
    }

    #[test]
    fn total_below_bar_skips_resolver() {
        let resolver = Recording::default();

        let err = calculator(&resolver).side_plates(10.0, 20.0).unwrap_err();

        assert!(err.is_invalid_input());
        assert!(
            err.to_string()
                .contains("must be greater than or equal to bar weight")
        );
        assert!(resolver.calls.borrow().is_empty());
    }

    #[test]
    fn empty_bar_skips_resolver() {
        let resolver = Recording::default();

        let side = calculator(&resolver).side_plates(20.0, 20.0).unwrap();

        assert!(side.is_empty());
        assert!(resolver.calls.borrow().is_empty());
    }

    #[test]
    fn side_lighter_than_smallest_plate_skips_resolver() {
        let resolver = Recording::default();

        let err = calculator(&resolver).side_plates(21.5, 20.0).unwrap_err();

        assert!(err.is_invalid_input());
        assert!(
            err.to_string()
                .contains("must be greater than or equal to the minimum plate denomination")
        );
        assert!(resolver.calls.borrow().is_empty());
    }

    #[test]
    fn passes_scaled_problem_and_maps_answer_back() {
        let resolver = Recording::answering(&[(2, 1)]);

        let side = calculator(&resolver).side_plates(25.0, 20.0).unwrap();

        assert_eq!(
            *resolver.calls.borrow(),
            vec![(vec![1, 2, 4, 8, 16, 20], 2)]
        );
        assert_eq!(side.get_kilograms(2.5), Some(1));
        assert_eq!(side.len(), 1);
    }

    #[test]
    fn infeasible_answer_is_empty_not_error() {
        let resolver = Recording::default();

        let side = calculator(&resolver).side_plates(30.0, 20.0).unwrap();

        assert!(side.is_empty());
        assert_eq!(resolver.calls.borrow().len(), 1);
    }

    #[test]
    fn rejects_negative_and_non_finite_weights() {
        let calculator = PlateCalculator::new(PlateCatalog::standard());

        let cases = [
            (-5.0, 0.0),
            (50.0, -20.0),
            (f64::NAN, 20.0),
            (f64::INFINITY, 20.0),
        ];

        for (total, bar) in cases {
            let err = calculator.side_plates(total, bar).unwrap_err();
            assert!(matches!(err, PlateError::InvalidWeight(_)));
            assert!(!err.is_invalid_input());
        }
    }

    #[test]
    fn side_above_limit_skips_resolver() {
        let resolver = Recording::default();
        let calculator = calculator(&resolver);

        let err = calculator.side_plates(10_000_000.0, 0.0).unwrap_err();

        assert_eq!(
            err,
            PlateError::SideTooHeavy {
                side: 5_000_000.0,
                max: 1_250_000.0,
            }
        );
        assert!(!err.is_invalid_input());
        assert!(calculator.side_plates(1e10, 0.0).is_err());
        assert!(resolver.calls.borrow().is_empty());
    }

    #[test]
    fn limit_is_inclusive_and_configurable() {
        let calculator = PlateCalculator::new(PlateCatalog::standard()).with_max_scaled_side(40);

        let side = calculator.side_plates(120.0, 20.0).unwrap();
        assert_eq!(side.get_kilograms(25.0), Some(2));

        let err = calculator.side_plates(123.0, 20.0).unwrap_err();
        assert!(matches!(err, PlateError::SideTooHeavy { .. }));
    }

    #[test]
    fn catalog_without_common_minimum_resolves_exactly() {
        let catalog = PlateCatalog::from_kilograms(&[2.0, 3.0]).unwrap();
        let calculator = PlateCalculator::new(catalog);

        let side = calculator.side_plates(34.0, 20.0).unwrap();

        assert_eq!(side.get_kilograms(2.0), Some(2));
        assert_eq!(side.get_kilograms(3.0), Some(1));
    }
}
