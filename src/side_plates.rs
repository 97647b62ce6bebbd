use std::{collections::BTreeMap, fmt::Display};

use itertools::Itertools;

use crate::plate::Plate;

/// Plates to load on one side of the bar; the other side mirrors it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SidePlates {
    plates: BTreeMap<Plate, u32>,
}

impl SidePlates {
    #[must_use]
    pub fn new(plates: BTreeMap<Plate, u32>) -> Self {
        SidePlates {
            plates: plates.into_iter().filter(|(_, count)| *count > 0).collect(),
        }
    }

    #[must_use]
    pub fn get(&self, plate: Plate) -> Option<u32> {
        self.plates.get(&plate).copied()
    }

    /// Count for the denomination weighing `kilograms`, if any is loaded.
    #[must_use]
    pub fn get_kilograms(&self, kilograms: f64) -> Option<u32> {
        Plate::from_kilograms(kilograms)
            .ok()
            .and_then(|plate| self.get(plate))
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plates.is_empty()
    }

    /// Number of distinct denominations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.plates.len()
    }

    /// Total number of plates on one side.
    #[must_use]
    pub fn plate_count(&self) -> u32 {
        self.plates.values().sum()
    }

    /// Weight of one side in grams.
    #[must_use]
    pub fn grams(&self) -> u64 {
        self.plates
            .iter()
            .map(|(plate, count)| u64::from(plate.weight()) * u64::from(*count))
            .sum()
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn kilograms(&self) -> f64 {
        self.grams() as f64 / 1000.0
    }

    /// Bar plus both loaded sides.
    #[must_use]
    pub fn total_kilograms(&self, bar: f64) -> f64 {
        bar + 2.0 * self.kilograms()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Plate, u32)> + '_ {
        self.plates.iter().map(|(plate, count)| (*plate, *count))
    }
}

impl FromIterator<(Plate, u32)> for SidePlates {
    fn from_iter<I: IntoIterator<Item = (Plate, u32)>>(iter: I) -> Self {
        let plates = iter
            .into_iter()
            .fold(BTreeMap::new(), |mut acc, (plate, count)| {
                *acc.entry(plate).or_insert(0) += count;
                acc
            });
        SidePlates::new(plates)
    }
}

impl IntoIterator for SidePlates {
    type Item = (Plate, u32);
    type IntoIter = std::collections::btree_map::IntoIter<Plate, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.plates.into_iter()
    }
}

impl Display for SidePlates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let plates = self
            .plates
            .iter()
            .rev()
            .flat_map(|(plate, count)| std::iter::repeat_n(plate, *count as usize))
            .join(", ");

        write!(f, "[{}] ({}kg)", plates, self.kilograms())
    }
}
