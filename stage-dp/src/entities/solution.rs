use crate::entities::{ItemType, LoadInstance};
use std::collections::BTreeMap;

/// One loading: the number of units chosen per item type.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Solution {
    counts: BTreeMap<usize, usize>,
}

impl Solution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_count(&mut self, id: usize, count: usize) {
        self.counts.insert(id, count);
    }

    /// Number of units chosen for item type `id`, 0 if the type is absent
    pub fn count(&self, id: usize) -> usize {
        self.counts.get(&id).copied().unwrap_or(0)
    }

    /// (id, count) pairs, ordered by id
    pub fn counts(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.counts.iter().map(|(id, count)| (*id, *count))
    }

    pub fn total_weight(&self, instance: &LoadInstance) -> usize {
        self.total_weight_of(instance.items())
    }

    pub fn total_value(&self, instance: &LoadInstance) -> f64 {
        self.total_value_of(instance.items())
    }

    pub fn total_weight_of(&self, items: &[ItemType]) -> usize {
        items.iter().map(|i| i.weight * self.count(i.id)).sum()
    }

    pub fn total_value_of(&self, items: &[ItemType]) -> f64 {
        items.iter().map(|i| i.value * self.count(i.id) as f64).sum()
    }
}

impl FromIterator<(usize, usize)> for Solution {
    fn from_iter<T: IntoIterator<Item = (usize, usize)>>(iter: T) -> Self {
        Self {
            counts: iter.into_iter().collect(),
        }
    }
}

/// Outcome of a solve: the optimal value and one [`Solution`] per tied first-stage choice.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadResult {
    pub max_value: f64,
    /// In the order the first-stage ties were discovered (ascending first-stage count)
    pub solutions: Vec<Solution>,
    pub capacity: usize,
    /// The item types in the order they were supplied
    pub items: Vec<ItemType>,
}

impl LoadResult {
    pub fn n_solutions(&self) -> usize {
        self.solutions.len()
    }
}
