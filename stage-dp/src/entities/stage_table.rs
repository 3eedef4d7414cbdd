use std::collections::BTreeMap;

/// Best outcome for one stage at one residual capacity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StageCell {
    /// Best value attainable by this stage and all later stages
    pub best_value: f64,
    /// Number of units of this stage's item type attaining `best_value`
    pub optimal_count: usize,
}

/// Value table produced by the backward pass.
///
/// Maps a stage (item type id) to its column of [`StageCell`]s, indexed by residual capacity
/// `0..=capacity`. The designated first stage has no column, it is evaluated directly against
/// the full capacity.
#[derive(Clone, Debug, PartialEq)]
pub struct StageTable {
    capacity: usize,
    columns: BTreeMap<usize, Vec<StageCell>>,
}

impl StageTable {
    pub fn new(capacity: usize, columns: BTreeMap<usize, Vec<StageCell>>) -> Self {
        debug_assert!(columns.values().all(|c| c.len() == capacity + 1));
        Self { capacity, columns }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn n_stages(&self) -> usize {
        self.columns.len()
    }

    pub fn column(&self, stage: usize) -> Option<&[StageCell]> {
        self.columns.get(&stage).map(|c| c.as_slice())
    }

    pub fn cell(&self, stage: usize, residual: usize) -> Option<&StageCell> {
        self.columns.get(&stage).and_then(|c| c.get(residual))
    }

    pub fn best_value(&self, stage: usize, residual: usize) -> Option<f64> {
        self.cell(stage, residual).map(|c| c.best_value)
    }

    pub fn stages(&self) -> impl Iterator<Item = usize> + '_ {
        self.columns.keys().copied()
    }
}
