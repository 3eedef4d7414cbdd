/// A type of cargo that can be loaded any number of times.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemType {
    /// Unique identifier, doubles as the stage label
    pub id: usize,
    /// Weight of a single unit, at least 1
    pub weight: usize,
    /// Value of a single unit, finite and non-negative
    pub value: f64,
}

impl ItemType {
    pub fn new(id: usize, weight: usize, value: f64) -> Self {
        Self { id, weight, value }
    }

    /// Maximum number of units that fit in `residual` capacity.
    pub fn max_count(&self, residual: usize) -> usize {
        residual / self.weight
    }
}
