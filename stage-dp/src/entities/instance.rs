use crate::entities::ItemType;
use crate::error::LoadError;
use itertools::Itertools;

/// Largest accepted capacity. Every backward stage holds `capacity + 1` cells and the passes are
/// quadratic in the capacity.
pub const MAX_CAPACITY: usize = 1 << 20;

/// A validated cargo loading instance: a capacity and the item types that may be loaded.
///
/// Can only be obtained through [`LoadInstance::new`] (or [`crate::io::import`]), so every
/// instance handed to the solver is non-empty, has unique ids and strictly positive weights.
#[derive(Clone, Debug, PartialEq)]
pub struct LoadInstance {
    capacity: usize,
    items: Vec<ItemType>,
}

impl LoadInstance {
    /// Validates the input and creates a new instance.
    /// The order of `items` is preserved.
    pub fn new(capacity: i64, items: Vec<ItemType>) -> Result<Self, LoadError> {
        let checked_capacity = usize::try_from(capacity)
            .ok()
            .filter(|c| *c <= MAX_CAPACITY)
            .ok_or(LoadError::InvalidCapacity(capacity))?;
        if items.is_empty() {
            return Err(LoadError::EmptyItemSet);
        }
        for item in &items {
            if item.weight == 0 {
                return Err(LoadError::InvalidItem {
                    id: item.id,
                    reason: "unit weight must be at least 1".to_string(),
                });
            }
            if !item.value.is_finite() || item.value < 0.0 {
                return Err(LoadError::InvalidItem {
                    id: item.id,
                    reason: format!("unit value must be finite and non-negative, got {}", item.value),
                });
            }
        }
        if let Some(id) = items.iter().map(|item| item.id).duplicates().next() {
            return Err(LoadError::DuplicateItemId(id));
        }

        Ok(Self {
            capacity: checked_capacity,
            items,
        })
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The item types in the order they were supplied
    pub fn items(&self) -> &[ItemType] {
        &self.items
    }

    pub fn item(&self, id: usize) -> Option<&ItemType> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn min_weight(&self) -> usize {
        self.items.iter().map(|item| item.weight).min().unwrap_or(0)
    }
}
