use thiserror::Error;

/// Reasons a cargo loading instance is rejected before any table is built.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoadError {
    #[error("invalid capacity: {0}, capacity must be between 0 and MAX_CAPACITY")]
    InvalidCapacity(i64),

    #[error("invalid item type {id}: {reason}")]
    InvalidItem { id: usize, reason: String },

    #[error("duplicate item type id: {0}")]
    DuplicateItemId(usize),

    #[error("no item types supplied")]
    EmptyItemSet,
}
