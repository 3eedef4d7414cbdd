use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// External representation of an [`ItemType`](crate::entities::ItemType).
/// Weight is signed so that non-positive weights surface as a validation error.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtItemType {
    /// Unique identifier, also the stage label
    pub id: u64,
    /// Weight of a single unit
    pub weight: i64,
    /// Value of a single unit
    pub value: f64,
}

/// External representation of a [`LoadInstance`](crate::entities::LoadInstance).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtLoadInstance {
    /// The name of the instance
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Total capacity available for loading
    pub capacity: i64,
    /// Set of item types that can be loaded
    pub items: Vec<ExtItemType>,
}

/// External representation of a [`Solution`](crate::entities::Solution).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtSolution {
    /// Number of units loaded per item type id
    pub counts: BTreeMap<u64, usize>,
    /// Sum of count * weight, never exceeds the capacity
    pub total_weight: usize,
    /// Sum of count * value, equal to the maximum value
    pub total_value: f64,
}

/// External representation of a [`LoadResult`](crate::entities::LoadResult).
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExtLoadResult {
    pub capacity: usize,
    /// The maximum value attainable
    pub max_value: f64,
    /// One solution per tied first-stage choice
    pub solutions: Vec<ExtSolution>,
}
