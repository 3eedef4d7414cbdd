use serde::{Deserialize, Serialize};

/// Order in which item types are assigned to stages.
///
/// The backward pass processes stages in this order, the designated first stage comes last.
/// The forward reconstruction walks the exact reverse.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StageOrdering {
    /// Highest id is processed first, the lowest id is the first stage
    #[default]
    DescendingId,
    /// Lowest id is processed first, the highest id is the first stage
    AscendingId,
}

///Configuration of the stage DP solver
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolverConfig {
    #[serde(default)]
    pub stage_ordering: StageOrdering,
}
