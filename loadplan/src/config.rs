use serde::{Deserialize, Serialize};
use stage_dp::util::SolverConfig;

/// Configuration for the loadplan runner
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct LoadPlanConfig {
    /// Configuration of the stage DP solver
    #[serde(default)]
    pub solver: SolverConfig,
    /// Pretty-print the JSON output
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

fn default_pretty() -> bool {
    true
}

impl Default for LoadPlanConfig {
    fn default() -> Self {
        Self {
            solver: SolverConfig::default(),
            pretty: default_pretty(),
        }
    }
}
