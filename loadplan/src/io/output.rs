use crate::config::LoadPlanConfig;
use serde::{Deserialize, Serialize};
use stage_dp::io::ext_repr::{ExtLoadInstance, ExtLoadResult};

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LoadPlanOutput {
    #[serde(flatten)]
    pub instance: ExtLoadInstance,
    pub result: ExtLoadResult,
    pub config: LoadPlanConfig,
}
