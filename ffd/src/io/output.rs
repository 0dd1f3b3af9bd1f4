use serde::{Deserialize, Serialize};

use stockcut::io::ext_repr::{ExtCutInstance, ExtCutSolution};

use crate::config::FFDConfig;

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FFDOutput {
    #[serde(flatten)]
    pub instance: ExtCutInstance,
    pub solution: ExtCutSolution,
    pub config: FFDConfig,
    /// Wall time spent optimizing, in milliseconds
    pub run_time_ms: u64,
}
