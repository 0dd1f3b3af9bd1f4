use serde::{Deserialize, Serialize};

use stockcut::util::CutConfig;

/// Configuration for the FFD optimizer
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct FFDConfig {
    /// Configuration of the decomposition and kerf accounting
    #[serde(default)]
    pub cut_config: CutConfig,
    /// Solve the groups of an instance in parallel. Results are identical either way
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

impl Default for FFDConfig {
    fn default() -> Self {
        Self {
            cut_config: CutConfig::default(),
            parallel: default_parallel(),
        }
    }
}

fn default_parallel() -> bool {
    true
}
