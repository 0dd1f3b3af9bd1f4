use serde::{Deserialize, Serialize};

/// Default minimal length of a splice tail worth cutting, in meters
pub const DEFAULT_MIN_CUT_LENGTH: f64 = 0.05;

///Configuration of the decomposition and kerf accounting
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct CutConfig {
    ///How the blade loss is charged against a stock bar
    #[serde(default)]
    pub kerf_policy: KerfPolicy,
    ///Splice tails shorter than this are merged into the preceding segment
    #[serde(default = "default_min_cut_length")]
    pub min_cut_length: f64,
}

impl Default for CutConfig {
    fn default() -> Self {
        Self {
            kerf_policy: KerfPolicy::default(),
            min_cut_length: DEFAULT_MIN_CUT_LENGTH,
        }
    }
}

fn default_min_cut_length() -> f64 {
    DEFAULT_MIN_CUT_LENGTH
}

/// Determines how many kerf allowances a bar pays for the pieces cut from it.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum KerfPolicy {
    /// Every placed piece pays one kerf, the first one included.
    #[default]
    PerCut,
    /// Only the gaps between adjacent pieces pay a kerf, the first piece on a bar is free.
    PerGap,
}

impl KerfPolicy {
    /// Kerf charged for the next piece placed on a bar already holding `n_placed` pieces.
    pub fn charge(&self, kerf_loss: f64, n_placed: usize) -> f64 {
        match (self, n_placed) {
            (KerfPolicy::PerGap, 0) => 0.0,
            _ => kerf_loss,
        }
    }
}
