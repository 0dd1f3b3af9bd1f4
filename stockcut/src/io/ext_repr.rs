use serde::{Deserialize, Serialize};

/// A set of stock groups to be optimized independently
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtCutInstance {
    /// The name of the instance
    pub name: String,
    /// One group per material/size combination
    pub groups: Vec<ExtCutGroup>,
}

/// All demand to be cut from a single stock length
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtCutGroup {
    pub name: String,
    pub stock: ExtStockSpec,
    pub requirements: Vec<ExtRequirement>,
}

/// Purchasing unit of a group
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtStockSpec {
    /// Commercial length of one bar, in meters
    pub stock_length: f64,
    /// Material removed per cut, 0 if omitted
    #[serde(default)]
    pub kerf_loss: f64,
    /// Lap length of a splice. If omitted, derived from `bar_diameter` (or 0 if that is omitted too)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub splice_overlap: Option<f64>,
    /// Nominal bar diameter, in meters
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bar_diameter: Option<f64>,
}

/// One row of demand. Blank fields are allowed, such rows are ignored.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtRequirement {
    #[serde(default)]
    pub length: Option<f64>,
    #[serde(default)]
    pub quantity: Option<i64>,
    #[serde(default)]
    pub label: String,
}

/// Cutting plans for all groups of an instance
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtCutSolution {
    /// Results in the same order as the groups of the instance
    pub groups: Vec<ExtGroupSolution>,
    /// Number of bars required over all groups
    pub bars_required: usize,
}

/// Cutting plan for a single group
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtGroupSolution {
    pub name: String,
    pub stock_length: f64,
    pub patterns: Vec<ExtPattern>,
    pub bars_required: usize,
    /// Sum of the length of the pieces divided by the length of the purchased bars
    pub efficiency: f64,
    pub waste_total: f64,
    pub total_cuts: usize,
    pub lower_bound: usize,
}

/// A bar layout and the number of bars cut that way
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPattern {
    pub tag: String,
    pub pieces: Vec<ExtPiece>,
    pub count: usize,
    pub free_space: f64,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPiece {
    pub length: f64,
    pub label: String,
    /// Zero-based position in the spliced run, only present for segments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment: Option<usize>,
}
