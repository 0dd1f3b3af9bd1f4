use crate::entities::{CutRequirement, StockSpec};

/// All demand for one material/size combination, cut from a single stock length.
#[derive(Debug, Clone)]
pub struct CutGroup {
    /// Name of the group, e.g. the material and diameter
    pub name: String,
    pub stock: StockSpec,
    pub requirements: Vec<CutRequirement>,
}

impl CutGroup {
    pub fn total_required_length(&self) -> f64 {
        self.requirements.iter().map(|r| r.total_length()).sum()
    }
}

/// A set of independent [`CutGroup`]s, as assembled by the quantity takeoff.
#[derive(Debug, Clone)]
pub struct CutInstance {
    pub name: String,
    pub groups: Vec<CutGroup>,
}

impl CutInstance {
    pub fn n_groups(&self) -> usize {
        self.groups.len()
    }
}
