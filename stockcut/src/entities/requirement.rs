/// One row of demand: `quantity` identical pieces of `length` meters.
#[derive(Debug, Clone, PartialEq)]
pub struct CutRequirement {
    /// Required length of a single piece, in meters
    pub length: f64,
    /// Number of identical pieces needed
    pub quantity: usize,
    /// Opaque traceability string, e.g. the element the pieces originate from
    pub label: String,
}

impl CutRequirement {
    pub fn new(length: f64, quantity: usize, label: impl Into<String>) -> Self {
        Self {
            length,
            quantity,
            label: label.into(),
        }
    }

    /// Rows without a positive length or quantity carry no demand (blank rows during data entry).
    pub fn is_ignorable(&self) -> bool {
        !(self.length.is_finite() && self.length > 0.0) || self.quantity == 0
    }

    /// Total required length of all pieces of this requirement
    pub fn total_length(&self) -> f64 {
        match self.is_ignorable() {
            true => 0.0,
            false => self.length * self.quantity as f64,
        }
    }
}
