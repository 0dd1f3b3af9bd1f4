use std::cmp::Ordering;
use std::fmt::{Debug, Display};

/// Tolerance used for every length comparison, in meters (1 mm).
pub const EPSILON: f64 = 1e-3;

///Wrapper around the [`float_cmp::approx_eq!()`] macro for easy comparison of lengths with a tolerance of [`EPSILON`].
///Two FPAs are considered equal if they are within [`EPSILON`] of each other.
#[derive(Debug, Clone, Copy)]
pub struct FPA(pub f64);

impl<T> From<T> for FPA
where
    T: Into<f64>,
{
    fn from(n: T) -> Self {
        FPA(n.into())
    }
}

impl PartialEq<Self> for FPA {
    fn eq(&self, other: &Self) -> bool {
        float_cmp::approx_eq!(f64, self.0, other.0, epsilon = EPSILON)
    }
}

impl PartialOrd<Self> for FPA {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.eq(other) {
            true => Some(Ordering::Equal),
            false => self.0.partial_cmp(&other.0),
        }
    }
}

impl Display for FPA {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

/// Rounds a length in meters to whole millimeters.
pub fn to_mm(length: f64) -> i64 {
    (length * 1000.0).round() as i64
}
