use std::sync::Arc;

/// A single unit of demand after decomposition, the atomic unit which is packed onto stock bars.
#[derive(Debug, Clone, PartialEq)]
pub struct Piece {
    /// Length of the piece, in meters
    pub length: f64,
    /// Label of the requirement this piece originates from
    pub label: Arc<str>,
    /// Position within a spliced run, only present if the requirement was decomposed
    pub segment: Option<SegmentMarker>,
}

impl Piece {
    pub fn new(length: f64, label: Arc<str>) -> Self {
        Self {
            length,
            label,
            segment: None,
        }
    }

    pub fn segment(length: f64, label: Arc<str>, marker: SegmentMarker) -> Self {
        Self {
            length,
            label,
            segment: Some(marker),
        }
    }

    /// Whether this piece is the last segment of a spliced run
    pub fn is_tail(&self) -> bool {
        self.segment.is_some_and(|s| s.is_tail())
    }
}

/// Traceability marker for a segment of a spliced run. Not used for packing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentMarker {
    /// Zero-based position of the segment in the run
    pub index: usize,
    /// Total number of segments the run was split into
    pub n_segments: usize,
}

impl SegmentMarker {
    pub fn is_tail(&self) -> bool {
        self.index + 1 == self.n_segments
    }
}
