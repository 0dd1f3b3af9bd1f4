mod bin;
mod instance;
mod pattern;
mod piece;
mod requirement;
mod result;
mod stock;

#[doc(inline)]
pub use bin::Bin;
#[doc(inline)]
pub use instance::CutGroup;
#[doc(inline)]
pub use instance::CutInstance;
#[doc(inline)]
pub use pattern::GroupedPattern;
#[doc(inline)]
pub use pattern::PatternKey;
#[doc(inline)]
pub use pattern::bar_mark;
#[doc(inline)]
pub use pattern::group_bins;
#[doc(inline)]
pub use piece::Piece;
#[doc(inline)]
pub use piece::SegmentMarker;
#[doc(inline)]
pub use requirement::CutRequirement;
#[doc(inline)]
pub use result::OptimizationResult;
#[doc(inline)]
pub use stock::LAP_FACTOR;
#[doc(inline)]
pub use stock::StockSpec;
