/// Set of functions used throughout to assure the correctness of the library.
pub mod assertions;

mod config;
mod fpa;

#[doc(inline)]
pub use config::CutConfig;
#[doc(inline)]
pub use config::DEFAULT_MIN_CUT_LENGTH;
#[doc(inline)]
pub use config::KerfPolicy;
#[doc(inline)]
pub use fpa::EPSILON;
#[doc(inline)]
pub use fpa::FPA;
#[doc(inline)]
pub use fpa::to_mm;
