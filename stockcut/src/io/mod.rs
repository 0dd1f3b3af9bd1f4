mod export;
mod import;

/// External (serializable) representations of instances and results.
pub mod ext_repr;

#[doc(inline)]
pub use export::export;
#[doc(inline)]
pub use export::export_result;
#[doc(inline)]
pub use import::import;
#[doc(inline)]
pub use import::import_group;
#[doc(inline)]
pub use import::import_requirement;
#[doc(inline)]
pub use import::import_stock;
