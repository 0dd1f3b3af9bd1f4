use thiserror::Error;

/// Fatal problems with a stock specification (or pieces that do not belong to it).
/// Raised before any decomposition or packing work starts and never worth retrying with the same input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("stock length must be a positive, finite number, got {0}")]
    NonPositiveStockLength(f64),

    #[error("kerf loss must be a non-negative, finite number, got {0}")]
    NegativeKerf(f64),

    #[error("splice overlap ({overlap}) must be shorter than the stock length ({stock_length})")]
    SpliceOverlapTooLong { overlap: f64, stock_length: f64 },

    #[error("piece '{label}' of length {length} does not fit on a stock bar of length {stock_length}")]
    PieceExceedsStock {
        label: String,
        length: f64,
        stock_length: f64,
    },
}

/// A [`ConfigError`] in one of the groups of an instance.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid stock specification for group '{group}': {source}")]
pub struct GroupError {
    pub group: String,
    #[source]
    pub source: ConfigError,
}
