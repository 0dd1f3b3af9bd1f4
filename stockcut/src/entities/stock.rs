use crate::error::ConfigError;
use crate::util::FPA;
use log::warn;

/// Standard lap length of a reinforcing bar splice, expressed in bar diameters
pub const LAP_FACTOR: f64 = 40.0;

/// The purchasing unit of one material/size group.
///
/// Can only be constructed through [`StockSpec::new`], which guarantees:
/// * `stock_length > 0`
/// * `kerf_loss >= 0`
/// * `0 <= splice_overlap < stock_length`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StockSpec {
    stock_length: f64,
    kerf_loss: f64,
    splice_overlap: f64,
}

impl StockSpec {
    /// Creates a validated stock specification.
    ///
    /// * `stock_length` - Commercial length of one purchasable bar, in meters.
    /// * `kerf_loss` - Material removed by the saw per cut.
    /// * `splice_overlap` - Lap length required when a run spans several bars. Negative values are treated as zero.
    pub fn new(stock_length: f64, kerf_loss: f64, splice_overlap: f64) -> Result<Self, ConfigError> {
        if !(stock_length.is_finite() && stock_length > 0.0) {
            return Err(ConfigError::NonPositiveStockLength(stock_length));
        }
        if !(kerf_loss.is_finite() && kerf_loss >= 0.0) {
            return Err(ConfigError::NegativeKerf(kerf_loss));
        }
        let splice_overlap = match splice_overlap.is_nan() || splice_overlap < 0.0 {
            true => {
                warn!("splice overlap of {splice_overlap} is not a valid length, treating it as 0");
                0.0
            }
            false => splice_overlap,
        };
        if FPA(splice_overlap) >= FPA(stock_length) {
            return Err(ConfigError::SpliceOverlapTooLong {
                overlap: splice_overlap,
                stock_length,
            });
        }

        Ok(Self {
            stock_length,
            kerf_loss,
            splice_overlap,
        })
    }

    /// Stock spec for reinforcing bar, with the lap length derived from the bar diameter.
    pub fn rebar(stock_length: f64, kerf_loss: f64, bar_diameter: f64) -> Result<Self, ConfigError> {
        Self::new(stock_length, kerf_loss, LAP_FACTOR * bar_diameter)
    }

    pub fn stock_length(&self) -> f64 {
        self.stock_length
    }

    pub fn kerf_loss(&self) -> f64 {
        self.kerf_loss
    }

    pub fn splice_overlap(&self) -> f64 {
        self.splice_overlap
    }

    /// Length added to a run by every extra bar, after paying for the lap with the previous segment
    pub fn effective_gain(&self) -> f64 {
        self.stock_length - self.splice_overlap
    }
}
