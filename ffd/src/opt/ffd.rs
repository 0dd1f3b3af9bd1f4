use std::cmp::Reverse;
use std::time::Instant;

use itertools::Itertools;
use log::{debug, info};
use ordered_float::OrderedFloat;
use thousands::Separable;

use stockcut::entities::{Bin, OptimizationResult, Piece, StockSpec};
use stockcut::error::ConfigError;
use stockcut::util::assertions::{bins_respect_capacity, pieces_conserved, result_is_consistent};
use stockcut::util::{CutConfig, FPA};

/// First-Fit-Decreasing (FFD) optimizer for one-dimensional cutting stock problems.
/// Packs the pieces of a single stock group onto as few stock bars as it can.
pub struct FFDOptimizer {
    pub stock: StockSpec,
    pub config: CutConfig,
}

impl FFDOptimizer {
    pub fn new(stock: StockSpec, config: CutConfig) -> Self {
        Self { stock, config }
    }

    /// Packs `pieces` onto stock bars.
    ///
    /// Pieces without a positive length are ignored.
    /// Fails with [`ConfigError::PieceExceedsStock`] before any packing if a piece is longer than the stock.
    pub fn solve(&self, pieces: &[Piece]) -> Result<OptimizationResult, ConfigError> {
        let start = Instant::now();
        let stock_length = self.stock.stock_length();

        let pieces = pieces
            .iter()
            .filter(|p| p.length.is_finite() && p.length > 0.0)
            .cloned()
            .collect_vec();

        if let Some(p) = pieces.iter().find(|p| FPA(p.length) > FPA(stock_length)) {
            return Err(ConfigError::PieceExceedsStock {
                label: p.label.to_string(),
                length: p.length,
                stock_length,
            });
        }

        if pieces.is_empty() {
            debug!("[FFD] no pieces to cut");
            return Ok(OptimizationResult::empty(&self.stock));
        }

        let bins = self.pack(&pieces);

        debug_assert!(bins_respect_capacity(&bins));
        debug_assert!(pieces_conserved(&pieces, &bins));

        let result = OptimizationResult::from_bins(&bins, &self.stock);

        debug_assert!(result_is_consistent(&result));

        info!(
            "[FFD] optimization finished in {:.3}ms ({} pieces)",
            start.elapsed().as_secs_f64() * 1000.0,
            pieces.len().separate_with_commas()
        );
        info!(
            "[FFD] {} bars of {} in {} patterns (lower bound: {}), efficiency of {:.3}%",
            result.bars_required.separate_with_commas(),
            stock_length,
            result.patterns.len(),
            result.lower_bound,
            result.efficiency * 100.0
        );

        Ok(result)
    }

    /// Places every piece, largest first, in the first bin with room for it (kerf included).
    /// A new bin is opened when no open bin has room.
    fn pack(&self, pieces: &[Piece]) -> Vec<Bin> {
        let kerf_loss = self.stock.kerf_loss();
        let policy = self.config.kerf_policy;
        let mut bins: Vec<Bin> = vec![];

        for piece in placement_order(pieces) {
            let first_fit = bins
                .iter_mut()
                .find_map(|bin| bin.fits(piece.length, kerf_loss, policy).map(|k| (bin, k)));

            match first_fit {
                Some((bin, kerf)) => bin.place(piece.clone(), kerf),
                None => {
                    let mut bin = Bin::new(self.stock.stock_length());
                    bin.place(piece.clone(), policy.charge(kerf_loss, 0));
                    debug!(
                        "[FFD] opened bin {} for piece '{}' of length {}",
                        bins.len(),
                        piece.label,
                        piece.length
                    );
                    bins.push(bin);
                }
            }
        }

        bins
    }
}

/// Pieces sorted by descending length. The sort is stable: equally long pieces keep their input order.
pub fn placement_order(pieces: &[Piece]) -> Vec<&Piece> {
    pieces
        .iter()
        .sorted_by_key(|p| Reverse(OrderedFloat(p.length)))
        .collect()
}

/// Packs `pieces` with the default [`CutConfig`] (kerf charged per cut).
pub fn optimize(pieces: &[Piece], stock: &StockSpec) -> Result<OptimizationResult, ConfigError> {
    FFDOptimizer::new(*stock, CutConfig::default()).solve(pieces)
}
