use log::debug;

use crate::entities::{Bin, GroupedPattern, Piece, StockSpec, group_bins};
use crate::util::EPSILON;

/// Cutting plan for one stock group: the grouped bar layouts and aggregate metrics.
#[derive(Debug, Clone)]
pub struct OptimizationResult {
    /// Distinct bar layouts, in order of first appearance
    pub patterns: Vec<GroupedPattern>,
    /// Length of the stock bars the plan was made for
    pub stock_length: f64,
    /// Number of stock bars to purchase
    pub bars_required: usize,
    /// Useful length divided by purchased length, 0 if no bars are required
    pub efficiency: f64,
    /// Total remaining length over all bars
    pub waste_total: f64,
    /// Total number of pieces cut
    pub total_cuts: usize,
    /// Sum of the lengths of all pieces cut
    pub useful_length: f64,
    /// Total blade loss over all bars
    pub kerf_total: f64,
    /// Trivial lower bound on the number of bars: consumed length divided by the stock length
    pub lower_bound: usize,
}

impl OptimizationResult {
    /// Result for a group without any demand.
    pub fn empty(stock: &StockSpec) -> Self {
        Self {
            patterns: vec![],
            stock_length: stock.stock_length(),
            bars_required: 0,
            efficiency: 0.0,
            waste_total: 0.0,
            total_cuts: 0,
            useful_length: 0.0,
            kerf_total: 0.0,
            lower_bound: 0,
        }
    }

    /// Groups the bins into patterns and computes the aggregate metrics.
    pub fn from_bins(bins: &[Bin], stock: &StockSpec) -> Self {
        let patterns = group_bins(bins);
        if patterns.is_empty() {
            return Self::empty(stock);
        }
        let stock_length = stock.stock_length();

        let bars_required = patterns.iter().map(|p| p.count).sum::<usize>();
        let total_cuts = patterns.iter().map(|p| p.pieces.len() * p.count).sum();
        let waste_total = patterns.iter().map(|p| p.free_space * p.count as f64).sum();
        let useful_length = bins.iter().map(|b| b.piece_length()).sum::<f64>();
        let kerf_total = bins.iter().map(|b| b.kerf_charged).sum::<f64>();
        // pieces accepted within tolerance may exceed the bar by a fraction of a millimeter
        let efficiency = (useful_length / (bars_required as f64 * stock_length)).min(1.0);

        let consumed = useful_length + kerf_total;
        let lower_bound = ((consumed - EPSILON) / stock_length).ceil().max(1.0) as usize;

        debug!(
            "{} bins grouped into {} patterns (lower bound: {} bars)",
            bins.len(),
            patterns.len(),
            lower_bound
        );

        Self {
            patterns,
            stock_length,
            bars_required,
            efficiency,
            waste_total,
            total_cuts,
            useful_length,
            kerf_total,
            lower_bound,
        }
    }

    /// Total length of stock purchased
    pub fn purchased_length(&self) -> f64 {
        self.bars_required as f64 * self.stock_length
    }

    /// Iterates over every piece cut, repeating the pieces of each pattern `count` times
    pub fn pieces(&self) -> impl Iterator<Item = &Piece> {
        self.patterns
            .iter()
            .flat_map(|p| std::iter::repeat_n(&p.pieces, p.count).flatten())
    }
}
