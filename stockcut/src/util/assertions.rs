//Various checks to verify correctness of the state of the system
//Used in debug_assert!() blocks and tests

use itertools::Itertools;
use log::error;

use crate::entities::{Bin, OptimizationResult, PatternKey, Piece};
use crate::util::FPA;

/// Every bin holds at most its stock length worth of pieces and blade loss
pub fn bins_respect_capacity(bins: &[Bin]) -> bool {
    bins.iter().all(|b| {
        let ok = FPA(b.used_length()) <= FPA(b.stock_length)
            && FPA(b.used_length() + b.free_space()) == FPA(b.stock_length);
        if !ok {
            error!(
                "bin overdrawn: used {}, free {}, stock {}",
                b.used_length(),
                b.free_space(),
                b.stock_length
            );
        }
        ok
    })
}

/// Every piece of the input appears in exactly one bin, no piece was created or lost
pub fn pieces_conserved(pieces: &[Piece], bins: &[Bin]) -> bool {
    let placed = bins.iter().flat_map(|b| b.pieces.iter()).cloned().collect_vec();
    placed.len() == pieces.len() && PatternKey::new(&placed) == PatternKey::new(pieces)
}

/// The segments of a spliced run cover exactly the required length:
/// `Σ segments − (K − 1) × overlap == length`
pub fn decomposition_matches(length: f64, segments: &[f64], splice_overlap: f64) -> bool {
    let covered = segments.iter().sum::<f64>()
        - segments.len().saturating_sub(1) as f64 * splice_overlap;
    FPA(covered) == FPA(length)
}

/// The aggregate metrics of a result are consistent with its patterns
pub fn result_is_consistent(result: &OptimizationResult) -> bool {
    let bars = result.patterns.iter().map(|p| p.count).sum::<usize>();
    let cuts = result.pieces().count();
    let efficiency_ok = match bars {
        0 => result.efficiency == 0.0,
        _ => result.efficiency > 0.0 && result.efficiency <= 1.0,
    };

    bars == result.bars_required
        && cuts == result.total_cuts
        && result.lower_bound <= result.bars_required
        && efficiency_ok
}
