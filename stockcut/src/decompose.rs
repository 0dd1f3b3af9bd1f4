use std::sync::Arc;

use log::debug;

use crate::entities::{CutRequirement, Piece, SegmentMarker, StockSpec};
use crate::util::assertions::decomposition_matches;
use crate::util::{CutConfig, EPSILON, FPA};

/// Splits a single run of `length` into segment lengths realizable from `stock`.
///
/// Runs that fit on one bar are returned as-is (a run within tolerance of the stock length becomes one full bar).
/// Longer runs are covered by full stock bars, each extra bar adding [`StockSpec::effective_gain`] to the run,
/// followed by a tail which laps the last full bar.
/// The segments always satisfy `Σ segments − (K − 1) × overlap == length` and are never longer than the stock.
///
/// A tail shorter than `min_cut_length` is not emitted as a sliver: if its net contribution to the run is
/// negligible it is merged into the preceding segment, otherwise the preceding segment is shortened so the
/// tail reaches `min_cut_length`.
pub fn split_run(length: f64, stock: &StockSpec, min_cut_length: f64) -> Vec<f64> {
    let stock_length = stock.stock_length();
    if FPA(length) <= FPA(stock_length) {
        return vec![length.min(stock_length)];
    }

    let overlap = stock.splice_overlap();
    let gain = stock.effective_gain();
    let n_full = ((length - stock_length - EPSILON) / gain).ceil().max(1.0) as usize;

    let mut segments = vec![stock_length; n_full];
    let tail = length - n_full as f64 * gain;

    if tail < min_cut_length {
        let surplus = tail - overlap;
        let last = segments.last_mut().expect("at least one full segment");
        if FPA(surplus) <= FPA(0.0) {
            *last += surplus.max(0.0);
        } else if min_cut_length < stock_length {
            let shift = min_cut_length - tail;
            *last -= shift;
            segments.push(min_cut_length);
        } else {
            segments.push(tail);
        }
    } else {
        segments.push(tail.min(stock_length));
    }

    segments
}

/// Converts a requirement into the individual pieces to be cut.
///
/// Ignorable requirements (non-positive length or quantity) yield no pieces.
/// A requirement which needs `K` segments yields `K × quantity` pieces, marked with their position in the run.
pub fn decompose(req: &CutRequirement, stock: &StockSpec, config: &CutConfig) -> Vec<Piece> {
    if req.is_ignorable() {
        debug!(
            "ignoring requirement '{}' (length: {}, quantity: {})",
            req.label, req.length, req.quantity
        );
        return vec![];
    }

    let label: Arc<str> = Arc::from(req.label.as_str());
    let segments = split_run(req.length, stock, config.min_cut_length);

    debug_assert!(
        decomposition_matches(req.length, &segments, stock.splice_overlap()),
        "segments {:?} do not cover a run of {}",
        segments,
        req.length
    );

    match segments.as_slice() {
        [length] => (0..req.quantity)
            .map(|_| Piece::new(*length, label.clone()))
            .collect(),
        _ => {
            debug!(
                "requirement '{}' of length {} is spliced into {} segments: {:?}",
                req.label,
                req.length,
                segments.len(),
                segments
            );
            let n_segments = segments.len();
            (0..req.quantity)
                .flat_map(|_| {
                    segments.iter().enumerate().map(|(index, length)| {
                        Piece::segment(
                            *length,
                            label.clone(),
                            SegmentMarker { index, n_segments },
                        )
                    })
                })
                .collect()
        }
    }
}

/// Decomposes all requirements of a group into one flat list of pieces, in requirement order.
pub fn decompose_all(reqs: &[CutRequirement], stock: &StockSpec, config: &CutConfig) -> Vec<Piece> {
    reqs.iter()
        .flat_map(|req| decompose(req, stock, config))
        .collect()
}
