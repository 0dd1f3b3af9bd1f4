use crate::entities::{PatternKey, Piece};
use crate::util::{FPA, KerfPolicy};

/// The cutting layout of a single stock bar.
#[derive(Debug, Clone)]
pub struct Bin {
    /// Length of the stock bar
    pub stock_length: f64,
    /// Pieces in the order they were placed on the bar
    pub pieces: Vec<Piece>,
    /// Total blade loss charged against this bar
    pub kerf_charged: f64,
}

impl Bin {
    pub fn new(stock_length: f64) -> Self {
        Self {
            stock_length,
            pieces: vec![],
            kerf_charged: 0.0,
        }
    }

    /// Sum of the lengths of the pieces placed on the bar
    pub fn piece_length(&self) -> f64 {
        self.pieces.iter().map(|p| p.length).sum()
    }

    /// Length consumed by pieces and blade loss
    pub fn used_length(&self) -> f64 {
        self.piece_length() + self.kerf_charged
    }

    /// Remaining length of the bar, never negative. Only for reporting, capacity checks use [`Bin::remaining`]
    pub fn free_space(&self) -> f64 {
        self.remaining().max(0.0)
    }

    /// Unclamped remaining length, negative if the tolerance let the bar be overdrawn
    pub fn remaining(&self) -> f64 {
        self.stock_length - self.used_length()
    }

    pub fn is_empty(&self) -> bool {
        self.pieces.is_empty()
    }

    /// Returns the kerf that would be charged for placing a piece of `length` on this bar,
    /// or `None` if the piece and its kerf do not fit in the remaining space.
    pub fn fits(&self, length: f64, kerf_loss: f64, policy: KerfPolicy) -> Option<f64> {
        let kerf = policy.charge(kerf_loss, self.pieces.len());
        match FPA(self.used_length() + length + kerf) <= FPA(self.stock_length) {
            true => Some(kerf),
            false => None,
        }
    }

    /// Places a piece on the bar, charging `kerf`.
    /// The charge is capped at the space left after the piece, so the bar is never overdrawn:
    /// a piece filling the bar (nearly) completely does not need a separating cut.
    pub fn place(&mut self, piece: Piece, kerf: f64) {
        debug_assert!(
            FPA(self.used_length() + piece.length) <= FPA(self.stock_length),
            "piece of length {} does not fit in {} of remaining space",
            piece.length,
            self.remaining()
        );
        let kerf = kerf.min((self.remaining() - piece.length).max(0.0));
        self.kerf_charged += kerf;
        self.pieces.push(piece);
    }

    /// Canonical signature of the bar's contents, independent of the placement order
    pub fn signature(&self) -> PatternKey {
        PatternKey::new(&self.pieces)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn piece(length: f64) -> Piece {
        Piece::new(length, Arc::from("p"))
    }

    #[test]
    fn kerf_is_charged_per_cut() {
        let mut bin = Bin::new(6.0);
        let kerf = bin.fits(2.0, 0.005, KerfPolicy::PerCut).unwrap();
        assert_eq!(kerf, 0.005);
        bin.place(piece(2.0), kerf);
        let kerf = bin.fits(2.0, 0.005, KerfPolicy::PerCut).unwrap();
        bin.place(piece(2.0), kerf);
        assert!((bin.used_length() - 4.01).abs() < 1e-9);
        assert!((bin.free_space() - 1.99).abs() < 1e-9);
        assert!(bin.fits(1.99, 0.005, KerfPolicy::PerCut).is_none());
        assert!(bin.fits(1.985, 0.005, KerfPolicy::PerCut).is_some());
    }

    #[test]
    fn kerf_is_charged_per_gap() {
        let mut bin = Bin::new(6.0);
        let kerf = bin.fits(3.0, 0.005, KerfPolicy::PerGap).unwrap();
        assert_eq!(kerf, 0.0);
        bin.place(piece(3.0), kerf);
        assert_eq!(bin.fits(2.0, 0.005, KerfPolicy::PerGap), Some(0.005));
        assert!(bin.fits(3.0, 0.005, KerfPolicy::PerGap).is_none());
    }

    #[test]
    fn full_length_piece_is_not_charged() {
        let mut bin = Bin::new(6.0);
        assert!(bin.fits(6.0, 0.005, KerfPolicy::PerCut).is_none());
        bin.place(piece(6.0), 0.005);
        assert_eq!(bin.kerf_charged, 0.0);
        assert_eq!(bin.free_space(), 0.0);
        assert_eq!(bin.used_length(), 6.0);
    }

    #[test]
    fn tolerance_does_not_accumulate_on_a_full_bar() {
        let mut bin = Bin::new(1.0);
        bin.place(piece(1.0), 0.0);
        // a single sub-millimeter overshoot is within tolerance
        let kerf = bin.fits(0.0009, 0.0, KerfPolicy::PerCut).unwrap();
        bin.place(piece(0.0009), kerf);
        assert_eq!(bin.free_space(), 0.0);
        assert!(bin.remaining() < 0.0);
        for _ in 0..20 {
            assert!(bin.fits(0.0009, 0.0, KerfPolicy::PerCut).is_none());
        }
        assert!(FPA(bin.used_length()) <= FPA(1.0));
    }

    #[test]
    fn nearly_full_piece_is_charged_remaining_stock() {
        let mut bin = Bin::new(6.0);
        bin.place(piece(5.998), 0.005);
        assert!((bin.kerf_charged - 0.002).abs() < 1e-9);
        assert!(bin.free_space() < 1e-9);
    }
}
