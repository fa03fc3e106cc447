use crate::encoding::BitboardSet;
use shakmaty::Color;

/// A position after an annotated move, with its engine evaluation
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    /// Piece placement after the move
    pub bitboards: BitboardSet,

    /// Side-to-move tracker at the time the sample was taken.
    /// Starts at black and flips on every annotated move only, so it can drift
    /// from the real turn when a game has unannotated moves
    pub turn: Color,

    /// Score from the `[%eval ...]` comment
    pub score: f32,
}

impl Sample {
    pub fn white_to_move(&self) -> bool {
        self.turn == Color::White
    }
}
