//! Static board evaluation.
//!
//! Scoring sits behind a trait so other heuristics can be swapped in without
//! touching the board engine. The built-in scorer is a plain material count.

use crate::game_state::{chess_types::*, game_state::GameState};

pub trait BoardScorer: Send + Sync {
    /// Score from White's perspective: positive favours White.
    fn score(&self, game_state: &GameState) -> i32;
}

/// Sums piece values (pawn 1, minor 3, rook 5, queen 9, king 0), White
/// positive and Black negative.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> i32 {
        piece.value()
    }

    #[inline]
    fn signed_value(piece: Piece) -> i32 {
        match (piece.is_empty, piece.color) {
            (true, _) => 0,
            (false, Color::White) => Self::piece_value(piece.kind),
            (false, Color::Black) => -Self::piece_value(piece.kind),
        }
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, game_state: &GameState) -> i32 {
        game_state
            .board()
            .iter()
            .flatten()
            .map(|piece| Self::signed_value(*piece))
            .sum()
    }
}
