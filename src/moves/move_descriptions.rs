//! Fully resolved moves.
//!
//! The notation parser only knows the destination and whatever the token
//! disambiguates; the legality checker turns that into a `MoveDescription`
//! carrying everything the mutator needs.

use crate::game_state::chess_types::{CastleSide, Piece, PieceKind, Square};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveDescription {
    pub from: Square,
    pub to: Square,
    /// Piece standing on `from` before the move.
    pub moved_piece: Piece,
    /// Occupant of `to` before the move (empty for quiet moves and en passant).
    pub captured_piece: Piece,
    pub promotion: Option<PieceKind>,
    pub castle: Option<CastleSide>,
    /// Square of the pawn removed by an en-passant capture.
    pub en_passant_victim: Option<Square>,
    pub is_double_push: bool,
}

impl MoveDescription {
    pub fn quiet(from: Square, to: Square, moved_piece: Piece, captured_piece: Piece) -> Self {
        Self {
            from,
            to,
            moved_piece,
            captured_piece,
            promotion: None,
            castle: None,
            en_passant_victim: None,
            is_double_push: false,
        }
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        !self.captured_piece.is_empty || self.en_passant_victim.is_some()
    }
}
