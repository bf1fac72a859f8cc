use crate::game_state::chess_rules::{BLACK_BACK_RANK, WHITE_BACK_RANK};
use crate::game_state::chess_types::{Color, Square};

/// Rank step of a pawn advance. White moves towards rank index 0.
#[inline]
pub const fn forward_step(color: Color) -> i32 {
    match color {
        Color::White => -1,
        Color::Black => 1,
    }
}

/// Rank index a double advance lands on.
#[inline]
pub const fn double_push_rank(color: Color) -> usize {
    match color {
        Color::White => 4,
        Color::Black => 3,
    }
}

/// Rank index where a pawn of `color` promotes.
#[inline]
pub const fn promotion_rank(color: Color) -> usize {
    match color {
        Color::White => BLACK_BACK_RANK,
        Color::Black => WHITE_BACK_RANK,
    }
}

/// Squares from which a pawn of `color` attacks `target`.
pub fn pawn_attack_origins(color: Color, target: Square) -> impl Iterator<Item = Square> {
    let back = -forward_step(color);
    [-1, 1]
        .into_iter()
        .filter_map(move |d_file| target.offset(back, d_file))
}
