use crate::game_state::chess_types::Square;
use crate::moves::bishop_moves::DIAGONAL_DIRECTIONS;
use crate::moves::rook_moves::STRAIGHT_DIRECTIONS;

/// All eight sliding directions, straight lines first.
pub const ALL_DIRECTIONS: [(i32, i32); 8] = [
    STRAIGHT_DIRECTIONS[0],
    STRAIGHT_DIRECTIONS[1],
    STRAIGHT_DIRECTIONS[2],
    STRAIGHT_DIRECTIONS[3],
    DIAGONAL_DIRECTIONS[0],
    DIAGONAL_DIRECTIONS[1],
    DIAGONAL_DIRECTIONS[2],
    DIAGONAL_DIRECTIONS[3],
];

/// Unit step from `from` towards `to` when the two share a rank, file or
/// diagonal; `None` otherwise (and for `from == to`).
pub fn line_direction(from: Square, to: Square) -> Option<(i32, i32)> {
    let d_rank = to.rank() as i32 - from.rank() as i32;
    let d_file = to.file() as i32 - from.file() as i32;
    if d_rank == 0 && d_file == 0 {
        return None;
    }
    if d_rank != 0 && d_file != 0 && d_rank.abs() != d_file.abs() {
        return None;
    }
    Some((d_rank.signum(), d_file.signum()))
}
