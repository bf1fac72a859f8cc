use crate::game_state::chess_types::Square;

/// The eight single-step king offsets.
pub const KING_OFFSETS: [(i32, i32); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub fn king_steps(square: Square) -> impl Iterator<Item = Square> {
    KING_OFFSETS
        .iter()
        .filter_map(move |&(d_rank, d_file)| square.offset(d_rank, d_file))
}

/// True when `to` is exactly one king step from `from`.
#[inline]
pub fn is_king_step(from: Square, to: Square) -> bool {
    from.distance(to) == 1
}
