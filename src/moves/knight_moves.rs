use crate::game_state::chess_types::Square;

/// The eight (rank, file) knight jumps.
pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

/// On-board squares a knight jump away from `square`. Knight moves are
/// symmetric, so these are both the squares a knight on `square` attacks and
/// the squares a knight could come from to land on it.
pub fn knight_jumps(square: Square) -> impl Iterator<Item = Square> {
    KNIGHT_OFFSETS
        .iter()
        .filter_map(move |&(d_rank, d_file)| square.offset(d_rank, d_file))
}

#[cfg(test)]
mod tests {
    use super::knight_jumps;
    use crate::game_state::chess_types::Square;

    #[test]
    fn knight_jumps_from_d4_has_eight_targets() {
        let d4 = Square::try_new(4, 3).unwrap();
        assert_eq!(knight_jumps(d4).count(), 8);
    }

    #[test]
    fn knight_jumps_from_corner_has_two_targets() {
        let a1 = Square::try_new(7, 0).unwrap();
        let targets: Vec<Square> = knight_jumps(a1).collect();
        assert_eq!(targets.len(), 2);
        assert!(targets.contains(&Square::try_new(5, 1).unwrap()));
        assert!(targets.contains(&Square::try_new(6, 2).unwrap()));
    }
}
