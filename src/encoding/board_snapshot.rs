use crate::game_state::chess_rules::{BOARD_SIZE, ONE_HOT_WIDTH};
use crate::game_state::chess_types::{BoardGrid, Piece};

/// Twelve-wide one-hot of a square's occupant (kind + 6 * side); all zeros
/// for an empty square.
pub type PieceOneHot = [u8; ONE_HOT_WIDTH];

/// Per-square one-hot export of a board, indexed `[rank][file]`.
pub type BoardSnapshot = [[PieceOneHot; BOARD_SIZE]; BOARD_SIZE];

#[inline]
pub fn piece_one_hot(piece: Piece) -> PieceOneHot {
    let mut one_hot = [0u8; ONE_HOT_WIDTH];
    if let Some(index) = piece.one_hot_index() {
        one_hot[index] = 1;
    }
    one_hot
}

pub fn board_snapshot(grid: &BoardGrid) -> BoardSnapshot {
    let mut snapshot = [[[0u8; ONE_HOT_WIDTH]; BOARD_SIZE]; BOARD_SIZE];
    for (rank, row) in grid.iter().enumerate() {
        for (file, piece) in row.iter().enumerate() {
            snapshot[rank][file] = piece_one_hot(*piece);
        }
    }
    snapshot
}

#[cfg(test)]
mod tests {
    use crate::game_state::game_state::GameState;

    #[test]
    fn start_position_snapshot() {
        let snapshot = GameState::new_game().board_snapshot();
        // a8 black rook: rook index 3 + 6.
        assert_eq!(snapshot[0][0][9], 1);
        // e1 white king.
        assert_eq!(snapshot[7][4][5], 1);
        // e2 white pawn.
        assert_eq!(snapshot[6][4][0], 1);
        assert!(snapshot[4][4].iter().all(|bit| *bit == 0));
    }

    #[test]
    fn every_occupied_square_has_exactly_one_bit() {
        let snapshot = GameState::new_game().board_snapshot();
        let occupied = snapshot
            .iter()
            .flatten()
            .filter(|one_hot| one_hot.iter().map(|bit| *bit as u32).sum::<u32>() == 1)
            .count();
        assert_eq!(occupied, 32);
    }
}
