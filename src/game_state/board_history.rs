use std::collections::VecDeque;

use crate::game_state::chess_rules::BOARD_HISTORY_DEPTH;
use crate::game_state::chess_types::BoardGrid;

/// Most-recent-first ring of prior board grids.
///
/// Only the feature encoder fills this; ordinary play never touches it.
#[derive(Debug, Clone, Default)]
pub struct BoardHistory {
    grids: VecDeque<BoardGrid>,
}

impl BoardHistory {
    pub fn new() -> Self {
        Self {
            grids: VecDeque::with_capacity(BOARD_HISTORY_DEPTH + 1),
        }
    }

    /// Inserts `grid` at the front and evicts anything beyond the depth limit.
    pub fn push(&mut self, grid: BoardGrid) {
        self.grids.push_front(grid);
        self.grids.truncate(BOARD_HISTORY_DEPTH);
    }

    /// Grid `plies_ago` plies before the most recent push (0 = most recent).
    #[inline]
    pub fn get(&self, plies_ago: usize) -> Option<&BoardGrid> {
        self.grids.get(plies_ago)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.grids.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BoardGrid> {
        self.grids.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::BoardHistory;
    use crate::game_state::chess_rules::BOARD_HISTORY_DEPTH;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};

    fn marked_grid(file: usize) -> crate::game_state::chess_types::BoardGrid {
        let mut grid = [[Piece::EMPTY; 8]; 8];
        grid[0][file % 8] = Piece::new(PieceKind::Rook, Color::Black);
        grid
    }

    #[test]
    fn history_keeps_most_recent_first() {
        let mut history = BoardHistory::new();
        history.push(marked_grid(0));
        history.push(marked_grid(1));

        assert_eq!(history.len(), 2);
        assert!(history.get(0).unwrap()[0][1].is(Color::Black, PieceKind::Rook));
        assert!(history.get(1).unwrap()[0][0].is(Color::Black, PieceKind::Rook));
    }

    #[test]
    fn history_evicts_beyond_depth() {
        let mut history = BoardHistory::new();
        for file in 0..(BOARD_HISTORY_DEPTH + 3) {
            history.push(marked_grid(file));
        }

        assert_eq!(history.len(), BOARD_HISTORY_DEPTH);
        assert!(history.get(BOARD_HISTORY_DEPTH).is_none());
        let newest = (BOARD_HISTORY_DEPTH + 2) % 8;
        assert!(history.get(0).unwrap()[0][newest].is(Color::Black, PieceKind::Rook));
    }
}
