use crate::chess_errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::move_validation::legal_move_shared::resolve_slider;
use crate::moves::bishop_moves::DIAGONAL_DIRECTIONS;
use crate::moves::move_descriptions::MoveDescription;
use crate::notation::san_parser::PieceNotation;

pub fn resolve_bishop_move(
    game_state: &GameState,
    notation: &str,
    parsed: &PieceNotation,
) -> ChessResult<MoveDescription> {
    resolve_slider(game_state, notation, parsed, &DIAGONAL_DIRECTIONS)
}

#[cfg(test)]
mod tests {
    use crate::chess_errors::ChessErrors;
    use crate::game_state::game_state::GameState;
    use crate::move_validation::legal_move_validator::resolve_move;
    use crate::notation::algebraic::algebraic_to_square;

    #[test]
    fn bishop_needs_an_open_diagonal() {
        let game = GameState::new_game();
        assert!(matches!(resolve_move(&game, "Bc4"), Err(ChessErrors::NoCandidate { .. })));

        let opened = GameState::from_fen("rnbqkbnr/pppp1ppp/8/4p3/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2").unwrap();
        assert_eq!(resolve_move(&opened, "Bc4").unwrap().from, algebraic_to_square("f1").unwrap());
    }

    #[test]
    fn bishop_cannot_move_straight() {
        let game = GameState::from_fen("4k3/8/8/8/8/8/8/2B1K3 w - - 0 1").unwrap();
        assert!(matches!(resolve_move(&game, "Bc4"), Err(ChessErrors::NoCandidate { .. })));
        assert!(resolve_move(&game, "Bf4").is_ok());
    }

    #[test]
    fn bishop_capture_records_the_victim() {
        let game = GameState::from_fen("4k3/8/8/8/8/5p2/8/3BK3 w - - 0 1").unwrap();
        let mv = resolve_move(&game, "Bxf3").unwrap();
        assert!(mv.is_capture());
        assert!(matches!(resolve_move(&game, "Bf3"), Err(ChessErrors::CaptureMismatch(_))));
    }
}
