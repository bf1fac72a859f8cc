use crate::chess_errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::move_validation::legal_move_shared::{
    check_destination, classify_origin, select_unique_origin, CandidateOutcome,
};
use crate::moves::knight_moves::knight_jumps;
use crate::moves::move_descriptions::MoveDescription;
use crate::notation::san_parser::PieceNotation;

/// Knights jump, so every one of the eight jump origins is examined directly;
/// those outside the disambiguator are skipped before the check probe.
pub fn resolve_knight_move(
    game_state: &GameState,
    notation: &str,
    parsed: &PieceNotation,
) -> ChessResult<MoveDescription> {
    let color = game_state.side_to_move();
    let target = check_destination(game_state, notation, parsed, color)?;

    let outcomes = knight_jumps(parsed.to).map(|from| {
        if parsed.matches_origin(from) {
            classify_origin(game_state, color, parsed.kind, from, parsed.to)
        } else {
            CandidateOutcome::Blocked(from)
        }
    });
    let from = select_unique_origin(notation, outcomes)?;

    Ok(MoveDescription::quiet(from, parsed.to, game_state.piece_at(from), target))
}

#[cfg(test)]
mod tests {
    use crate::chess_errors::ChessErrors;
    use crate::game_state::game_state::GameState;
    use crate::move_validation::legal_move_validator::resolve_move;
    use crate::notation::algebraic::algebraic_to_square;

    #[test]
    fn knight_develops_from_g1() {
        let game = GameState::new_game();
        let mv = resolve_move(&game, "Nf3").unwrap();
        assert_eq!(mv.from, algebraic_to_square("g1").unwrap());
    }

    #[test]
    fn knight_cannot_move_diagonally() {
        let game = GameState::new_game();
        assert!(matches!(resolve_move(&game, "Ne3"), Err(ChessErrors::NoCandidate { .. })));
    }

    #[test]
    fn two_knights_need_a_disambiguator() {
        let game = GameState::from_fen("4k3/8/8/8/8/5N2/8/1N2K3 w - - 0 1").unwrap();
        assert!(matches!(resolve_move(&game, "Nd2"), Err(ChessErrors::AmbiguousMove { .. })));
        assert_eq!(resolve_move(&game, "Nbd2").unwrap().from, algebraic_to_square("b1").unwrap());
        assert_eq!(resolve_move(&game, "Nfd2").unwrap().from, algebraic_to_square("f3").unwrap());
        assert_eq!(resolve_move(&game, "N3d2").unwrap().from, algebraic_to_square("f3").unwrap());
    }

    #[test]
    fn pinned_knight_leaves_the_other_as_unique_origin() {
        // The c3 knight is pinned by the a5 bishop; Ne2 is only playable from g1.
        let game = GameState::from_fen("4k3/8/8/b7/8/2N5/8/4K1N1 w - - 0 1").unwrap();
        assert_eq!(resolve_move(&game, "Ne2").unwrap().from, algebraic_to_square("g1").unwrap());
    }

    #[test]
    fn capture_marker_must_match_the_board() {
        let game = GameState::new_game();
        assert!(matches!(resolve_move(&game, "Nxf3"), Err(ChessErrors::CaptureMismatch(_))));
        assert!(matches!(resolve_move(&game, "Nd2"), Err(ChessErrors::OwnPieceOnDestination(_))));
    }
}
