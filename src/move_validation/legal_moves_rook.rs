use crate::chess_errors::ChessResult;
use crate::game_state::game_state::GameState;
use crate::move_validation::legal_move_shared::resolve_slider;
use crate::moves::move_descriptions::MoveDescription;
use crate::moves::rook_moves::STRAIGHT_DIRECTIONS;
use crate::notation::san_parser::PieceNotation;

pub fn resolve_rook_move(
    game_state: &GameState,
    notation: &str,
    parsed: &PieceNotation,
) -> ChessResult<MoveDescription> {
    resolve_slider(game_state, notation, parsed, &STRAIGHT_DIRECTIONS)
}
