use crate::chess_errors::ChessResult;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_validation::legal_move_shared::{
    check_destination, classify_origin, path_is_clear, resolve_slider, select_unique_origin,
    CandidateOutcome,
};
use crate::moves::move_descriptions::MoveDescription;
use crate::moves::queen_moves::ALL_DIRECTIONS;
use crate::notation::san_parser::PieceNotation;

/// Without a disambiguator the queen is found like any slider. With one, every
/// queen on the named file or rank is checked for a clear line to the
/// destination, which also covers promoted queens sitting behind each other.
pub fn resolve_queen_move(
    game_state: &GameState,
    notation: &str,
    parsed: &PieceNotation,
) -> ChessResult<MoveDescription> {
    if !parsed.is_disambiguated() {
        return resolve_slider(game_state, notation, parsed, &ALL_DIRECTIONS);
    }

    let color = game_state.side_to_move();
    let target = check_destination(game_state, notation, parsed, color)?;

    let outcomes = Square::all()
        .filter(|square| parsed.matches_origin(*square))
        .filter(|square| game_state.piece_at(*square).is(color, PieceKind::Queen))
        .map(|from| {
            if path_is_clear(game_state, from, parsed.to) {
                classify_origin(game_state, color, PieceKind::Queen, from, parsed.to)
            } else {
                CandidateOutcome::Blocked(from)
            }
        });
    let from = select_unique_origin(notation, outcomes)?;

    Ok(MoveDescription::quiet(from, parsed.to, game_state.piece_at(from), target))
}
