//! Whole-game validation: replay a move list from the opening array.

use log::debug;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::game_state::GameState;
use crate::moves::move_descriptions::MoveDescription;
use crate::moves::move_record::MoveRecord;

/// Replays `moves` from the standard starting position and returns the final
/// state. Stops cleanly at a result marker and fails on the first illegal
/// record, reporting its ply (0-based).
pub fn replay_game(moves: &[MoveRecord]) -> ChessResult<GameState> {
    let mut game_state = GameState::new_game();
    for (ply, record) in moves.iter().enumerate() {
        if record.is_result_marker() {
            break;
        }
        play_record(&mut game_state, ply, record)?;
    }
    Ok(game_state)
}

/// True when every record up to the result marker (or the end of the list) is
/// a legal move for the side to move.
pub fn is_legal_game(moves: &[MoveRecord]) -> bool {
    match replay_game(moves) {
        Ok(_) => true,
        Err(err) => {
            debug!("game rejected: {err}");
            false
        }
    }
}

/// Plays a single record, checking that it belongs to the side to move.
pub(crate) fn play_record(
    game_state: &mut GameState,
    ply: usize,
    record: &MoveRecord,
) -> ChessResult<MoveDescription> {
    let expected = game_state.side_to_move();
    if record.color != expected {
        return Err(ChessErrors::OutOfTurn {
            ply,
            expected,
            found: record.color,
        });
    }

    game_state
        .try_apply_move(&record.notation)
        .map_err(|source| ChessErrors::IllegalGameMove {
            ply,
            notation: record.notation.clone(),
            source: Box::new(source),
        })
}
