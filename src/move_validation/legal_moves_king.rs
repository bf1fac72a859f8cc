use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::game_state::{back_rank, home_king_square};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_validation::legal_move_checks::king_into_check;
use crate::move_validation::legal_move_shared::{
    check_destination, classify_origin, select_unique_origin,
};
use crate::moves::king_moves::is_king_step;
use crate::moves::move_descriptions::MoveDescription;
use crate::notation::san_parser::PieceNotation;

/// Files that must be empty between king and rook.
const fn castling_gap(side: CastleSide) -> &'static [usize] {
    match side {
        CastleSide::Kingside => &[5, 6],
        CastleSide::Queenside => &[1, 2, 3],
    }
}

/// Files the king stands on, crosses and lands on; none may be attacked.
const fn castling_king_path(side: CastleSide) -> [usize; 3] {
    match side {
        CastleSide::Kingside => [4, 5, 6],
        CastleSide::Queenside => [4, 3, 2],
    }
}

/// King destination file when castling.
pub const fn castling_king_file(side: CastleSide) -> usize {
    match side {
        CastleSide::Kingside => 6,
        CastleSide::Queenside => 2,
    }
}

/// Rook (origin, destination) files when castling.
pub const fn castling_rook_files(side: CastleSide) -> (usize, usize) {
    match side {
        CastleSide::Kingside => (7, 5),
        CastleSide::Queenside => (0, 3),
    }
}

/// The king's origin is always the cached king square, so there is no search.
pub fn resolve_king_move(
    game_state: &GameState,
    notation: &str,
    parsed: &PieceNotation,
) -> ChessResult<MoveDescription> {
    let color = game_state.side_to_move();
    let target = check_destination(game_state, notation, parsed, color)?;

    let from = game_state.king_square(color);
    if !is_king_step(from, parsed.to) {
        return Err(ChessErrors::NoCandidate {
            notation: notation.to_owned(),
        });
    }
    let from = select_unique_origin(
        notation,
        [classify_origin(game_state, color, PieceKind::King, from, parsed.to)],
    )?;

    Ok(MoveDescription::quiet(from, parsed.to, game_state.piece_at(from), target))
}

/// Whether `color` may castle towards `side` in this position, regardless of
/// whose turn it is.
///
/// Requires an unmoved king on its home square, an unmoved rook flag for that
/// side, empty squares between them, and no attack on the king's square, the
/// square it crosses or the square it lands on. Only the rook's move flag is
/// consulted, not its presence on the corner.
pub fn castling_is_legal(game_state: &GameState, color: Color, side: CastleSide) -> bool {
    if game_state.king_moved(color) || game_state.rook_moved(color, side) {
        return false;
    }

    let home = home_king_square(color);
    if !game_state.piece_at(home).is(color, PieceKind::King) {
        return false;
    }

    let rank = back_rank(color);
    let gap_is_empty = castling_gap(side)
        .iter()
        .all(|&file| game_state.piece_at(Square::from_rank_file(rank, file)).is_empty);
    if !gap_is_empty {
        return false;
    }

    castling_king_path(side)
        .iter()
        .all(|&file| !king_into_check(game_state, home, Square::from_rank_file(rank, file)))
}

pub fn resolve_castling(
    game_state: &GameState,
    notation: &str,
    side: CastleSide,
) -> ChessResult<MoveDescription> {
    let color = game_state.side_to_move();
    if !castling_is_legal(game_state, color, side) {
        return Err(ChessErrors::CastlingNotPermitted(notation.to_owned()));
    }

    let from = home_king_square(color);
    let to = Square::from_rank_file(back_rank(color), castling_king_file(side));
    Ok(MoveDescription {
        castle: Some(side),
        ..MoveDescription::quiet(from, to, game_state.piece_at(from), Piece::EMPTY)
    })
}
