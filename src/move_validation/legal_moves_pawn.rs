use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_validation::legal_move_shared::{classify_origin, select_unique_origin};
use crate::moves::move_descriptions::MoveDescription;
use crate::moves::pawn_moves::{double_push_rank, forward_step, promotion_rank};
use crate::notation::san_parser::PieceNotation;

/// Pawn moves are resolved geometrically: a quiet move has at most one origin
/// (one or two squares behind the destination) and a capture names its origin
/// file, so there is never anything to disambiguate.
pub fn resolve_pawn_move(
    game_state: &GameState,
    notation: &str,
    parsed: &PieceNotation,
) -> ChessResult<MoveDescription> {
    let color = game_state.side_to_move();
    let to = parsed.to;
    let target = game_state.piece_at(to);
    if target.belongs_to(color) {
        return Err(ChessErrors::OwnPieceOnDestination(notation.to_owned()));
    }

    let (from, en_passant_victim) = if parsed.is_capture {
        capture_origin(game_state, notation, parsed, color, target)?
    } else {
        if !target.is_empty {
            return Err(ChessErrors::CaptureMismatch(notation.to_owned()));
        }
        (advance_origin(game_state, notation, to, color)?, None)
    };

    let from = select_unique_origin(
        notation,
        [classify_origin(game_state, color, PieceKind::Pawn, from, to)],
    )?;

    let promotion = if to.rank() == promotion_rank(color) {
        Some(parsed.promotion.unwrap_or(PieceKind::Queen))
    } else {
        None
    };

    Ok(MoveDescription {
        promotion,
        en_passant_victim,
        is_double_push: from.rank().abs_diff(to.rank()) == 2,
        ..MoveDescription::quiet(from, to, game_state.piece_at(from), target)
    })
}

/// Origin of a quiet advance: the square behind `to`, or two behind on the
/// double-push rank when the square in between is empty.
fn advance_origin(
    game_state: &GameState,
    notation: &str,
    to: Square,
    color: Color,
) -> ChessResult<Square> {
    let no_candidate = || ChessErrors::NoCandidate {
        notation: notation.to_owned(),
    };
    let back = -forward_step(color);

    let one = to.offset(back, 0).ok_or_else(no_candidate)?;
    let behind = game_state.piece_at(one);
    if behind.is(color, PieceKind::Pawn) {
        return Ok(one);
    }
    if behind.is_empty && to.rank() == double_push_rank(color) {
        let two = one.offset(back, 0).ok_or_else(no_candidate)?;
        if game_state.piece_at(two).is(color, PieceKind::Pawn) {
            return Ok(two);
        }
    }
    Err(no_candidate())
}

/// Origin of a diagonal capture, plus the victim's square when the capture is
/// en passant.
fn capture_origin(
    game_state: &GameState,
    notation: &str,
    parsed: &PieceNotation,
    color: Color,
    target: Piece,
) -> ChessResult<(Square, Option<Square>)> {
    let no_candidate = || ChessErrors::NoCandidate {
        notation: notation.to_owned(),
    };
    let to = parsed.to;
    let from_file = parsed
        .from_file
        .ok_or_else(|| ChessErrors::MalformedNotation(notation.to_owned()))?;
    if from_file.abs_diff(to.file()) != 1 {
        return Err(no_candidate());
    }

    let from_rank = to.rank() as i32 - forward_step(color);
    let from = Square::try_new(from_rank, from_file as i32).ok_or_else(no_candidate)?;

    if !target.is_empty {
        return Ok((from, None));
    }
    if !game_state.is_en_passant_target(to) {
        return Err(ChessErrors::CaptureMismatch(notation.to_owned()));
    }
    let victim = Square::from_rank_file(from.rank(), to.file());
    if !game_state.piece_at(victim).is(color.opposite(), PieceKind::Pawn) {
        return Err(ChessErrors::CaptureMismatch(notation.to_owned()));
    }
    Ok((from, Some(victim)))
}
