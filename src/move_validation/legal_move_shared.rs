//! Primitives shared by the per-piece legality checkers.
//!
//! Each checker looks backwards from the destination for pieces that could
//! have made the move, classifies every origin it finds, and hands the
//! outcomes to `select_unique_origin`.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_validation::legal_move_checks::{first_occupied_on_grid, king_into_check};
use crate::moves::move_descriptions::MoveDescription;
use crate::moves::queen_moves::line_direction;
use crate::notation::san_parser::PieceNotation;

/// What a single origin square contributes to resolving a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CandidateOutcome {
    /// Nothing there.
    NoCandidate,
    /// Occupied by something that cannot make this move, or excluded by the
    /// disambiguator.
    Blocked(Square),
    Legal(Square),
    /// Right piece, but moving it leaves the king attacked.
    IllegalIntoCheck(Square),
}

/// Classifies the occupant of `from` as an origin for a `kind` move to `to`.
pub fn classify_origin(
    game_state: &GameState,
    color: Color,
    kind: PieceKind,
    from: Square,
    to: Square,
) -> CandidateOutcome {
    let piece = game_state.piece_at(from);
    if piece.is_empty {
        CandidateOutcome::NoCandidate
    } else if !piece.is(color, kind) {
        CandidateOutcome::Blocked(from)
    } else if king_into_check(game_state, from, to) {
        CandidateOutcome::IllegalIntoCheck(from)
    } else {
        CandidateOutcome::Legal(from)
    }
}

/// Walks from the destination along `direction` and classifies the first
/// occupied square. Hits outside the disambiguator count as blocked and are
/// never probed.
pub fn scan_ray(
    game_state: &GameState,
    parsed: &PieceNotation,
    color: Color,
    direction: (i32, i32),
) -> CandidateOutcome {
    match first_occupied_on_grid(game_state.board(), parsed.to, direction) {
        Some(hit) if parsed.matches_origin(hit) => {
            classify_origin(game_state, color, parsed.kind, hit, parsed.to)
        }
        Some(hit) => CandidateOutcome::Blocked(hit),
        None => CandidateOutcome::NoCandidate,
    }
}

/// True when `from` and `to` share a line and every square strictly between
/// them is empty. Unaligned squares never have a clear path.
pub fn path_is_clear(game_state: &GameState, from: Square, to: Square) -> bool {
    let Some((d_rank, d_file)) = line_direction(from, to) else {
        return false;
    };
    let mut cursor = from.offset(d_rank, d_file);
    while let Some(square) = cursor {
        if square == to {
            return true;
        }
        if !game_state.piece_at(square).is_empty {
            return false;
        }
        cursor = square.offset(d_rank, d_file);
    }
    false
}

/// Reduces candidate outcomes to the single legal origin.
///
/// Exactly one legal origin wins. Several legal origins are ambiguous. With
/// none, the move is reported as leaving the king in check if some candidate
/// failed only the probe, and as having no candidate otherwise.
pub fn select_unique_origin(
    notation: &str,
    outcomes: impl IntoIterator<Item = CandidateOutcome>,
) -> ChessResult<Square> {
    let mut legal = Vec::new();
    let mut into_check = false;
    for outcome in outcomes {
        match outcome {
            CandidateOutcome::Legal(square) => legal.push(square),
            CandidateOutcome::IllegalIntoCheck(_) => into_check = true,
            CandidateOutcome::NoCandidate | CandidateOutcome::Blocked(_) => {}
        }
    }

    match legal.as_slice() {
        [origin] => Ok(*origin),
        [] if into_check => Err(ChessErrors::KingLeftInCheck(notation.to_owned())),
        [] => Err(ChessErrors::NoCandidate {
            notation: notation.to_owned(),
        }),
        _ => Err(ChessErrors::AmbiguousMove {
            notation: notation.to_owned(),
            origins: legal,
        }),
    }
}

/// Destination rules shared by every non-pawn piece: no friendly piece there,
/// and the capture marker agrees with whether something is being taken.
/// Returns the destination's occupant.
pub fn check_destination(
    game_state: &GameState,
    notation: &str,
    parsed: &PieceNotation,
    color: Color,
) -> ChessResult<Piece> {
    let target = game_state.piece_at(parsed.to);
    if target.belongs_to(color) {
        return Err(ChessErrors::OwnPieceOnDestination(notation.to_owned()));
    }
    if parsed.is_capture == target.is_empty {
        return Err(ChessErrors::CaptureMismatch(notation.to_owned()));
    }
    Ok(target)
}

/// Resolves a sliding move (bishop, rook, or an undisambiguated queen) by
/// scanning `directions` outward from the destination.
pub fn resolve_slider(
    game_state: &GameState,
    notation: &str,
    parsed: &PieceNotation,
    directions: &[(i32, i32)],
) -> ChessResult<MoveDescription> {
    let color = game_state.side_to_move();
    let target = check_destination(game_state, notation, parsed, color)?;
    let outcomes = directions
        .iter()
        .map(|&direction| scan_ray(game_state, parsed, color, direction));
    let from = select_unique_origin(notation, outcomes)?;
    Ok(MoveDescription::quiet(from, parsed.to, game_state.piece_at(from), target))
}
