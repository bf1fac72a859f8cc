//! Entry point of the legality checker: parse the token, then hand it to the
//! checker for the moving piece.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::{chess_types::PieceKind, game_state::GameState};
use crate::move_validation::legal_moves_bishop::resolve_bishop_move;
use crate::move_validation::legal_moves_king::{resolve_castling, resolve_king_move};
use crate::move_validation::legal_moves_knight::resolve_knight_move;
use crate::move_validation::legal_moves_pawn::resolve_pawn_move;
use crate::move_validation::legal_moves_queen::resolve_queen_move;
use crate::move_validation::legal_moves_rook::resolve_rook_move;
use crate::moves::move_descriptions::MoveDescription;
use crate::notation::san_parser::{parse_san, ParsedNotation};

/// Resolves `notation` for the side to move into a fully described legal
/// move. The state is only read.
pub fn resolve_move(game_state: &GameState, notation: &str) -> ChessResult<MoveDescription> {
    match parse_san(notation)? {
        ParsedNotation::Castle(side) => resolve_castling(game_state, notation, side),
        ParsedNotation::Move(parsed) => match parsed.kind {
            PieceKind::Pawn => resolve_pawn_move(game_state, notation, &parsed),
            PieceKind::Knight => resolve_knight_move(game_state, notation, &parsed),
            PieceKind::Bishop => resolve_bishop_move(game_state, notation, &parsed),
            PieceKind::Rook => resolve_rook_move(game_state, notation, &parsed),
            PieceKind::Queen => resolve_queen_move(game_state, notation, &parsed),
            PieceKind::King => resolve_king_move(game_state, notation, &parsed),
            PieceKind::None => Err(ChessErrors::MalformedNotation(notation.to_owned())),
        },
    }
}
