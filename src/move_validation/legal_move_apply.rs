use crate::game_state::game_state::back_rank;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_validation::legal_moves_king::castling_rook_files;
use crate::moves::move_descriptions::MoveDescription;

/// Applies a move already accepted by the legality checker.
///
/// Order matters: the en-passant victim goes first, then the piece moves and
/// promotes, then the castling rook follows. The en-passant target is reset on
/// every move and only re-set by a double push. King and rook move flags are
/// permanent.
pub fn apply_move_description(game_state: &mut GameState, mv: &MoveDescription) {
    let color = game_state.side_to_move();

    if let Some(victim) = mv.en_passant_victim {
        game_state.take_piece(victim);
    }

    let piece = game_state.take_piece(mv.from);
    game_state.set_piece(mv.to, piece);

    if let Some(promotion) = mv.promotion {
        game_state.set_piece(mv.to, Piece::new(promotion, color));
    }

    if let Some(side) = mv.castle {
        let rank = back_rank(color);
        let (rook_from, rook_to) = castling_rook_files(side);
        game_state.take_piece(Square::from_rank_file(rank, rook_from));
        // Placed unconditionally; castling legality only looks at the flags.
        game_state.set_piece(
            Square::from_rank_file(rank, rook_to),
            Piece::new(PieceKind::Rook, color),
        );
        game_state.mark_rook_moved(color, side);
    }

    let en_passant_square = if mv.is_double_push {
        Square::try_new(
            ((mv.from.rank() + mv.to.rank()) / 2) as i32,
            mv.from.file() as i32,
        )
    } else {
        None
    };
    game_state.set_en_passant_square(en_passant_square);

    match piece.kind {
        PieceKind::King => {
            game_state.mark_king_moved(color);
            game_state.set_king_square(color, mv.to);
        }
        PieceKind::Rook => {
            let side = if mv.from.file() == 0 {
                CastleSide::Queenside
            } else {
                CastleSide::Kingside
            };
            game_state.mark_rook_moved(color, side);
        }
        _ => {}
    }

    let halfmove_clock = if piece.kind == PieceKind::Pawn || mv.is_capture() {
        0
    } else {
        game_state.halfmove_clock().saturating_add(1)
    };
    let fullmove_number = match color {
        Color::White => game_state.fullmove_number(),
        Color::Black => game_state.fullmove_number().saturating_add(1),
    };
    game_state.set_clocks(halfmove_clock, fullmove_number);

    game_state.set_side_to_move(color.opposite());
}
