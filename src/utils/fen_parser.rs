//! FEN-to-GameState parser.
//!
//! Accepts the full six-field form or the four-field form without clocks.
//! Castling availability is translated into the move flags the legality
//! checker reads.

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_validation::legal_move_checks::is_king_in_check;
use crate::notation::algebraic::algebraic_to_square;

pub fn parse_fen(fen: &str) -> ChessResult<GameState> {
    let fields: Vec<&str> = fen.split_whitespace().collect();
    let (board_part, side_part, castling_part, en_passant_part, clocks) = match fields.as_slice() {
        [board, side, castling, en_passant] => (*board, *side, *castling, *en_passant, None),
        [board, side, castling, en_passant, halfmove, fullmove] => {
            (*board, *side, *castling, *en_passant, Some((*halfmove, *fullmove)))
        }
        _ => return Err(invalid(format!("expected 4 or 6 fields, found {}", fields.len()))),
    };

    let mut game_state = GameState::new_empty();

    parse_board(board_part, &mut game_state)?;
    game_state.sync_king_squares()?;
    let side_to_move = parse_side_to_move(side_part)?;
    game_state.set_side_to_move(side_to_move);
    // The side that just moved can never be left in check.
    if is_king_in_check(&game_state, side_to_move.opposite()) {
        return Err(invalid(format!(
            "{:?} is in check but it is not their move",
            side_to_move.opposite()
        )));
    }
    apply_castling_field(castling_part, &mut game_state)?;
    game_state.set_en_passant_square(parse_en_passant_square(en_passant_part)?);

    if let Some((halfmove_part, fullmove_part)) = clocks {
        let halfmove_clock = halfmove_part
            .parse::<u16>()
            .map_err(|_| invalid(format!("halfmove clock `{halfmove_part}`")))?;
        let fullmove_number = fullmove_part
            .parse::<u16>()
            .map_err(|_| invalid(format!("fullmove number `{fullmove_part}`")))?;
        game_state.set_clocks(halfmove_clock, fullmove_number);
    }

    Ok(game_state)
}

fn parse_board(board_part: &str, game_state: &mut GameState) -> ChessResult<()> {
    let ranks: Vec<&str> = board_part.split('/').collect();
    if ranks.len() != 8 {
        return Err(invalid("board layout must contain 8 ranks"));
    }

    // FEN lists the eighth rank first, which is rank index 0 here.
    for (rank, rank_str) in ranks.iter().enumerate() {
        let mut file = 0usize;

        for ch in rank_str.chars() {
            if let Some(empty_count) = ch.to_digit(10) {
                if !(1..=8).contains(&empty_count) {
                    return Err(invalid(format!("empty-square count '{ch}'")));
                }
                file += empty_count as usize;
                continue;
            }

            let piece = piece_from_fen_char(ch)
                .ok_or_else(|| invalid(format!("piece character '{ch}' in board layout")))?;
            if file >= 8 {
                return Err(invalid("board rank has too many files"));
            }

            game_state.set_piece(Square::from_rank_file(rank, file), piece);
            file += 1;
        }

        if file != 8 {
            return Err(invalid("board rank does not sum to 8 files"));
        }
    }

    Ok(())
}

fn parse_side_to_move(side_part: &str) -> ChessResult<Color> {
    match side_part {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        _ => Err(invalid(format!("side-to-move field `{side_part}`"))),
    }
}

/// A side listed with neither letter gets its king flagged as moved; a side
/// missing one letter gets that rook flagged.
fn apply_castling_field(castling_part: &str, game_state: &mut GameState) -> ChessResult<()> {
    let mut available = [[false; 2]; 2];

    if castling_part != "-" {
        for ch in castling_part.chars() {
            let (color, side) = match ch {
                'K' => (Color::White, CastleSide::Kingside),
                'Q' => (Color::White, CastleSide::Queenside),
                'k' => (Color::Black, CastleSide::Kingside),
                'q' => (Color::Black, CastleSide::Queenside),
                _ => return Err(invalid(format!("castling character '{ch}'"))),
            };
            available[color.index()][side.index()] = true;
        }
    }

    for color in [Color::White, Color::Black] {
        let rights = available[color.index()];
        if !rights.contains(&true) {
            game_state.mark_king_moved(color);
            continue;
        }
        for side in [CastleSide::Queenside, CastleSide::Kingside] {
            if !rights[side.index()] {
                game_state.mark_rook_moved(color, side);
            }
        }
    }

    Ok(())
}

fn parse_en_passant_square(en_passant_part: &str) -> ChessResult<Option<Square>> {
    if en_passant_part == "-" {
        return Ok(None);
    }

    algebraic_to_square(en_passant_part)
        .map(Some)
        .map_err(|_| invalid(format!("en-passant square `{en_passant_part}`")))
}

fn piece_from_fen_char(ch: char) -> Option<Piece> {
    let color = if ch.is_ascii_uppercase() {
        Color::White
    } else if ch.is_ascii_lowercase() {
        Color::Black
    } else {
        return None;
    };

    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'r' => PieceKind::Rook,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };

    Some(Piece::new(kind, color))
}

fn invalid(message: impl Into<String>) -> ChessErrors {
    ChessErrors::InvalidFen(message.into())
}

#[cfg(test)]
mod tests {
    use super::parse_fen;
    use crate::chess_errors::ChessErrors;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::{CastleSide, Color, PieceKind, Square};

    #[test]
    fn parse_starting_fen() {
        let game_state = parse_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        assert_eq!(game_state.side_to_move(), Color::White);
        assert_eq!(game_state.fullmove_number(), 1);
        assert_eq!(game_state.halfmove_clock(), 0);
        assert!(!game_state.king_moved(Color::Black));
        assert!(game_state
            .piece_at(Square::from_rank_file(0, 3))
            .is(Color::Black, PieceKind::Queen));
    }

    #[test]
    fn four_field_fen_defaults_clocks() {
        let game_state = parse_fen("4k3/8/8/8/8/8/8/4K3 b - -").expect("short FEN should parse");
        assert_eq!(game_state.side_to_move(), Color::Black);
        assert_eq!(game_state.fullmove_number(), 1);
        assert!(game_state.king_moved(Color::White));
        assert!(game_state.king_moved(Color::Black));
    }

    #[test]
    fn partial_castling_rights_flag_rooks() {
        let game_state = parse_fen("r3k2r/8/8/8/8/8/8/R3K2R w Kq - 0 1").unwrap();
        assert!(!game_state.king_moved(Color::White));
        assert!(game_state.rook_moved(Color::White, CastleSide::Queenside));
        assert!(!game_state.rook_moved(Color::White, CastleSide::Kingside));
        assert!(game_state.rook_moved(Color::Black, CastleSide::Kingside));
        assert!(!game_state.rook_moved(Color::Black, CastleSide::Queenside));
    }

    #[test]
    fn king_cache_follows_the_board() {
        let game_state = parse_fen("8/8/8/3k4/8/8/8/6K1 w - - 0 1").unwrap();
        assert_eq!(game_state.king_square(Color::White), Square::from_rank_file(7, 6));
        assert_eq!(game_state.king_square(Color::Black), Square::from_rank_file(3, 3));
    }

    #[test]
    fn rejects_check_against_the_side_not_to_move() {
        let err = parse_fen("4k3/8/8/8/8/8/8/4QK2 w - - 0 1");
        assert!(matches!(err, Err(ChessErrors::InvalidFen(_))));

        // Same position with Black to move is an ordinary check.
        let game_state = parse_fen("4k3/8/8/8/8/8/8/4QK2 b - - 0 1").unwrap();
        assert!(game_state.is_in_check());
    }

    #[test]
    fn rejects_malformed_fen() {
        for fen in [
            "",
            "8/8/8/8/8/8/8/8 w - - 0 1",
            "4k3/8/8/8/8/8/8/4K3 x - - 0 1",
            "4k3/8/8/8/8/8/8/4K3 w X - 0 1",
            "4k3/8/8/8/8/8/8/4K3 w - e9 0 1",
            "4k3/8/8/8/8/8/8/4K3 w - - zero 1",
            "4k3/8/8/8/8/8/4K3 w - - 0 1",
            "4k4/8/8/8/8/8/8/4K3 w - - 0 1",
            "4k3/8/8/8/8/8/8/4K2K w - - 0 1",
            "4k3/8/8/8/8/8/8/4K3 w - - 0",
        ] {
            assert!(matches!(parse_fen(fen), Err(ChessErrors::InvalidFen(_))), "{fen}");
        }
    }
}
