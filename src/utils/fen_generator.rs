use crate::game_state::{chess_types::*, game_state::GameState};

pub fn generate_fen(game_state: &GameState) -> String {
    let board = generate_board_field(game_state.board());
    let side_to_move = match game_state.side_to_move() {
        Color::White => "w",
        Color::Black => "b",
    };
    let castling = generate_castling_field(game_state);
    let en_passant = game_state
        .en_passant_square()
        .map_or_else(|| "-".to_owned(), |square| square.to_string());

    format!(
        "{} {} {} {} {} {}",
        board,
        side_to_move,
        castling,
        en_passant,
        game_state.halfmove_clock(),
        game_state.fullmove_number()
    )
}

fn generate_board_field(grid: &BoardGrid) -> String {
    let mut out = String::new();

    for (rank, row) in grid.iter().enumerate() {
        let mut empty_count = 0u8;

        for piece in row {
            match piece_to_fen_char(*piece) {
                Some(ch) => {
                    if empty_count > 0 {
                        out.push(char::from(b'0' + empty_count));
                        empty_count = 0;
                    }
                    out.push(ch);
                }
                None => empty_count += 1,
            }
        }

        if empty_count > 0 {
            out.push(char::from(b'0' + empty_count));
        }

        if rank < 7 {
            out.push('/');
        }
    }

    out
}

fn piece_to_fen_char(piece: Piece) -> Option<char> {
    let base = match piece.kind {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
        PieceKind::None => return None,
    };

    match piece.color {
        Color::White => Some(base.to_ascii_uppercase()),
        Color::Black => Some(base),
    }
}

/// Castling letters derived from the move flags.
fn generate_castling_field(game_state: &GameState) -> String {
    let mut out = String::new();

    for (color, letters) in [(Color::White, ['K', 'Q']), (Color::Black, ['k', 'q'])] {
        if game_state.king_moved(color) {
            continue;
        }
        if !game_state.rook_moved(color, CastleSide::Kingside) {
            out.push(letters[0]);
        }
        if !game_state.rook_moved(color, CastleSide::Queenside) {
            out.push(letters[1]);
        }
    }

    if out.is_empty() {
        out.push('-');
    }

    out
}
