//! Standard algebraic notation (SAN) parser.
//!
//! Turns a token such as `"Nbd2"`, `"exd6"` or `"O-O-O"` into the piece kind,
//! destination square and whatever origin hints the token carries. Parsing is
//! purely lexical: it never looks at a board. Choosing the actual origin is
//! the legality checker's job.
//!
//! Piece moves are dispatched on what sits between the piece letter and the
//! destination, which is what the token length encodes:
//!
//! | length | without `x`              | with `x`                 |
//! |--------|--------------------------|--------------------------|
//! | 3      | `Nf3`                    | -                        |
//! | 4      | `Nbd2`, `R1e2`           | `Nxe5`                   |
//! | 5      | `Qa1e1`                  | `Nbxd2`, `R1xe2`         |
//! | 6      | -                        | `Qa1xe1`                 |

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::{BLACK_BACK_RANK, WHITE_BACK_RANK};
use crate::game_state::chess_types::{CastleSide, PieceKind, Square};
use crate::moves::move_record::{is_result_marker, strip_annotations};
use crate::notation::algebraic::{file_from_char, rank_from_char, square_from_chars};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedNotation {
    Castle(CastleSide),
    Move(PieceNotation),
}

/// A non-castling move as far as the token alone can describe it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceNotation {
    pub kind: PieceKind,
    pub to: Square,
    /// Origin file from a disambiguator, or the capturing pawn's file.
    pub from_file: Option<usize>,
    /// Origin rank from a disambiguator.
    pub from_rank: Option<usize>,
    pub is_capture: bool,
    /// Set for every pawn move onto a back rank; defaults to a queen when the
    /// token names no piece.
    pub promotion: Option<PieceKind>,
}

impl PieceNotation {
    /// Whether `square` satisfies the file/rank hints of the token.
    #[inline]
    pub fn matches_origin(&self, square: Square) -> bool {
        self.from_file.map_or(true, |file| square.file() == file)
            && self.from_rank.map_or(true, |rank| square.rank() == rank)
    }

    #[inline]
    pub fn is_disambiguated(&self) -> bool {
        self.from_file.is_some() || self.from_rank.is_some()
    }
}

pub fn parse_san(notation: &str) -> ChessResult<ParsedNotation> {
    let trimmed = notation.trim();
    if trimmed.is_empty() {
        return Err(ChessErrors::EmptyNotation);
    }
    if is_result_marker(trimmed) {
        return Err(ChessErrors::ResultMarker(trimmed.to_owned()));
    }

    let token = strip_annotations(trimmed);
    if token.is_empty() {
        return Err(ChessErrors::EmptyNotation);
    }
    if !token.is_ascii() {
        return Err(malformed(notation));
    }

    let bytes = token.as_bytes();
    let lead = bytes[0] as char;
    if lead.is_ascii_uppercase() {
        match lead {
            'O' => parse_castling(notation, token),
            _ => {
                let kind = PieceKind::from_san_letter(lead).ok_or_else(|| malformed(notation))?;
                parse_piece_move(notation, kind, &bytes[1..])
            }
        }
    } else {
        parse_pawn_move(notation, bytes)
    }
}

fn parse_castling(notation: &str, token: &str) -> ChessResult<ParsedNotation> {
    match token {
        "O-O" => Ok(ParsedNotation::Castle(CastleSide::Kingside)),
        "O-O-O" => Ok(ParsedNotation::Castle(CastleSide::Queenside)),
        _ => Err(malformed(notation)),
    }
}

/// `body` is the token after the piece letter.
fn parse_piece_move(notation: &str, kind: PieceKind, body: &[u8]) -> ChessResult<ParsedNotation> {
    let is_capture = body.contains(&b'x');
    let (hints, destination) = split_destination(notation, body, is_capture)?;
    let to = destination_square(notation, destination)?;

    let (from_file, from_rank) = match hints {
        [] => (None, None),
        [hint] => {
            let hint = *hint as char;
            match (file_from_char(hint), rank_from_char(hint)) {
                (Some(file), _) => (Some(file), None),
                (None, Some(rank)) => (None, Some(rank)),
                (None, None) => return Err(malformed(notation)),
            }
        }
        [file, rank] => {
            let file = file_from_char(*file as char).ok_or_else(|| malformed(notation))?;
            let rank = rank_from_char(*rank as char).ok_or_else(|| malformed(notation))?;
            (Some(file), Some(rank))
        }
        _ => return Err(malformed(notation)),
    };

    // There is only ever one king to move.
    if kind == PieceKind::King && (from_file.is_some() || from_rank.is_some()) {
        return Err(malformed(notation));
    }

    Ok(ParsedNotation::Move(PieceNotation {
        kind,
        to,
        from_file,
        from_rank,
        is_capture,
        promotion: None,
    }))
}

/// Pawn tokens: `e4`, `exd5`, with an optional promotion suffix `e8Q`,
/// `e8=Q`, `exd8N`.
fn parse_pawn_move(notation: &str, bytes: &[u8]) -> ChessResult<ParsedNotation> {
    let (body, named_promotion) = match bytes.split_last() {
        Some((last, rest)) if last.is_ascii_uppercase() => {
            let kind = match PieceKind::from_san_letter(*last as char) {
                Some(kind @ (PieceKind::Knight | PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen)) => kind,
                _ => return Err(malformed(notation)),
            };
            (rest.strip_suffix(b"=").unwrap_or(rest), Some(kind))
        }
        _ => (bytes, None),
    };

    let (from_file, to, is_capture) = match body {
        [file, rank] => (None, destination_square(notation, &[*file, *rank])?, false),
        [from, b'x', file, rank] => {
            let from_file = file_from_char(*from as char).ok_or_else(|| malformed(notation))?;
            (Some(from_file), destination_square(notation, &[*file, *rank])?, true)
        }
        _ => return Err(malformed(notation)),
    };

    let on_back_rank = to.rank() == BLACK_BACK_RANK || to.rank() == WHITE_BACK_RANK;
    if named_promotion.is_some() && !on_back_rank {
        return Err(malformed(notation));
    }
    let promotion = on_back_rank.then(|| named_promotion.unwrap_or(PieceKind::Queen));

    Ok(ParsedNotation::Move(PieceNotation {
        kind: PieceKind::Pawn,
        to,
        from_file,
        from_rank: None,
        is_capture,
        promotion,
    }))
}

/// Splits a piece-move body into (disambiguation hints, destination). A
/// capture marker must appear once, directly before the destination.
fn split_destination<'a>(
    notation: &str,
    body: &'a [u8],
    is_capture: bool,
) -> ChessResult<(&'a [u8], &'a [u8])> {
    let marker_len = usize::from(is_capture);
    if body.len() < 2 + marker_len {
        return Err(malformed(notation));
    }

    let (head, destination) = body.split_at(body.len() - 2);
    let hints = if is_capture {
        match head.split_last() {
            Some((b'x', hints)) if !hints.contains(&b'x') => hints,
            _ => return Err(malformed(notation)),
        }
    } else {
        head
    };

    Ok((hints, destination))
}

fn destination_square(notation: &str, destination: &[u8]) -> ChessResult<Square> {
    match destination {
        [file, rank] => square_from_chars(*file as char, *rank as char).ok_or_else(|| malformed(notation)),
        _ => Err(malformed(notation)),
    }
}

#[inline]
fn malformed(notation: &str) -> ChessErrors {
    ChessErrors::MalformedNotation(notation.to_owned())
}
