//! Move records as delivered by a PGN reader.

use crate::game_state::chess_rules::RESULT_MARKERS;
use crate::game_state::chess_types::Color;

/// One half-move of a game: its move number, the side playing it and the raw
/// SAN token. The token may be empty or a result marker for malformed or
/// terminated games.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub move_number: u32,
    pub color: Color,
    pub notation: String,
}

impl MoveRecord {
    pub fn new(move_number: u32, color: Color, notation: impl Into<String>) -> Self {
        Self {
            move_number,
            color,
            notation: notation.into(),
        }
    }

    #[inline]
    pub fn is_result_marker(&self) -> bool {
        is_result_marker(&self.notation)
    }
}

#[inline]
pub fn is_result_marker(notation: &str) -> bool {
    RESULT_MARKERS.contains(&notation.trim())
}

#[inline]
pub fn is_castling_notation(notation: &str) -> bool {
    matches!(strip_annotations(notation), "O-O" | "O-O-O")
}

/// Drops trailing check, mate and evaluation glyphs (`+`, `#`, `!`, `?`).
#[inline]
pub fn strip_annotations(notation: &str) -> &str {
    notation
        .trim()
        .trim_end_matches(|c: char| matches!(c, '+' | '#' | '!' | '?'))
}

/// A move is irreversible when it castles, captures, or is a pawn move. A
/// pawn move is any token without an uppercase letter, so a quiet promotion
/// such as `e8=Q` counts as reversible.
pub fn is_irreversible(notation: &str) -> bool {
    if is_castling_notation(notation) || notation.contains('x') {
        return true;
    }
    !notation.chars().any(|c| c.is_ascii_uppercase())
}

/// Builds records from a flat list of SAN tokens, White first.
pub fn records_from_tokens<'a>(tokens: impl IntoIterator<Item = &'a str>) -> Vec<MoveRecord> {
    tokens
        .into_iter()
        .enumerate()
        .map(|(ply, token)| {
            let color = if ply % 2 == 0 { Color::White } else { Color::Black };
            MoveRecord::new((ply / 2 + 1) as u32, color, token)
        })
        .collect()
}
