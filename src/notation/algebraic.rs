//! Character-level conversions for algebraic coordinates.
//!
//! Files `a..h` map to 0..7 and rank digits `1..8` map to rank index
//! `8 - digit`, so the eighth rank is index 0.

use crate::chess_errors::ChessErrors;
use crate::game_state::chess_types::Square;

/// File letter to file index.
#[inline]
pub fn file_from_char(ch: char) -> Option<usize> {
    match ch {
        'a'..='h' => Some(ch as usize - 'a' as usize),
        _ => None,
    }
}

/// Rank digit to rank index (`'8'` -> 0, `'1'` -> 7).
#[inline]
pub fn rank_from_char(ch: char) -> Option<usize> {
    match ch {
        '1'..='8' => Some(8 - (ch as usize - '0' as usize)),
        _ => None,
    }
}

/// Convert a two-character coordinate such as `"e4"` to a square.
pub fn algebraic_to_square(square: &str) -> Result<Square, ChessErrors> {
    let mut chars = square.chars();
    let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(ChessErrors::MalformedNotation(square.to_owned()));
    };
    square_from_chars(file, rank).ok_or_else(|| ChessErrors::MalformedNotation(square.to_owned()))
}

/// Square from a file letter and rank digit, `None` when either is invalid.
#[inline]
pub fn square_from_chars(file: char, rank: char) -> Option<Square> {
    let file = file_from_char(file)?;
    let rank = rank_from_char(rank)?;
    Square::try_new(rank as i32, file as i32)
}

#[cfg(test)]
mod tests {
    use super::{algebraic_to_square, file_from_char, rank_from_char};
    use crate::game_state::chess_types::Square;

    #[test]
    fn converts_files_and_ranks() {
        assert_eq!(file_from_char('a'), Some(0));
        assert_eq!(file_from_char('h'), Some(7));
        assert_eq!(file_from_char('i'), None);
        assert_eq!(rank_from_char('8'), Some(0));
        assert_eq!(rank_from_char('1'), Some(7));
        assert_eq!(rank_from_char('0'), None);
        assert_eq!(rank_from_char('9'), None);
    }

    #[test]
    fn parses_square_coordinates() {
        assert_eq!(algebraic_to_square("a8").unwrap(), Square::try_new(0, 0).unwrap());
        assert_eq!(algebraic_to_square("e4").unwrap(), Square::try_new(4, 4).unwrap());
        assert!(algebraic_to_square("e").is_err());
        assert!(algebraic_to_square("e44").is_err());
        assert!(algebraic_to_square("z4").is_err());
    }
}
