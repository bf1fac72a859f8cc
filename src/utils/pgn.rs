//! PGN reader.
//!
//! Splits PGN text into games, collects each game's tag pairs, and turns the
//! movetext into `MoveRecord`s for the replay and encoder pipelines. Moves are
//! not checked here; a game is only validated when it is replayed.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use log::warn;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::SEVEN_TAG_ROSTER;
use crate::game_state::chess_types::Color;
use crate::move_validation::legal_game::is_legal_game;
use crate::moves::move_record::{is_result_marker, MoveRecord};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PgnGame {
    pub tag_pairs: BTreeMap<String, String>,
    /// Half-moves in order, ending with the result marker when the movetext
    /// has one.
    pub moves: Vec<MoveRecord>,
}

impl PgnGame {
    #[inline]
    pub fn tag(&self, key: &str) -> Option<&str> {
        self.tag_pairs.get(key).map(String::as_str)
    }

    /// The `Result` tag.
    #[inline]
    pub fn result(&self) -> Option<&str> {
        self.tag("Result")
    }

    /// The `Date` tag as a calendar date; `None` when missing or when any
    /// component is unknown (`????.??.??`).
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.tag("Date")?, "%Y.%m.%d").ok()
    }

    pub fn has_seven_tag_roster(&self) -> bool {
        SEVEN_TAG_ROSTER
            .iter()
            .all(|key| self.tag_pairs.contains_key(*key))
    }

    /// Replays the moves from the opening array.
    pub fn is_legal(&self) -> bool {
        is_legal_game(&self.moves)
    }
}

pub fn read_pgn_file(path: impl AsRef<Path>) -> ChessResult<Vec<PgnGame>> {
    let text = fs::read_to_string(path)?;
    read_pgn_games(&text)
}

/// Parses every game in `pgn`. Malformed tag lines and incomplete tag rosters
/// are logged and tolerated; unterminated comments or variations are errors.
pub fn read_pgn_games(pgn: &str) -> ChessResult<Vec<PgnGame>> {
    let mut games = Vec::new();
    let mut tag_pairs = BTreeMap::<String, String>::new();
    let mut movetext = String::new();

    for line in pgn.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('%') {
            continue;
        }

        if trimmed.starts_with('[') {
            if !movetext.is_empty() {
                games.push(finish_game(
                    std::mem::take(&mut tag_pairs),
                    &std::mem::take(&mut movetext),
                )?);
            }
            match parse_tag_line(trimmed) {
                Ok((key, value)) => {
                    tag_pairs.insert(key, value);
                }
                Err(err) => warn!("skipping tag line: {err}"),
            }
        } else {
            movetext.push_str(trimmed);
            movetext.push('\n');
        }
    }

    if !tag_pairs.is_empty() || !movetext.is_empty() {
        games.push(finish_game(tag_pairs, &movetext)?);
    }

    Ok(games)
}

fn finish_game(tag_pairs: BTreeMap<String, String>, movetext: &str) -> ChessResult<PgnGame> {
    let game = PgnGame {
        tag_pairs,
        moves: movetext_records(movetext)?,
    };
    if !game.has_seven_tag_roster() {
        let missing: Vec<&str> = SEVEN_TAG_ROSTER
            .iter()
            .copied()
            .filter(|key| !game.tag_pairs.contains_key(*key))
            .collect();
        warn!("PGN game is missing tags {missing:?}");
    }
    Ok(game)
}

fn parse_tag_line(line: &str) -> ChessResult<(String, String)> {
    let malformed = || ChessErrors::InvalidPgn(format!("malformed tag pair `{line}`"));

    let inner = line
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .ok_or_else(malformed)?;
    let (key, value_raw) = inner.trim().split_once(char::is_whitespace).ok_or_else(malformed)?;
    let value = value_raw
        .trim()
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .ok_or_else(malformed)?;
    if key.is_empty() {
        return Err(malformed());
    }

    Ok((key.to_owned(), value.replace("\\\"", "\"")))
}

/// Turns movetext into records. Move numbers reset the counter and the
/// dotted form `12...` hands the next move to Black.
fn movetext_records(movetext: &str) -> ChessResult<Vec<MoveRecord>> {
    let cleaned = strip_pgn_comments_and_variations(movetext)?;
    let mut records = Vec::new();
    let mut move_number = 1u32;
    let mut color = Color::White;

    for raw in cleaned.split_whitespace() {
        if raw.starts_with('$') {
            continue;
        }

        let mut token = raw;
        if let Some((number, dots, rest)) = split_move_number(token) {
            move_number = number;
            color = if dots >= 3 { Color::Black } else { Color::White };
            if rest.is_empty() {
                continue;
            }
            token = rest;
        }

        records.push(MoveRecord::new(move_number, color, token));
        if is_result_marker(token) {
            break;
        }

        if color == Color::Black {
            move_number += 1;
        }
        color = color.opposite();
    }

    Ok(records)
}

/// `"12."` -> (12, 1, ""), `"12...Nf6"` -> (12, 3, "Nf6"). Result markers such
/// as `1-0` are not move numbers.
fn split_move_number(token: &str) -> Option<(u32, usize, &str)> {
    let digits = token.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 {
        return None;
    }
    let rest = &token[digits..];
    let dots = rest.bytes().take_while(|b| *b == b'.').count();
    if dots == 0 {
        return None;
    }
    let number = token[..digits].parse().ok()?;
    Some((number, dots, &rest[dots..]))
}

fn strip_pgn_comments_and_variations(text: &str) -> ChessResult<String> {
    let mut out = String::with_capacity(text.len());
    let mut in_brace_comment = false;
    let mut in_line_comment = false;
    let mut variation_depth = 0usize;

    for ch in text.chars() {
        if in_line_comment {
            if ch == '\n' {
                in_line_comment = false;
                out.push(' ');
            }
            continue;
        }
        if in_brace_comment {
            if ch == '}' {
                in_brace_comment = false;
                out.push(' ');
            }
            continue;
        }

        match ch {
            '{' => in_brace_comment = true,
            ';' => in_line_comment = true,
            '(' => variation_depth += 1,
            ')' => {
                variation_depth = variation_depth.checked_sub(1).ok_or_else(|| {
                    ChessErrors::InvalidPgn("unbalanced `)` in movetext".to_owned())
                })?;
                out.push(' ');
            }
            _ if variation_depth == 0 => out.push(ch),
            _ => {}
        }
    }

    if in_brace_comment {
        return Err(ChessErrors::InvalidPgn("unterminated `{` comment".to_owned()));
    }
    if variation_depth != 0 {
        return Err(ChessErrors::InvalidPgn("unterminated `(` variation".to_owned()));
    }

    Ok(out)
}
