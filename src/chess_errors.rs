//! Errors used throughout the board engine.
//!
//! `ChessErrors` is the single error type across the crate. Notation parsing,
//! legality checking, game replay, FEN and PGN handling all return
//! `Result<_, ChessErrors>` so callers can propagate with `?` and match on the
//! failure kind.
//!
//! The boolean engine surface (`GameState::apply_move`, `is_legal_game`)
//! collapses every variant into `false`; nothing here is fatal.

use crate::game_state::chess_types::{Color, Square};

#[derive(Debug, thiserror::Error)]
pub enum ChessErrors {
    /// The move token was empty (or only annotation glyphs).
    #[error("empty move notation")]
    EmptyNotation,

    /// The token does not follow standard algebraic notation.
    #[error("malformed move notation `{0}`")]
    MalformedNotation(String),

    /// A game termination marker (`1-0`, `*`, ...) was offered as a move.
    #[error("`{0}` is a game termination marker, not a move")]
    ResultMarker(String),

    /// No piece of the notated kind can reach the destination.
    #[error("no piece can play `{notation}`")]
    NoCandidate { notation: String },

    /// More than one origin survives disambiguation and the check probe.
    #[error("`{notation}` is ambiguous between {origins:?}")]
    AmbiguousMove {
        notation: String,
        origins: Vec<Square>,
    },

    /// Every candidate origin would leave the mover's king attacked.
    #[error("`{0}` leaves the king in check")]
    KingLeftInCheck(String),

    /// Castling rights, path or check conditions fail.
    #[error("castling `{0}` is not permitted")]
    CastlingNotPermitted(String),

    /// The destination already holds a piece of the side to move.
    #[error("`{0}` lands on a friendly piece")]
    OwnPieceOnDestination(String),

    /// Capture marker present without a victim, or a victim without a marker.
    #[error("capture marker of `{0}` does not match the board")]
    CaptureMismatch(String),

    /// A move record claims the wrong side.
    #[error("ply {ply}: record is for {found:?} but {expected:?} is to move")]
    OutOfTurn {
        ply: usize,
        expected: Color,
        found: Color,
    },

    /// Replay stopped at an illegal move.
    #[error("illegal move `{notation}` at ply {ply}: {source}")]
    IllegalGameMove {
        ply: usize,
        notation: String,
        #[source]
        source: Box<ChessErrors>,
    },

    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    #[error("invalid PGN: {0}")]
    InvalidPgn(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type ChessResult<T> = Result<T, ChessErrors>;
