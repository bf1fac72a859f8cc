//! Canonical chess-rule constants.
//!
//! Static rule literals shared by the board engine, the notation parser and
//! the feature encoder: the standard starting position, back ranks, and the
//! fixed shapes of the encoder's output.

/// Standard chess starting position in Forsyth-Edwards Notation (FEN).
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub const BOARD_SIZE: usize = 8;

/// Rank index of White's back rank (the first rank).
pub const WHITE_BACK_RANK: usize = 7;
/// Rank index of Black's back rank (the eighth rank).
pub const BLACK_BACK_RANK: usize = 0;

/// Home file of both kings.
pub const KING_HOME_FILE: usize = 4;

/// Prior grids kept by the board history.
pub const BOARD_HISTORY_DEPTH: usize = 7;

/// Plies encoded at the end of a game by the feature encoder.
pub const INPUT_SEQUENCE_PLIES: usize = 8;

/// Width of a single kind/side one-hot vector.
pub const ONE_HOT_WIDTH: usize = 12;

/// Width of one per-square feature token.
pub const INPUT_TOKEN_LENGTH: usize = 112;

/// Divisor applied to the plies-since-irreversible-move counter.
pub const REVERSIBLE_PLY_SCALE: f32 = 100.0;

/// Game termination markers that may close a PGN move list.
pub const RESULT_MARKERS: [&str; 4] = ["1-0", "0-1", "1/2-1/2", "*"];

/// The Seven Tag Roster every PGN game is expected to carry.
pub const SEVEN_TAG_ROSTER: [&str; 7] = ["Event", "Site", "Date", "Round", "White", "Black", "Result"];
