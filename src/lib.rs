//! Crate root module declarations for the ply_chess board engine.
//!
//! Exposes the board state, SAN parsing, legality checking and move
//! application, whole-game replay, material scoring, the feature encoder and
//! the FEN/PGN utilities under stable module paths.

pub mod chess_errors;

pub mod game_state {
    pub mod board_history;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_descriptions;
    pub mod move_record;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod notation {
    pub mod algebraic;
    pub mod san_parser;
}

pub mod move_validation {
    pub mod legal_game;
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_shared;
    pub mod legal_move_validator;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
}

pub mod evaluation {
    pub mod board_scoring;
}

pub mod encoding {
    pub mod board_snapshot;
    pub mod input_sequence;
}

pub mod utils {
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod pgn;
}
