//! Feature encoder.
//!
//! Replays a game and turns each of its final plies into an 8x8 grid of
//! per-square tokens. A token is laid out as:
//!
//! | slots       | contents                                                        |
//! |-------------|-----------------------------------------------------------------|
//! | `0..96`     | 8 one-hot blocks of 12; block k is the board k plies ago        |
//! | `96`        | square is the en-passant target                                 |
//! | `97..101`   | castling available: White O-O, White O-O-O, Black O-O, Black O-O-O |
//! | `101`       | plies since the last irreversible move, scaled                  |
//! | `102..110`  | square unchanged versus each prior board in the history         |
//! | `110..112`  | zero                                                            |
//!
//! Missing history blocks and flags stay zero.

use crate::chess_errors::ChessResult;
use crate::encoding::board_snapshot::piece_one_hot;
use crate::game_state::chess_rules::{
    BOARD_SIZE, INPUT_SEQUENCE_PLIES, INPUT_TOKEN_LENGTH, ONE_HOT_WIDTH, REVERSIBLE_PLY_SCALE,
};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_validation::legal_game::play_record;
use crate::move_validation::legal_moves_king::castling_is_legal;
use crate::moves::move_record::{is_irreversible, MoveRecord};

const ONE_HOT_BLOCKS: usize = 8;
const EN_PASSANT_SLOT: usize = ONE_HOT_BLOCKS * ONE_HOT_WIDTH;
const CASTLING_SLOTS: usize = EN_PASSANT_SLOT + 1;
const REVERSIBLE_PLY_SLOT: usize = CASTLING_SLOTS + CASTLING_PROBES.len();
const REPETITION_SLOTS: usize = REVERSIBLE_PLY_SLOT + 1;
const REPETITION_FLAGS: usize = 8;

const CASTLING_PROBES: [(Color, CastleSide); 4] = [
    (Color::White, CastleSide::Kingside),
    (Color::White, CastleSide::Queenside),
    (Color::Black, CastleSide::Kingside),
    (Color::Black, CastleSide::Queenside),
];

pub type InputToken = [f32; INPUT_TOKEN_LENGTH];
pub type TokenGrid = [[InputToken; BOARD_SIZE]; BOARD_SIZE];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputSequenceOptions {
    /// Number of final plies to encode.
    pub window_plies: usize,
    /// Divisor for the plies-since-irreversible counter.
    pub reversible_ply_scale: f32,
}

impl Default for InputSequenceOptions {
    fn default() -> Self {
        Self {
            window_plies: INPUT_SEQUENCE_PLIES,
            reversible_ply_scale: REVERSIBLE_PLY_SCALE,
        }
    }
}

/// Token grids for the encoded plies, oldest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputSequence {
    pub board_tokens: Vec<TokenGrid>,
}

impl InputSequence {
    #[inline]
    pub fn len(&self) -> usize {
        self.board_tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.board_tokens.is_empty()
    }
}

pub fn input_sequence(moves: &[MoveRecord]) -> ChessResult<InputSequence> {
    input_sequence_with_options(moves, &InputSequenceOptions::default())
}

/// Replays `moves` up to the result marker and encodes the position after
/// each of the last `window_plies` moves. Fails on the first illegal record.
pub fn input_sequence_with_options(
    moves: &[MoveRecord],
    options: &InputSequenceOptions,
) -> ChessResult<InputSequence> {
    let playable = moves
        .iter()
        .position(MoveRecord::is_result_marker)
        .map_or(moves, |end| &moves[..end]);
    let window_start = playable.len().saturating_sub(options.window_plies);

    let mut game_state = GameState::new_game();
    let mut history = BoardHistory::new();
    let mut last_irreversible = 0usize;
    let mut sequence = InputSequence {
        board_tokens: Vec::with_capacity(playable.len() - window_start),
    };

    for (ply, record) in playable.iter().enumerate() {
        play_record(&mut game_state, ply, record)?;
        if is_irreversible(&record.notation) {
            last_irreversible = ply;
        }
        if ply >= window_start {
            sequence.board_tokens.push(encode_position(
                &game_state,
                &history,
                ply - last_irreversible,
                options,
            ));
        }
        history.push(*game_state.board());
    }

    Ok(sequence)
}

/// Encodes one position against the boards that preceded it.
pub fn encode_position(
    game_state: &GameState,
    history: &BoardHistory,
    plies_since_irreversible: usize,
    options: &InputSequenceOptions,
) -> TokenGrid {
    let castling = CASTLING_PROBES.map(|(color, side)| flag(castling_is_legal(game_state, color, side)));
    let counter = plies_since_irreversible as f32 / options.reversible_ply_scale;

    let mut grid = [[[0.0f32; INPUT_TOKEN_LENGTH]; BOARD_SIZE]; BOARD_SIZE];
    for square in Square::all() {
        let (rank, file) = (square.rank(), square.file());
        let token = &mut grid[rank][file];
        let current = game_state.piece_at(square);

        write_one_hot(token, 0, current);
        for (plies_ago, past) in history.iter().take(ONE_HOT_BLOCKS - 1).enumerate() {
            write_one_hot(token, plies_ago + 1, past[rank][file]);
        }

        token[EN_PASSANT_SLOT] = flag(game_state.is_en_passant_target(square));
        token[CASTLING_SLOTS..REVERSIBLE_PLY_SLOT].copy_from_slice(&castling);
        token[REVERSIBLE_PLY_SLOT] = counter;

        for (plies_ago, past) in history.iter().take(REPETITION_FLAGS).enumerate() {
            token[REPETITION_SLOTS + plies_ago] = flag(past[rank][file] == current);
        }
    }
    grid
}

fn write_one_hot(token: &mut InputToken, block: usize, piece: Piece) {
    let start = block * ONE_HOT_WIDTH;
    for (slot, bit) in token[start..start + ONE_HOT_WIDTH]
        .iter_mut()
        .zip(piece_one_hot(piece))
    {
        *slot = f32::from(bit);
    }
}

#[inline]
fn flag(value: bool) -> f32 {
    if value {
        1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chess_errors::ChessErrors;
    use crate::moves::move_record::records_from_tokens;
    use crate::notation::algebraic::algebraic_to_square;

    fn token(sequence: &InputSequence, index: usize, name: &str) -> InputToken {
        let square = algebraic_to_square(name).unwrap();
        sequence.board_tokens[index][square.rank()][square.file()]
    }

    #[test]
    fn short_game_yields_one_grid_per_ply() {
        let moves = records_from_tokens(["e4", "e5", "Nf3"]);
        let sequence = input_sequence(&moves).unwrap();
        assert_eq!(sequence.len(), 3);
    }

    #[test]
    fn long_game_keeps_only_the_window() {
        let moves = records_from_tokens([
            "e4", "e5", "Nf3", "Nc6", "Bb5", "a6", "Ba4", "Nf6", "O-O", "Be7", "Re1", "b5",
        ]);
        assert_eq!(input_sequence(&moves).unwrap().len(), INPUT_SEQUENCE_PLIES);

        let options = InputSequenceOptions {
            window_plies: 3,
            ..InputSequenceOptions::default()
        };
        assert_eq!(input_sequence_with_options(&moves, &options).unwrap().len(), 3);
    }

    #[test]
    fn result_marker_ends_the_game() {
        let moves = records_from_tokens(["e4", "e5", "1/2-1/2"]);
        assert_eq!(input_sequence(&moves).unwrap().len(), 2);
        assert!(input_sequence(&[]).unwrap().is_empty());
    }

    #[test]
    fn illegal_game_is_an_error() {
        let moves = records_from_tokens(["e4", "e4"]);
        assert!(matches!(
            input_sequence(&moves),
            Err(ChessErrors::IllegalGameMove { ply: 1, .. })
        ));
    }

    #[test]
    fn one_hot_blocks_follow_the_history() {
        let moves = records_from_tokens(["e4", "e5"]);
        let sequence = input_sequence(&moves).unwrap();

        // After 1...e5 the e4 pawn is in block 0 (now) and block 1 (one ply ago).
        let e4 = token(&sequence, 1, "e4");
        assert_eq!(e4[0], 1.0);
        assert_eq!(e4[ONE_HOT_WIDTH], 1.0);

        // e5 is occupied only now; e2 was occupied two plies ago but the
        // history only reaches back to the position after 1.e4.
        let e5 = token(&sequence, 1, "e5");
        assert_eq!(e5[6], 1.0);
        assert!(e5[ONE_HOT_WIDTH..2 * ONE_HOT_WIDTH].iter().all(|v| *v == 0.0));
        let e2 = token(&sequence, 1, "e2");
        assert!(e2[..2 * ONE_HOT_WIDTH].iter().all(|v| *v == 0.0));
    }

    #[test]
    fn en_passant_flag_marks_only_the_target() {
        let moves = records_from_tokens(["e4"]);
        let sequence = input_sequence(&moves).unwrap();
        assert_eq!(token(&sequence, 0, "e3")[EN_PASSANT_SLOT], 1.0);
        assert_eq!(token(&sequence, 0, "e4")[EN_PASSANT_SLOT], 0.0);
    }

    #[test]
    fn castling_probes_ignore_the_side_to_move() {
        let moves = records_from_tokens(["e4", "e5", "Nf3", "Nf6", "Bc4", "Bc5"]);
        let sequence = input_sequence(&moves).unwrap();
        let last = token(&sequence, 5, "a1");
        assert_eq!(&last[CASTLING_SLOTS..REVERSIBLE_PLY_SLOT], &[1.0, 0.0, 1.0, 0.0]);
        // Identical on every square.
        assert_eq!(
            &token(&sequence, 5, "h8")[CASTLING_SLOTS..REVERSIBLE_PLY_SLOT],
            &[1.0, 0.0, 1.0, 0.0]
        );
    }

    #[test]
    fn reversible_counter_counts_from_last_irreversible_move() {
        let moves = records_from_tokens(["e4", "e5", "Nf3", "Nc6", "Bb5"]);
        let sequence = input_sequence(&moves).unwrap();
        let counters: Vec<f32> = (0..sequence.len())
            .map(|index| token(&sequence, index, "a1")[REVERSIBLE_PLY_SLOT])
            .collect();
        assert_eq!(counters, vec![0.0, 0.0, 0.01, 0.02, 0.03]);
    }

    #[test]
    fn repetition_flags_compare_against_each_prior_board() {
        let moves = records_from_tokens(["Nf3", "Nf6"]);
        let sequence = input_sequence(&moves).unwrap();

        let a1 = token(&sequence, 1, "a1");
        assert_eq!(a1[REPETITION_SLOTS], 1.0);
        assert!(a1[REPETITION_SLOTS + 1..INPUT_TOKEN_LENGTH].iter().all(|v| *v == 0.0));

        // f6 changed on the last ply.
        assert_eq!(token(&sequence, 1, "f6")[REPETITION_SLOTS], 0.0);
        // g1 emptied one ply earlier and has stayed empty since.
        assert_eq!(token(&sequence, 1, "g1")[REPETITION_SLOTS], 1.0);
    }

    #[test]
    fn padding_slots_stay_zero() {
        let moves = records_from_tokens(["d4", "d5", "c4", "e6", "Nc3", "Nf6", "Bg5", "Be7", "e3", "O-O"]);
        let sequence = input_sequence(&moves).unwrap();
        for grid in &sequence.board_tokens {
            for square in Square::all() {
                let token = &grid[square.rank()][square.file()];
                assert!(token[REPETITION_SLOTS + REPETITION_FLAGS - 1..].iter().all(|v| *v == 0.0));
            }
        }
    }
}
