//! Board engine state.
//!
//! `GameState` owns the 8x8 grid together with the bookkeeping the legality
//! checker needs: side to move, the king-square cache, king and rook move
//! flags, and the en-passant target. The grid is private; the only way to
//! change it from outside the crate is the validated `apply_move` path.

use log::{debug, trace};

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::encoding::board_snapshot::{board_snapshot, BoardSnapshot};
use crate::evaluation::board_scoring::{BoardScorer, MaterialScorer};
use crate::game_state::chess_rules::{BLACK_BACK_RANK, KING_HOME_FILE, WHITE_BACK_RANK};
use crate::game_state::chess_types::*;
use crate::move_validation::legal_move_apply::apply_move_description;
use crate::move_validation::legal_move_checks::is_king_in_check;
use crate::move_validation::legal_move_validator::resolve_move;
use crate::moves::move_descriptions::MoveDescription;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: BoardGrid,
    side_to_move: Color,
    // Must always match the King piece on the board; indexed by color.
    king_squares: [Square; 2],
    king_moved: [bool; 2],
    // [color][CastleSide::index()]; move flags, never cleared.
    rook_moved: [[bool; 2]; 2],
    en_passant_square: Option<Square>,
    halfmove_clock: u16,
    fullmove_number: u16,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    /// Standard opening array, White to move.
    pub fn new_game() -> Self {
        let mut state = Self::new_empty();

        for (file, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
            state.board[BLACK_BACK_RANK][file] = Piece::new(*kind, Color::Black);
            state.board[BLACK_BACK_RANK + 1][file] = Piece::new(PieceKind::Pawn, Color::Black);
            state.board[WHITE_BACK_RANK - 1][file] = Piece::new(PieceKind::Pawn, Color::White);
            state.board[WHITE_BACK_RANK][file] = Piece::new(*kind, Color::White);
        }

        state.king_squares = [
            home_king_square(Color::White),
            home_king_square(Color::Black),
        ];
        state
    }

    /// Empty grid with the king caches pointing at the home squares. Only the
    /// FEN parser builds from this, and it fixes the caches up afterwards.
    pub(crate) fn new_empty() -> Self {
        Self {
            board: [[Piece::EMPTY; 8]; 8],
            side_to_move: Color::White,
            king_squares: [
                home_king_square(Color::White),
                home_king_square(Color::Black),
            ],
            king_moved: [false; 2],
            rook_moved: [[false; 2]; 2],
            en_passant_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    // --- Read-only accessors ---

    #[inline]
    pub fn board(&self) -> &BoardGrid {
        &self.board
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Piece {
        self.board[square.rank()][square.file()]
    }

    /// Bounds-checked lookup by raw coordinates; `None` means off the board.
    #[inline]
    pub fn piece_at_coords(&self, rank: i32, file: i32) -> Option<Piece> {
        Square::try_new(rank, file).map(|square| self.piece_at(square))
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    #[inline]
    pub fn king_moved(&self, color: Color) -> bool {
        self.king_moved[color.index()]
    }

    #[inline]
    pub fn rook_moved(&self, color: Color, side: CastleSide) -> bool {
        self.rook_moved[color.index()][side.index()]
    }

    #[inline]
    pub fn en_passant_square(&self) -> Option<Square> {
        self.en_passant_square
    }

    #[inline]
    pub fn is_en_passant_target(&self, square: Square) -> bool {
        self.en_passant_square == Some(square)
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u16 {
        self.halfmove_clock
    }

    #[inline]
    pub fn fullmove_number(&self) -> u16 {
        self.fullmove_number
    }

    /// Whether the side to move is currently attacked on its king square.
    #[inline]
    pub fn is_in_check(&self) -> bool {
        is_king_in_check(self, self.side_to_move)
    }

    // --- Engine surface ---

    /// Plays `notation` for the side to move. Returns whether the move was
    /// legal and applied; illegal moves leave the state untouched.
    pub fn apply_move(&mut self, notation: &str) -> bool {
        self.try_apply_move(notation).is_ok()
    }

    /// Like `apply_move`, but reports why a move was rejected and returns the
    /// resolved move on success.
    pub fn try_apply_move(&mut self, notation: &str) -> ChessResult<MoveDescription> {
        match resolve_move(self, notation) {
            Ok(mv) => {
                apply_move_description(self, &mv);
                trace!("applied `{notation}`: {} -> {}", mv.from, mv.to);
                Ok(mv)
            }
            Err(err) => {
                debug!("rejected `{notation}` for {:?}: {err}", self.side_to_move);
                Err(err)
            }
        }
    }

    /// Checks `notation` against the current position without applying it.
    pub fn is_legal_move(&self, notation: &str) -> bool {
        resolve_move(self, notation).is_ok()
    }

    /// Material sum, White positive and Black negative.
    #[inline]
    pub fn material_score(&self) -> i32 {
        MaterialScorer.score(self)
    }

    /// One-hot (kind, side) export of the current grid.
    #[inline]
    pub fn board_snapshot(&self) -> BoardSnapshot {
        board_snapshot(&self.board)
    }

    // --- Crate-internal mutation, used by the mutator and FEN parser ---

    #[inline]
    pub(crate) fn set_piece(&mut self, square: Square, piece: Piece) {
        self.board[square.rank()][square.file()] = piece;
    }

    #[inline]
    pub(crate) fn take_piece(&mut self, square: Square) -> Piece {
        std::mem::replace(&mut self.board[square.rank()][square.file()], Piece::EMPTY)
    }

    #[inline]
    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    #[inline]
    pub(crate) fn set_king_square(&mut self, color: Color, square: Square) {
        self.king_squares[color.index()] = square;
    }

    #[inline]
    pub(crate) fn mark_king_moved(&mut self, color: Color) {
        self.king_moved[color.index()] = true;
    }

    #[inline]
    pub(crate) fn mark_rook_moved(&mut self, color: Color, side: CastleSide) {
        self.rook_moved[color.index()][side.index()] = true;
    }

    #[inline]
    pub(crate) fn set_en_passant_square(&mut self, square: Option<Square>) {
        self.en_passant_square = square;
    }

    #[inline]
    pub(crate) fn set_clocks(&mut self, halfmove_clock: u16, fullmove_number: u16) {
        self.halfmove_clock = halfmove_clock;
        self.fullmove_number = fullmove_number;
    }

    /// Re-derives the king caches from the grid. Fails unless each side has
    /// exactly one king.
    pub(crate) fn sync_king_squares(&mut self) -> ChessResult<()> {
        for color in [Color::White, Color::Black] {
            let mut kings = Square::all().filter(|sq| self.piece_at(*sq).is(color, PieceKind::King));
            let (Some(king), None) = (kings.next(), kings.next()) else {
                return Err(ChessErrors::InvalidFen(format!(
                    "{color:?} must have exactly one king"
                )));
            };
            self.king_squares[color.index()] = king;
        }
        Ok(())
    }
}

/// Square a king of `color` starts on.
#[inline]
pub const fn home_king_square(color: Color) -> Square {
    Square::from_rank_file(back_rank(color), KING_HOME_FILE)
}

/// Rank index of `color`'s back rank.
#[inline]
pub const fn back_rank(color: Color) -> usize {
    match color {
        Color::White => WHITE_BACK_RANK,
        Color::Black => BLACK_BACK_RANK,
    }
}
