/// Core value types shared by the board engine: colors, piece kinds, pieces,
/// validated squares and the raw 8x8 grid.
///
/// Squares are addressed as (rank, file) with rank 0 being the eighth rank
/// (Black's back rank) and file 0 being the a-file.

pub use crate::game_state::board_history::BoardHistory;
pub use crate::game_state::game_state::GameState;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

/// Piece kind. `None` marks an empty square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Bishop,
    Knight,
    Rook,
    Queen,
    King,
    None,
}

impl PieceKind {
    /// Index used by the one-hot encoders. `None` has no slot.
    #[inline]
    pub const fn index(self) -> Option<usize> {
        match self {
            PieceKind::Pawn => Some(0),
            PieceKind::Bishop => Some(1),
            PieceKind::Knight => Some(2),
            PieceKind::Rook => Some(3),
            PieceKind::Queen => Some(4),
            PieceKind::King => Some(5),
            PieceKind::None => None,
        }
    }

    /// Material points.
    #[inline]
    pub const fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => 1,
            PieceKind::Bishop | PieceKind::Knight => 3,
            PieceKind::Rook => 5,
            PieceKind::Queen => 9,
            PieceKind::King | PieceKind::None => 0,
        }
    }

    /// Uppercase SAN letter; pawns and empty squares have none.
    #[inline]
    pub const fn san_letter(self) -> Option<char> {
        match self {
            PieceKind::Bishop => Some('B'),
            PieceKind::Knight => Some('N'),
            PieceKind::Rook => Some('R'),
            PieceKind::Queen => Some('Q'),
            PieceKind::King => Some('K'),
            PieceKind::Pawn | PieceKind::None => None,
        }
    }

    #[inline]
    pub const fn from_san_letter(letter: char) -> Option<Self> {
        match letter {
            'B' => Some(PieceKind::Bishop),
            'N' => Some(PieceKind::Knight),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

/// A square's occupant. Empty squares carry `is_empty == true` and
/// `PieceKind::None`; their color is meaningless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub is_empty: bool,
}

impl Piece {
    pub const EMPTY: Piece = Piece {
        kind: PieceKind::None,
        color: Color::White,
        is_empty: true,
    };

    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        match kind {
            PieceKind::None => Self::EMPTY,
            _ => Self {
                kind,
                color,
                is_empty: false,
            },
        }
    }

    #[inline]
    pub const fn value(self) -> i32 {
        self.kind.value()
    }

    /// True when the square holds a piece of `color` and `kind`.
    #[inline]
    pub fn is(self, color: Color, kind: PieceKind) -> bool {
        !self.is_empty && self.color == color && self.kind == kind
    }

    #[inline]
    pub fn belongs_to(self, color: Color) -> bool {
        !self.is_empty && self.color == color
    }

    /// Index into a 12-wide one-hot vector: kind + 6 * color.
    #[inline]
    pub fn one_hot_index(self) -> Option<usize> {
        if self.is_empty {
            return None;
        }
        self.kind.index().map(|kind| kind + self.color.index() * 6)
    }
}

impl Default for Piece {
    fn default() -> Self {
        Self::EMPTY
    }
}

/// Board coordinate, always within 0..=7 on both axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    rank: u8,
    file: u8,
}

impl Square {
    /// Returns `None` for anything off the board.
    #[inline]
    pub fn try_new(rank: i32, file: i32) -> Option<Self> {
        if (0..8).contains(&rank) && (0..8).contains(&file) {
            Some(Self {
                rank: rank as u8,
                file: file as u8,
            })
        } else {
            None
        }
    }

    /// Builds a square from indices known to be on the board; both indices
    /// are masked to 0..=7.
    #[inline]
    pub const fn from_rank_file(rank: usize, file: usize) -> Self {
        Self {
            rank: (rank & 7) as u8,
            file: (file & 7) as u8,
        }
    }

    #[inline]
    pub const fn rank(self) -> usize {
        self.rank as usize
    }

    #[inline]
    pub const fn file(self) -> usize {
        self.file as usize
    }

    /// Square shifted by `(d_rank, d_file)`, or `None` when it leaves the board.
    #[inline]
    pub fn offset(self, d_rank: i32, d_file: i32) -> Option<Self> {
        Self::try_new(self.rank as i32 + d_rank, self.file as i32 + d_file)
    }

    /// Chebyshev distance, the number of king steps between two squares.
    #[inline]
    pub fn distance(self, other: Square) -> usize {
        let d_rank = (self.rank as i32 - other.rank as i32).unsigned_abs();
        let d_file = (self.file as i32 - other.file as i32).unsigned_abs();
        d_rank.max(d_file) as usize
    }

    /// Iterator over all 64 squares, rank 0 first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8u8).flat_map(|rank| (0..8u8).map(move |file| Square { rank, file }))
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let file = char::from(b'a' + self.file);
        let rank = char::from(b'8' - self.rank);
        write!(f, "{file}{rank}")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    Queenside,
    Kingside,
}

impl CastleSide {
    /// Index into the per-color rook flags (0 = queenside, 1 = kingside).
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            CastleSide::Queenside => 0,
            CastleSide::Kingside => 1,
        }
    }
}

/// Raw board contents indexed `[rank][file]`.
pub type BoardGrid = [[Piece; 8]; 8];
