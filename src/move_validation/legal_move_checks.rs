use crate::game_state::{chess_types::*, game_state::GameState};
use crate::moves::bishop_moves::DIAGONAL_DIRECTIONS;
use crate::moves::king_moves::king_steps;
use crate::moves::knight_moves::knight_jumps;
use crate::moves::pawn_moves::pawn_attack_origins;
use crate::moves::rook_moves::STRAIGHT_DIRECTIONS;

#[inline]
fn grid_piece(grid: &BoardGrid, square: Square) -> Piece {
    grid[square.rank()][square.file()]
}

/// First occupied square walking from `square` (exclusive) along `direction`.
pub fn first_occupied_on_grid(grid: &BoardGrid, square: Square, direction: (i32, i32)) -> Option<Square> {
    let mut cursor = square.offset(direction.0, direction.1);
    while let Some(next) = cursor {
        if !grid_piece(grid, next).is_empty {
            return Some(next);
        }
        cursor = next.offset(direction.0, direction.1);
    }
    None
}

fn slider_attacks(
    grid: &BoardGrid,
    square: Square,
    attacker_color: Color,
    directions: &[(i32, i32)],
    kinds: [PieceKind; 2],
) -> bool {
    directions.iter().any(|&direction| {
        first_occupied_on_grid(grid, square, direction).is_some_and(|hit| {
            let piece = grid_piece(grid, hit);
            kinds.iter().any(|kind| piece.is(attacker_color, *kind))
        })
    })
}

/// Whether any piece of `attacker_color` on `grid` attacks `square`. Rays stop
/// at the first occupied square, friendly or enemy.
pub fn is_square_attacked_on(grid: &BoardGrid, square: Square, attacker_color: Color) -> bool {
    if slider_attacks(
        grid,
        square,
        attacker_color,
        &STRAIGHT_DIRECTIONS,
        [PieceKind::Rook, PieceKind::Queen],
    ) {
        return true;
    }

    if slider_attacks(
        grid,
        square,
        attacker_color,
        &DIAGONAL_DIRECTIONS,
        [PieceKind::Bishop, PieceKind::Queen],
    ) {
        return true;
    }

    if pawn_attack_origins(attacker_color, square)
        .any(|from| grid_piece(grid, from).is(attacker_color, PieceKind::Pawn))
    {
        return true;
    }

    if knight_jumps(square).any(|from| grid_piece(grid, from).is(attacker_color, PieceKind::Knight)) {
        return true;
    }

    king_steps(square).any(|from| grid_piece(grid, from).is(attacker_color, PieceKind::King))
}

#[inline]
pub fn is_square_attacked(game_state: &GameState, square: Square, attacker_color: Color) -> bool {
    is_square_attacked_on(game_state.board(), square, attacker_color)
}

#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    is_square_attacked(game_state, game_state.king_square(color), color.opposite())
}

/// Check-safety probe: would moving the piece on `from` to `to` leave its own
/// king attacked?
///
/// The move is tried on a scratch copy of the grid, so the real state is never
/// touched. An en-passant victim is lifted as well, and when the mover is the
/// king the probe looks at `to` instead of the cached king square. Passing
/// `from == to` asks whether the king would be attacked where it stands.
pub fn king_into_check(game_state: &GameState, from: Square, to: Square) -> bool {
    let mover = game_state.piece_at(from);
    let color = if mover.is_empty {
        game_state.side_to_move()
    } else {
        mover.color
    };

    let mut scratch = *game_state.board();
    if from != to {
        if mover.kind == PieceKind::Pawn
            && from.file() != to.file()
            && game_state.is_en_passant_target(to)
            && game_state.piece_at(to).is_empty
        {
            let victim = Square::from_rank_file(from.rank(), to.file());
            scratch[victim.rank()][victim.file()] = Piece::EMPTY;
        }
        scratch[to.rank()][to.file()] = mover;
        scratch[from.rank()][from.file()] = Piece::EMPTY;
    }

    let king = if mover.is(color, PieceKind::King) {
        to
    } else {
        game_state.king_square(color)
    };
    is_square_attacked_on(&scratch, king, color.opposite())
}
