/// Rank and file ray directions as (rank, file) steps.
pub const STRAIGHT_DIRECTIONS: [(i32, i32); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
