//! Terminal-state detector
//!
//! `can_move` characterizes exactly whether some direction would change the
//! board: a slide needs an empty cell in the line, and a merge needs an
//! equal adjacent pair, so "any empty cell OR any equal neighbor pair" is
//! equivalent to "some `apply_move` reports moved" on every board holding
//! at least one tile (the all-empty board, which no session ever sees, has
//! empty cells but nothing to slide). The equivalence is checked
//! exhaustively in the integration tests.

use crate::board::Board;
use crate::types::{GRID_SIZE, WINNING_TILE};

/// Win/continue verdict for a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    /// Some cell holds the winning tile.
    pub won: bool,
    /// At least one direction would change the board.
    pub can_move: bool,
}

/// Evaluate a board. Pure; sticky-won semantics belong to the caller.
pub fn evaluate(board: &Board) -> Evaluation {
    Evaluation {
        won: board.contains(WINNING_TILE),
        can_move: !board.is_full() || has_adjacent_pair(board),
    }
}

/// True iff two horizontally or vertically adjacent cells hold the same
/// nonzero value.
fn has_adjacent_pair(board: &Board) -> bool {
    for row in 0..GRID_SIZE {
        for col in 0..GRID_SIZE {
            let value = board.get(row, col).unwrap_or(0);
            if value == 0 {
                continue;
            }
            if col + 1 < GRID_SIZE && board.get(row, col + 1) == Some(value) {
                return true;
            }
            if row + 1 < GRID_SIZE && board.get(row + 1, col) == Some(value) {
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: [[u32; 4]; 4]) -> Board {
        Board::from_rows(rows).unwrap()
    }

    #[test]
    fn test_won_iff_winning_tile_present() {
        let with = board([[0; 4], [0, 2048, 0, 0], [0; 4], [0; 4]]);
        assert!(evaluate(&with).won);

        let without = board([[1024, 1024, 0, 0], [0; 4], [0; 4], [0; 4]]);
        assert!(!evaluate(&without).won);
    }

    #[test]
    fn test_can_move_with_empty_cells() {
        assert!(evaluate(&Board::new()).can_move);

        let sparse = board([[2, 0, 0, 0], [0; 4], [0; 4], [0; 4]]);
        assert!(evaluate(&sparse).can_move);
    }

    #[test]
    fn test_can_move_full_board_with_horizontal_pair() {
        let full = board([
            [2, 2, 4, 8],
            [4, 8, 16, 32],
            [8, 16, 32, 64],
            [16, 32, 64, 128],
        ]);
        assert!(evaluate(&full).can_move);
    }

    #[test]
    fn test_can_move_full_board_with_vertical_pair() {
        let full = board([
            [2, 4, 8, 16],
            [2, 8, 16, 32],
            [4, 16, 32, 64],
            [8, 32, 64, 128],
        ]);
        assert!(evaluate(&full).can_move);
    }

    #[test]
    fn test_stuck_checkerboard_cannot_move() {
        let stuck = board([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ]);
        let verdict = evaluate(&stuck);
        assert!(!verdict.can_move);
        assert!(!verdict.won);
    }

    #[test]
    fn test_full_distinct_neighbors_cannot_move() {
        let stuck = board([
            [2, 4, 8, 16],
            [32, 64, 128, 256],
            [2, 4, 8, 16],
            [32, 64, 128, 256],
        ]);
        assert!(!evaluate(&stuck).can_move);
    }

    #[test]
    fn test_won_and_stuck_at_once() {
        let both = board([
            [2048, 4, 8, 16],
            [32, 64, 128, 256],
            [2, 4, 8, 16],
            [32, 64, 128, 256],
        ]);
        let verdict = evaluate(&both);
        assert!(verdict.won);
        assert!(!verdict.can_move);
    }
}
