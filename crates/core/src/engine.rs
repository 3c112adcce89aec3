//! Move engine - slide-and-merge for all four directions
//!
//! The board decomposes into four lines of four cells: rows for left/right,
//! columns for up/down. Index maps walk each line from its leading edge, so
//! one left-oriented routine serves every direction. Per line: compress out
//! zeros, merge equal adjacent pairs once (a freshly merged tile never merges
//! again in the same move), compress again.
//!
//! The engine is pure: it returns a new board and a score delta, and leaves
//! score accumulation to the caller.

use crate::board::Board;
use crate::types::{Direction, GRID_SIZE};

/// Result of applying one move to a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The board after the move.
    pub board: Board,
    /// Points earned from merges in this move.
    pub score_delta: u32,
    /// Whether any tile slid or merged.
    pub moved: bool,
}

/// Apply a move in the given direction.
pub fn apply_move(board: &Board, direction: Direction) -> MoveOutcome {
    let mut next = *board;
    let mut score_delta = 0;

    for lane in 0..GRID_SIZE {
        let idx = lane_indices(direction, lane);
        let mut line = [
            next.at(idx[0]),
            next.at(idx[1]),
            next.at(idx[2]),
            next.at(idx[3]),
        ];
        score_delta += slide_line(&mut line);
        for (k, &cell) in idx.iter().enumerate() {
            next.put(cell, line[k]);
        }
    }

    let moved = next != *board;
    MoveOutcome {
        board: next,
        score_delta,
        moved,
    }
}

/// Cell indices of one line, ordered from the edge tiles slide toward.
///
/// Right and down walk their line in reverse, which is what lets the
/// left-oriented `slide_line` serve all four directions.
fn lane_indices(direction: Direction, lane: usize) -> [usize; 4] {
    let row = lane * GRID_SIZE;
    match direction {
        Direction::Left => [row, row + 1, row + 2, row + 3],
        Direction::Right => [row + 3, row + 2, row + 1, row],
        Direction::Up => [lane, lane + 4, lane + 8, lane + 12],
        Direction::Down => [lane + 12, lane + 8, lane + 4, lane],
    }
}

/// Slide and merge one line toward index 0. Returns the merge points.
pub(crate) fn slide_line(line: &mut [u32; 4]) -> u32 {
    compress(line);

    let mut delta = 0;
    for i in 0..GRID_SIZE - 1 {
        if line[i] != 0 && line[i] == line[i + 1] {
            line[i] *= 2;
            delta += line[i];
            // Zeroing the partner keeps the doubled tile out of the next
            // comparison, so no tile merges twice in one move.
            line[i + 1] = 0;
        }
    }

    compress(line);
    delta
}

/// Shift all nonzero values to the front, preserving order.
fn compress(line: &mut [u32; 4]) {
    let mut write = 0;
    for read in 0..GRID_SIZE {
        if line[read] != 0 {
            if write != read {
                line[write] = line[read];
                line[read] = 0;
            }
            write += 1;
        }
    }
}
