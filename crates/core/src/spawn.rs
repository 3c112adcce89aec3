//! Tile spawner - places a random 2 or 4 in an empty cell
//!
//! One draw picks the cell uniformly from the empty set, a second
//! independent draw picks the value (4 with probability 1/10, else 2).

use crate::board::Board;
use crate::rng::SimpleRng;
use crate::types::FOUR_SPAWN_ODDS;

/// Spawn one tile into a random empty cell.
///
/// Returns false and leaves the board untouched when no cell is empty.
/// Callers that only spawn after a confirmed move never hit that case,
/// but the contract stays defensive.
pub fn spawn_tile(board: &mut Board, rng: &mut SimpleRng) -> bool {
    let empty = board.empty_cells();
    if empty.is_empty() {
        return false;
    }

    let idx = empty[rng.next_range(empty.len() as u32) as usize];
    let value = if rng.next_range(FOUR_SPAWN_ODDS) == 0 {
        4
    } else {
        2
    };
    board.put(idx, value);
    true
}
