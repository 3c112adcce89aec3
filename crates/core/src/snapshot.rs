//! Render-facing view of a session: 16 tiles row-major, scores, status tag.

use crate::types::{SessionStatus, CELL_COUNT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    /// Tile values in row-major order, 0 for empty.
    pub board: [u32; CELL_COUNT],
    pub score: u32,
    pub best: u32,
    pub status: SessionStatus,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.board = [0; CELL_COUNT];
        self.score = 0;
        self.best = 0;
        self.status = SessionStatus::Playing;
    }

    pub fn playable(&self) -> bool {
        self.status == SessionStatus::Playing
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [0; CELL_COUNT],
            score: 0,
            best: 0,
            status: SessionStatus::Playing,
        }
    }
}
