//! Core types shared across the application
//! This module contains pure data types with no external dependencies

use std::fmt;

/// Grid side length. The board is always GRID_SIZE x GRID_SIZE.
pub const GRID_SIZE: usize = 4;

/// Total number of cells on the board.
pub const CELL_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Tile value that wins the game.
pub const WINNING_TILE: u32 = 2048;

/// Number of tiles placed at the start of a session.
pub const START_TILES: usize = 2;

/// A spawned tile is a 4 with probability 1/FOUR_SPAWN_ODDS, otherwise a 2.
pub const FOUR_SPAWN_ODDS: u32 = 10;

/// The four move directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Parse a direction from a string (case-insensitive).
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Direction::Up),
            "down" => Some(Direction::Down),
            "left" => Some(Direction::Left),
            "right" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Session lifecycle state.
///
/// `Playing` is initial. `Won` and `Over` are terminal; only an explicit
/// reset leaves them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionStatus {
    Playing,
    Won,
    Over,
}

impl SessionStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SessionStatus::Playing)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Playing => "playing",
            SessionStatus::Won => "won",
            SessionStatus::Over => "over",
        }
    }
}

/// Precondition violation on board input.
///
/// Nonzero cells must hold a power of two >= 2; anything else is rejected
/// at construction rather than silently fed to the move engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    InvalidTile { row: usize, col: usize, value: u32 },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidTile { row, col, value } => write!(
                f,
                "invalid tile value {} at ({}, {}): expected 0 or a power of two >= 2",
                value, row, col
            ),
        }
    }
}

impl std::error::Error for BoardError {}

/// True for values a board cell may legally hold.
pub fn is_valid_tile(value: u32) -> bool {
    value == 0 || (value >= 2 && value.is_power_of_two())
}
