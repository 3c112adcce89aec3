//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into move directions and session meta
//! commands. Independent of any UI framework; the host decides when a
//! direction is allowed to reach the session.

pub mod map;

pub use tui_2048_types as types;

pub use map::{direction_for_key, is_restart, should_quit};
