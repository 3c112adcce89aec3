//! Terminal presentation layer.
//!
//! Split into three pieces so drawing stays testable:
//!
//! - [`fb`]: styled-cell framebuffer, no I/O
//! - [`game_view`]: pure snapshot-to-framebuffer mapping
//! - [`renderer`]: crossterm backend with frame diffing

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::GameView;
pub use renderer::TerminalRenderer;
