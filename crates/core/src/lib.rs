//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the full 2048 rule set with **zero dependencies**
//! on UI, networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical sessions
//! - **Testable**: Every rule is exercised without a display surface
//! - **Portable**: Can run in any environment (terminal, headless)
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 grid with validated tile values
//! - [`engine`]: slide-and-merge transformation and merge scoring
//! - [`spawn`]: random 2/4 tile placement into empty cells
//! - [`evaluate`]: win and dead-board detection
//! - [`session`]: session state machine (Playing / Won / Over)
//! - [`rng`]: seeded LCG so spawns are reproducible
//! - [`store`]: injected best-score persistence capability
//! - [`snapshot`]: render-facing view of a session
//!
//! # Example
//!
//! ```
//! use tui_2048_core::GameSession;
//! use tui_2048_types::Direction;
//!
//! let mut session = GameSession::new(12345);
//! let outcome = session.apply(Direction::Left);
//! assert_eq!(outcome.status, session.status());
//! ```

pub mod board;
pub mod engine;
pub mod evaluate;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod spawn;
pub mod store;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use engine::{apply_move, MoveOutcome};
pub use evaluate::{evaluate, Evaluation};
pub use rng::SimpleRng;
pub use session::{GameSession, StepOutcome};
pub use snapshot::GameSnapshot;
pub use spawn::spawn_tile;
pub use store::{BestScoreStore, MemoryStore};
