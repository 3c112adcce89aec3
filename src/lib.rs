//! Facade over the workspace crates.
//!
//! Hosts can depend on this single package and reach every layer:
//! game rules in [`core`], key mapping in [`input`], persistence in
//! [`store`], and terminal drawing in [`term`].

pub use tui_2048_core as core;
pub use tui_2048_input as input;
pub use tui_2048_store as store;
pub use tui_2048_term as term;
pub use tui_2048_types as types;
