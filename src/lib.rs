//! Terminal falling-drops puzzle (workspace facade crate).
//!
//! This package exposes the member crates under stable module names; the
//! implementation lives in dedicated crates under `crates/`.

pub use tui_drops_core as core;
pub use tui_drops_input as input;
pub use tui_drops_term as term;
pub use tui_drops_types as types;
