//! Terminal front end: a pure snapshot-to-frame view plus the crossterm
//! renderer that owns raw mode and the alternate screen.
//!
//! Only [`TerminalRenderer`] touches the terminal; [`GameView`] and
//! [`Frame`] are plain data transforms, testable without a tty.

pub mod frame;
pub mod game_view;
pub mod renderer;

pub use frame::{Frame, Glyph};
pub use game_view::GameView;
pub use renderer::TerminalRenderer;
