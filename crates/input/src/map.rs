//! Key mapping from terminal events to player commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_drops_types::Command;

/// Map a key event to a command; unrecognized keys map to nothing.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Command::Quit);
    }
    match key.code {
        // Movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(Command::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(Command::MoveRight),

        // Rotation
        KeyCode::Char('j') | KeyCode::Char('J') => Some(Command::RotateLeft),
        KeyCode::Char('k') | KeyCode::Char('K') => Some(Command::RotateRight),

        // Accelerated fall
        KeyCode::Char(' ') | KeyCode::Down => Some(Command::Accelerate),

        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),

        _ => None,
    }
}
