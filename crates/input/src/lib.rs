//! Input capture for the terminal game.
//!
//! One blocking reader loop, meant to run on its own thread: it reads raw
//! key events, maps them to [`Command`]s, and appends them to the shared
//! FIFO queue the simulation drains each tick. The queue is the only state
//! shared between the input flow and the simulation flow.

pub mod map;

pub use map::map_key;

use std::sync::mpsc::Sender;

use crossterm::event::{self, Event, KeyEventKind};
use tui_drops_types::Command;

/// Blocking key-capture loop.
///
/// Returns after forwarding [`Command::Quit`], when the receiving side has
/// gone away, or on a read error (the simulation side owns error reporting;
/// a dead input loop just stops feeding commands).
pub fn read_loop(tx: Sender<Command>) {
    loop {
        let Ok(event) = event::read() else {
            return;
        };
        let Event::Key(key) = event else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if let Some(command) = map_key(key) {
            let quit = command == Command::Quit;
            if tx.send(command).is_err() || quit {
                return;
            }
        }
    }
}
