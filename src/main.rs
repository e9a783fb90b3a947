//! Terminal falling-drops runner (default binary).
//!
//! Two threads: a blocking input-capture loop feeding a FIFO command
//! channel, and this simulation loop which drains the channel, advances the
//! game one fixed timestep, renders, and sleeps out the rest of the tick.
//! All game state lives on the simulation side; the channel is the only
//! shared resource.

use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;

use tui_drops::core::Game;
use tui_drops::input;
use tui_drops::term::{GameView, TerminalRenderer};
use tui_drops::types::{Command, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || input::read_loop(tx));

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|t| t.as_millis() as u32)
        .unwrap_or(1);
    let mut game = Game::new(seed);
    let view = GameView;
    let tick_duration = Duration::from_millis(TICK_MS);

    loop {
        let tick_start = Instant::now();

        // Drain pending commands in arrival order, then step once.
        for command in rx.try_iter() {
            if command == Command::Quit {
                return Ok(());
            }
            game.apply(command);
        }
        game.tick();

        let frame = view.render(&game.snapshot());
        term.draw(&frame)?;

        // Fixed cadence regardless of work done this tick.
        thread::sleep(tick_duration.saturating_sub(tick_start.elapsed()));
    }
}
