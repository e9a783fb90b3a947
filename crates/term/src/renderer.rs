//! TerminalRenderer: flushes frames to a real terminal.
//!
//! The board is small, so every tick is a full redraw from the top-left;
//! output is queued and flushed once per frame.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::frame::Frame;

pub struct TerminalRenderer {
    stdout: io::Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Draw one frame, coalescing color changes across runs of cells.
    pub fn draw(&mut self, frame: &Frame) -> Result<()> {
        self.stdout.queue(cursor::MoveTo(0, 0))?;

        let mut current_fg: Option<Color> = None;
        for y in 0..frame.height() {
            self.stdout.queue(cursor::MoveTo(0, y))?;
            for x in 0..frame.width() {
                let glyph = frame.get(x, y).unwrap_or_default();
                if current_fg != Some(glyph.fg) {
                    self.stdout.queue(SetForegroundColor(glyph.fg))?;
                    current_fg = Some(glyph.fg);
                }
                self.stdout.queue(Print(glyph.ch))?;
            }
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}
