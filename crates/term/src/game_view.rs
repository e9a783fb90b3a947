//! GameView: maps a `GameSnapshot` into a character frame.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crossterm::style::Color;

use crate::frame::{Frame, Glyph};
use tui_drops_core::GameSnapshot;
use tui_drops_types::{DropKind, BOARD_COLS, BOARD_ROWS};

/// Terminal columns per board cell; 2x1 compensates for glyph aspect ratio.
const CELL_W: u16 = 2;

/// Columns reserved to the right of the well for the score line.
const SIDE_PANEL_W: u16 = 14;

/// Pure renderer from snapshots to frames.
#[derive(Debug, Default)]
pub struct GameView;

impl GameView {
    /// Frame size the view always produces.
    pub fn frame_size() -> (u16, u16) {
        let inner_w = BOARD_COLS as u16 * CELL_W;
        (inner_w + 2 + SIDE_PANEL_W, BOARD_ROWS as u16 + 2)
    }

    /// Render one snapshot into a fresh frame.
    pub fn render(&self, snapshot: &GameSnapshot) -> Frame {
        let (width, height) = Self::frame_size();
        let mut frame = Frame::new(width, height);

        self.draw_border(&mut frame);

        for drop in &snapshot.drops {
            if drop.x < 0 || drop.x >= BOARD_COLS || drop.row < 0 || drop.row >= BOARD_ROWS {
                continue;
            }
            let x = 1 + drop.x as u16 * CELL_W;
            let y = 1 + drop.row as u16;
            frame.set(x, y, kind_glyph(drop.kind));
        }

        let panel_x = BOARD_COLS as u16 * CELL_W + 3;
        frame.put_str(panel_x, 1, &format!("score:{}", snapshot.score), Color::Reset);
        if snapshot.game_over {
            frame.put_str(panel_x, 3, "game over", Color::Red);
            frame.put_str(panel_x, 4, "q to exit", Color::Reset);
        }

        frame
    }

    fn draw_border(&self, frame: &mut Frame) {
        let border = Glyph {
            ch: '*',
            fg: Color::Grey,
        };
        let inner_w = BOARD_COLS as u16 * CELL_W;
        let bottom = BOARD_ROWS as u16 + 1;

        for x in 0..inner_w + 2 {
            frame.set(x, 0, border);
            frame.set(x, bottom, border);
        }
        for y in 0..bottom + 1 {
            frame.set(0, y, border);
            frame.set(inner_w + 1, y, border);
        }
    }
}

/// Each kind gets a distinct glyph as well as a color, so the board stays
/// readable on monochrome terminals.
fn kind_glyph(kind: DropKind) -> Glyph {
    let (ch, fg) = match kind {
        DropKind::Red => ('@', Color::Red),
        DropKind::Yellow => ('$', Color::Yellow),
        DropKind::Green => ('&', Color::Green),
        DropKind::Blue => ('%', Color::Blue),
    };
    Glyph { ch, fg }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_drops_core::DropView;

    #[test]
    fn border_encloses_the_well() {
        let view = GameView;
        let frame = view.render(&GameSnapshot::default());
        let inner_w = BOARD_COLS as usize * CELL_W as usize;

        assert!(frame.row_text(0).starts_with(&"*".repeat(inner_w + 2)));
        let bottom = BOARD_ROWS as u16 + 1;
        assert!(frame.row_text(bottom).starts_with(&"*".repeat(inner_w + 2)));
        for y in 1..bottom {
            let row = frame.row_text(y);
            assert_eq!(row.chars().next(), Some('*'));
            assert_eq!(row.chars().nth(inner_w + 1), Some('*'));
        }
    }

    #[test]
    fn drops_are_drawn_at_their_cells() {
        let mut snapshot = GameSnapshot::default();
        snapshot.drops.push(DropView {
            x: 0,
            row: 0,
            kind: DropKind::Red,
        });
        snapshot.drops.push(DropView {
            x: 5,
            row: 11,
            kind: DropKind::Blue,
        });

        let frame = GameView.render(&snapshot);
        assert_eq!(frame.get(1, 1).map(|g| g.ch), Some('@'));
        assert_eq!(frame.get(1 + 5 * CELL_W, 12).map(|g| g.ch), Some('%'));
    }

    #[test]
    fn score_is_shown_beside_the_board() {
        let snapshot = GameSnapshot {
            score: 40,
            ..GameSnapshot::default()
        };
        let frame = GameView.render(&snapshot);
        assert!(frame.row_text(1).contains("score:40"));
    }

    #[test]
    fn game_over_banner_appears() {
        let snapshot = GameSnapshot {
            game_over: true,
            ..GameSnapshot::default()
        };
        let frame = GameView.render(&snapshot);
        assert!(frame.row_text(3).contains("game over"));
    }
}
