//! Terminal presentation
//!
//! Draws simulation snapshots onto a character grid and flushes it with
//! crossterm. Strictly a consumer of [`Snapshot`]: no game rules live here.

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{self, Color},
};

use crate::consts::*;
use crate::highscores::HighScores;
use crate::sim::{GamePhase, Rect, Snapshot};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    ch: char,
    fg: Color,
}

const SKY: Cell = Cell {
    ch: ' ',
    fg: Color::Reset,
};

/// Character-grid renderer scaled to the terminal size
pub struct TerminalRenderer {
    cols: u16,
    rows: u16,
    cells: Vec<Cell>,
}

impl TerminalRenderer {
    pub fn new(cols: u16, rows: u16) -> Self {
        Self {
            cols,
            rows,
            cells: vec![SKY; cols as usize * rows as usize],
        }
    }

    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.cols = cols;
        self.rows = rows;
        self.cells = vec![SKY; cols as usize * rows as usize];
    }

    fn clear(&mut self) {
        self.cells.fill(SKY);
    }

    fn set(&mut self, x: i32, y: i32, ch: char, fg: Color) {
        if x >= 0 && y >= 0 && (x as u16) < self.cols && (y as u16) < self.rows {
            self.cells[y as usize * self.cols as usize + x as usize] = Cell { ch, fg };
        }
    }

    /// Playfield x to terminal column
    fn cell_x(&self, x: f32) -> i32 {
        (x / PLAYFIELD_WIDTH * self.cols as f32).floor() as i32
    }

    /// Playfield y to terminal row
    fn cell_y(&self, y: f32) -> i32 {
        (y / PLAYFIELD_HEIGHT * self.rows as f32).floor() as i32
    }

    /// Fill the cells covered by a playfield rectangle. Edges round
    /// outward so a thin region still shows up as at least one cell.
    fn fill_region(&mut self, rect: &Rect, ch: char, fg: Color) {
        if rect.height() <= 0.0 || rect.width() <= 0.0 {
            return;
        }
        let x0 = self.cell_x(rect.left());
        let x1 = (rect.right() / PLAYFIELD_WIDTH * self.cols as f32).ceil() as i32;
        let y0 = self.cell_y(rect.top());
        let y1 = (rect.bottom() / PLAYFIELD_HEIGHT * self.rows as f32).ceil() as i32;
        for y in y0..y1 {
            for x in x0..x1 {
                self.set(x, y, ch, fg);
            }
        }
    }

    fn text(&mut self, x: i32, y: i32, s: &str, fg: Color) {
        for (i, ch) in s.chars().enumerate() {
            self.set(x + i as i32, y, ch, fg);
        }
    }

    fn text_centered(&mut self, y: i32, s: &str, fg: Color) {
        let x = (self.cols as i32 - s.chars().count() as i32) / 2;
        self.text(x, y, s, fg);
    }

    fn draw_ground(&mut self) {
        let top = self.cell_y(GROUND_Y);
        for x in 0..self.cols as i32 {
            self.set(x, top, '█', Color::DarkGreen);
            for y in (top + 1)..self.rows as i32 {
                self.set(x, y, '▒', Color::DarkYellow);
            }
        }
    }

    fn draw_bird(&mut self, snap: &Snapshot) {
        let bird = &snap.bird;
        let cx = self.cell_x(bird.pos.x + BIRD_HITBOX_W / 2.0);
        let cy = self.cell_y(bird.pos.y + BIRD_HITBOX_H / 2.0);

        let body = if !bird.alive {
            'x'
        } else if bird.rotation_deg > 10.0 {
            '^'
        } else if bird.rotation_deg < -10.0 {
            'v'
        } else {
            '>'
        };
        self.set(cx, cy, body, Color::Yellow);

        let wing = if bird.wing_up { '/' } else { '\\' };
        self.set(cx - 1, cy, wing, Color::DarkYellow);
    }

    fn draw_hud(&mut self, snap: &Snapshot) {
        self.text_centered(0, &format!("SCORE {}", snap.score), Color::White);
        if snap.high_score > 0 {
            let label = format!("BEST {}", snap.high_score);
            let x = self.cols as i32 - label.chars().count() as i32 - 1;
            self.text(x, 0, &label, Color::White);
        }
    }

    fn draw_overlay(&mut self, snap: &Snapshot, scores: &HighScores) {
        let mid = self.rows as i32 / 2;
        match snap.phase {
            GamePhase::NotStarted => {
                self.text_centered(mid - 2, "G A P   G L I D E R", Color::Yellow);
                self.text_centered(mid, "PRESS SPACE TO START", Color::White);
                self.text_centered(mid + 1, "Q QUITS", Color::Grey);
            }
            GamePhase::Over => {
                self.text_centered(mid - 3, "GAME OVER", Color::Red);
                self.text_centered(mid - 1, &format!("SCORE {}", snap.score), Color::White);
                for (i, entry) in scores.entries.iter().take(3).enumerate() {
                    self.text_centered(
                        mid + 1 + i as i32,
                        &format!("{}. {}", i + 1, entry.score),
                        Color::Grey,
                    );
                }
                self.text_centered(mid + 5, "PRESS SPACE TO RESTART", Color::White);
            }
            GamePhase::Running => {}
        }
    }

    /// Compose and flush one frame
    pub fn draw(
        &mut self,
        out: &mut impl Write,
        snap: &Snapshot,
        scores: &HighScores,
    ) -> io::Result<()> {
        self.clear();

        for pipe in &snap.pipes {
            self.fill_region(&pipe.upper, '█', Color::Green);
            self.fill_region(&pipe.lower, '█', Color::Green);
        }
        self.draw_ground();
        if snap.phase != GamePhase::NotStarted {
            self.draw_bird(snap);
        }
        self.draw_hud(snap);
        self.draw_overlay(snap, scores);

        let mut fg = Color::Reset;
        queue!(out, style::SetForegroundColor(fg))?;
        for row in 0..self.rows {
            queue!(out, cursor::MoveTo(0, row))?;
            for col in 0..self.cols {
                let cell = self.cells[row as usize * self.cols as usize + col as usize];
                if cell.fg != fg {
                    queue!(out, style::SetForegroundColor(cell.fg))?;
                    fg = cell.fg;
                }
                queue!(out, style::Print(cell.ch))?;
            }
        }
        queue!(out, style::ResetColor)?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::GameState;
    use crate::tuning::Tuning;

    #[test]
    fn test_draw_writes_a_full_frame() {
        let mut renderer = TerminalRenderer::new(40, 20);
        let state = GameState::new(5, Tuning::default());
        let scores = HighScores::new();
        let mut out: Vec<u8> = Vec::new();
        renderer
            .draw(&mut out, &state.snapshot(), &scores)
            .unwrap();
        assert!(!out.is_empty());
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("G A P"));
        assert!(text.contains("SCORE 0"));
    }

    #[test]
    fn test_region_mapping_stays_in_bounds() {
        let mut renderer = TerminalRenderer::new(10, 10);
        // A rect hanging off the left edge must not panic or wrap
        let rect = Rect::new(-30.0, 0.0, 60.0, 300.0);
        renderer.fill_region(&rect, '#', Color::Green);
        assert!(renderer.cells.iter().any(|c| c.ch == '#'));
    }
}
