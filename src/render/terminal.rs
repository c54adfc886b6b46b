//! Terminal compositor
//!
//! Maps the 800x500 logical space onto an 80x25 cell grid (x/10, y/20) and
//! composites background tiles, sprites, and the score line into a cell
//! buffer that is flushed with one cursor move per row. The simulation keeps
//! working in logical pixels; only this file knows about cells.

use std::io::{self, Write};

use crossterm::{
    cursor, queue,
    style::{self, Color},
    terminal::{self, ClearType},
};

use super::{DrawRequest, Frame};
use crate::assets::{Assets, Sprite};
use crate::consts::*;

/// Cell grid dimensions
pub const GRID_COLS: usize = 80;
pub const GRID_ROWS: usize = 25;

/// Logical pixels per cell, horizontally and vertically
const CELL_W: f32 = SCREEN_WIDTH / GRID_COLS as f32;
const CELL_H: f32 = SCREEN_HEIGHT / GRID_ROWS as f32;

/// Composites draw requests into the terminal.
pub struct TerminalRenderer<W: Write> {
    out: W,
    assets: Assets,
    color: bool,
    show_score: bool,
    cells: Vec<Vec<char>>,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, assets: Assets, color: bool, show_score: bool) -> Self {
        Self {
            out,
            assets,
            color,
            show_score,
            cells: vec![vec![' '; GRID_COLS]; GRID_ROWS],
        }
    }

    /// Handle one draw request.
    pub fn draw(&mut self, request: &DrawRequest) -> io::Result<()> {
        match request {
            DrawRequest::Scene(frame) => self.draw_scene(frame),
            DrawRequest::GameOver { message } => self.draw_game_over(message),
        }
    }

    fn draw_scene(&mut self, frame: &Frame) -> io::Result<()> {
        for row in &mut self.cells {
            row.fill(' ');
        }

        // Two background tiles, opaque, drawn first
        blit(
            &mut self.cells,
            &self.assets.background,
            to_col(frame.background_x1),
            0,
            true,
        );
        blit(
            &mut self.cells,
            &self.assets.background,
            to_col(frame.background_x2),
            0,
            true,
        );

        blit(
            &mut self.cells,
            &self.assets.obstacle,
            to_col(frame.obstacle_pos.x),
            to_row(frame.obstacle_pos.y),
            false,
        );
        blit(
            &mut self.cells,
            &self.assets.player,
            to_col(frame.player_pos.x),
            to_row(frame.player_pos.y),
            false,
        );

        if self.show_score {
            let score_text = format!("Score: {}", frame.score);
            for (i, c) in score_text.chars().enumerate() {
                if i + 1 < GRID_COLS {
                    self.cells[0][i + 1] = c;
                }
            }
        }

        self.flush_cells()
    }

    fn draw_game_over(&mut self, message: &str) -> io::Result<()> {
        queue!(self.out, terminal::Clear(ClearType::All))?;
        let row = (GRID_ROWS / 2) as u16;
        let col = (GRID_COLS.saturating_sub(message.len()) / 2) as u16;
        if self.color {
            queue!(self.out, style::SetForegroundColor(Color::Red))?;
        }
        queue!(
            self.out,
            cursor::MoveTo(col, row),
            style::Print(message),
            style::ResetColor,
        )?;
        self.out.flush()
    }

    fn flush_cells(&mut self) -> io::Result<()> {
        queue!(self.out, cursor::MoveTo(0, 0))?;
        if self.color {
            queue!(self.out, style::SetForegroundColor(Color::White))?;
        }
        for (row_idx, row) in self.cells.iter().enumerate() {
            let line: String = row.iter().collect();
            queue!(
                self.out,
                cursor::MoveTo(0, row_idx as u16),
                style::Print(line)
            )?;
        }
        queue!(self.out, style::ResetColor)?;
        self.out.flush()
    }
}

/// Copy a sprite into the cell buffer with clipping. Spaces are transparent
/// unless `opaque` (background tiles overwrite everything).
fn blit(cells: &mut [Vec<char>], sprite: &Sprite, col: i32, row: i32, opaque: bool) {
    for (dy, sprite_row) in sprite.rows().enumerate() {
        let y = row + dy as i32;
        if y < 0 || y >= GRID_ROWS as i32 {
            continue;
        }
        for (dx, &c) in sprite_row.iter().enumerate() {
            if c == ' ' && !opaque {
                continue;
            }
            let x = col + dx as i32;
            if x < 0 || x >= GRID_COLS as i32 {
                continue;
            }
            cells[y as usize][x as usize] = c;
        }
    }
}

/// Logical x to cell column
#[inline]
fn to_col(x: f32) -> i32 {
    (x / CELL_W).floor() as i32
}

/// Logical y to cell row
#[inline]
fn to_row(y: f32) -> i32 {
    (y / CELL_H).floor() as i32
}
