//! Terminal screen wrapper: raw-mode lifecycle and cell-addressed drawing.
//!
//! Draw calls queue into crossterm's buffer; nothing reaches the terminal
//! until [`Screen::present`] flushes, once per tick.

use std::io::{self, Stdout, Write, stdout};

use crossterm::{
    cursor, execute, queue,
    style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal,
};

use super::style::Style;
use crate::Viewport;
use crate::error::{Error, Result};

/// Owns stdout and the raw-mode terminal state.
///
/// Dropping the screen restores the caller's terminal (cooked mode, main
/// screen buffer, visible cursor) even while unwinding from a panic.
pub struct Screen {
    out: Stdout,
    viewport: Viewport,
}

impl Screen {
    /// Enter raw mode and the alternate screen, and capture the viewport
    /// dimensions for the whole session (no resize handling).
    pub fn new() -> Result<Self> {
        terminal::enable_raw_mode().map_err(Error::TerminalUnavailable)?;
        let mut out = stdout();
        if let Err(e) = execute!(out, terminal::EnterAlternateScreen, cursor::Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(Error::TerminalUnavailable(e));
        }
        let (cols, rows) = match terminal::size() {
            Ok(dims) => dims,
            Err(e) => {
                Self::restore(&mut out);
                return Err(Error::TerminalUnavailable(e));
            }
        };
        Ok(Self {
            out,
            viewport: Viewport::new(cols as i32, rows as i32),
        })
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Best-effort terminal restore, shared by Drop and the panic hook.
    pub fn restore(out: &mut Stdout) {
        let _ = execute!(
            out,
            ResetColor,
            cursor::Show,
            terminal::LeaveAlternateScreen
        );
        let _ = terminal::disable_raw_mode();
    }

    /// Queue a single glyph at (row, col); off-screen cells are ignored.
    pub fn put(&mut self, row: i32, col: i32, glyph: char, style: Style) -> io::Result<()> {
        if row < 0 || col < 0 || row >= self.viewport.height || col >= self.viewport.width {
            return Ok(());
        }
        queue!(
            self.out,
            cursor::MoveTo(col as u16, row as u16),
            SetAttribute(if style.bold {
                Attribute::Bold
            } else {
                Attribute::NormalIntensity
            }),
            SetForegroundColor(style.color),
            Print(glyph),
        )
    }

    /// Queue a string starting at (row, col); glyphs running off the right
    /// edge are dropped.
    pub fn put_str(&mut self, row: i32, col: i32, text: &str, style: Style) -> io::Result<()> {
        for (i, glyph) in text.chars().enumerate() {
            self.put(row, col + i as i32, glyph, style)?;
        }
        Ok(())
    }

    /// Blank the whole screen (queued like everything else).
    pub fn clear_all(&mut self) -> io::Result<()> {
        queue!(self.out, terminal::Clear(terminal::ClearType::All))
    }

    /// Park the cursor in the bottom-right corner and flush everything
    /// queued this tick.
    pub fn present(&mut self) -> io::Result<()> {
        queue!(
            self.out,
            cursor::MoveTo(
                (self.viewport.width - 1).max(0) as u16,
                (self.viewport.height - 1).max(0) as u16,
            )
        )?;
        self.out.flush()
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        Self::restore(&mut self.out);
    }
}
