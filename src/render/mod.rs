//! Rendering collaborator: frame chrome, entities, and modal dialogs.
//!
//! The whole frame is redrawn from scratch each tick into crossterm's
//! queue and flushed once, so no entity needs to remember what it drew
//! last time.

pub mod dialog;
pub mod screen;
pub mod style;

pub use dialog::Dialog;
pub use screen::Screen;
pub use style::{Style, StyleProvider};

use std::io;

use crate::sim::Session;
use style::{CHROME, RowBands};

/// Glyphs for the playfield
const BORDER_GLYPH: char = '#';
const BRICK_GLYPH: char = '@';
const PADDLE_GLYPH: char = '=';
const BALL_GLYPH: char = 'O';

/// Draw one full frame: border, HUD, bricks, paddle, ball.
///
/// Queues only; the caller flushes with [`Screen::present`].
pub fn draw_frame(screen: &mut Screen, session: &Session) -> io::Result<()> {
    let viewport = screen.viewport();
    screen.clear_all()?;

    // Border: top edge plus both sides, stopping above the paddle row.
    for row in 0..viewport.height - 2 {
        screen.put(row, 0, BORDER_GLYPH, CHROME)?;
        screen.put(row, viewport.width - 1, BORDER_GLYPH, CHROME)?;
    }
    for col in 0..viewport.width {
        screen.put(0, col, BORDER_GLYPH, CHROME)?;
    }

    // HUD on the bottom row.
    screen.put_str(
        viewport.height - 1,
        2,
        &format!("Score: {:4}", session.score()),
        CHROME,
    )?;
    screen.put_str(
        viewport.height - 1,
        viewport.width - 10,
        &format!("Balls: {}", session.balls_left()),
        CHROME,
    )?;

    // Brick field, row-banded colors.
    let bands = RowBands;
    let (top, left, height, width) = session.bricks().bounds();
    for row in 0..height {
        let row_style = bands.style_for_row(row);
        for col in 0..width {
            if session.bricks().is_intact(top + row, left + col) {
                screen.put(top + row, left + col, BRICK_GLYPH, row_style)?;
            }
        }
    }

    // Paddle (possibly partially off-screen; put() drops those cells).
    let (paddle_x, paddle_w) = session.paddle().span();
    for i in 0..paddle_w {
        screen.put(session.paddle().row(), paddle_x + i, PADDLE_GLYPH, CHROME)?;
    }

    // Ball, idle or live.
    let (ball_row, ball_col) = session.ball().cell();
    screen.put(ball_row, ball_col, BALL_GLYPH, CHROME)?;

    Ok(())
}
