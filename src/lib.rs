//! Breakout TUI - a classic brick-breaking arcade game for the terminal
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, session state)
//! - `render`: Terminal drawing (frame, entities, modal dialogs)
//! - `input`: Non-blocking key polling mapped to logical actions
//!
//! The simulation never touches the terminal, and `render`/`input` never
//! touch game rules; `main` wires them together in a fixed-rate tick loop.

pub mod error;
pub mod input;
pub mod render;
pub mod sim;

pub use error::{Error, Flow, Result};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use std::time::Duration;

    /// Paddle width as a fraction of viewport width
    pub const PADDLE_WIDTH_FRACTION: f32 = 0.20;
    /// Brick field height as a fraction of viewport height
    pub const FIELD_HEIGHT_FRACTION: f32 = 0.20;
    /// Columns left free on each side of the brick field
    pub const FIELD_SIDE_MARGIN: i32 = 3;

    /// Downward launch speed (cells per tick)
    pub const SPAWN_SPEED_Y: f32 = 0.1;
    /// Speed added on each brick or paddle rebound
    pub const REBOUND_SPEEDUP: f32 = 0.01;
    /// Per-axis velocity cap (cells per tick)
    pub const SPEED_CAP: f32 = 1.0;

    /// Balls per session
    pub const STARTING_BALLS: i32 = 5;

    /// Main loop and dialog polling interval
    pub const TICK_INTERVAL: Duration = Duration::from_millis(10);
}

/// Fixed terminal dimensions, captured once at startup.
///
/// Coordinates are (row, col) cells with row 0 at the top; continuous
/// positions use `Vec2 { x: col, y: row }` with y growing downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Center of the playfield; the ball rests here while idle
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width as f32 / 2.0, self.height as f32 / 2.0)
    }

    /// Row the paddle lives on
    #[inline]
    pub fn paddle_row(&self) -> i32 {
        self.height - 2
    }

    /// Row just past the playfield; a ball reaching it is lost
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.height
    }
}
