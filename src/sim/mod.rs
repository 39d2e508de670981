//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One Euler step per tick, no wall-clock time
//! - Seeded RNG only
//! - No rendering or terminal dependencies

pub mod ball;
pub mod bricks;
pub mod paddle;
pub mod session;

pub use ball::{Ball, StepOutcome};
pub use bricks::BrickField;
pub use paddle::Paddle;
pub use session::{Phase, Session, TickEvents, TickInput};
