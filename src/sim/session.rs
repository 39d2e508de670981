//! Session orchestration: score, remaining balls, and the phase machine.
//!
//! The session is the sole owner and mutator of the paddle, ball, and brick
//! field; the ball borrows the other two per advance call, so nothing holds
//! a stored reference to anything else.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::ball::Ball;
use super::bricks::BrickField;
use super::paddle::Paddle;
use crate::Viewport;
use crate::consts::STARTING_BALLS;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Start screen; play has not begun
    Welcome,
    /// Active gameplay (the ball may still be idle awaiting launch)
    Playing,
    /// Frozen; resumes exactly where it left off
    Paused,
    /// Round ended - out of balls or field cleared; awaiting restart
    GameOver,
}

/// Input intent for a single tick (at most one action per tick)
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    pub move_left: bool,
    pub move_right: bool,
    pub launch: bool,
    pub pause: bool,
}

/// What the caller needs to know after one tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    /// A brick was broken
    pub scored: bool,
    /// The ball fell out and a life was spent
    pub ball_lost: bool,
    /// The session just transitioned to [`Phase::GameOver`]
    pub round_over: bool,
}

/// One game session
pub struct Session {
    viewport: Viewport,
    phase: Phase,
    score: u32,
    balls_left: i32,
    paddle: Paddle,
    ball: Ball,
    bricks: BrickField,
    rng: Pcg32,
}

impl Session {
    pub fn new(viewport: Viewport, seed: u64) -> Self {
        let session = Self {
            viewport,
            phase: Phase::Welcome,
            score: 0,
            balls_left: STARTING_BALLS,
            paddle: Paddle::new(viewport),
            ball: Ball::new(viewport),
            bricks: BrickField::new(viewport),
            rng: Pcg32::seed_from_u64(seed),
        };
        log::info!(
            "session created: viewport {}x{}, {} bricks",
            viewport.width,
            viewport.height,
            session.bricks.remaining()
        );
        session
    }

    /// Leave the welcome screen and enter play.
    pub fn start(&mut self) {
        if self.phase == Phase::Welcome {
            self.phase = Phase::Playing;
        }
    }

    /// Full reset back to a ready-to-play state.
    ///
    /// "Out of balls" and "field cleared" both land here; there is no
    /// separate victory path.
    pub fn reset(&mut self) {
        self.score = 0;
        self.balls_left = STARTING_BALLS;
        self.bricks = BrickField::new(self.viewport);
        self.ball.reset(self.viewport);
        self.phase = Phase::Playing;
        log::info!("session reset: {} bricks restored", self.bricks.remaining());
    }

    /// Advance one tick: apply input intent, step the ball once, settle
    /// score/lives and the phase.
    pub fn tick(&mut self, input: TickInput) -> TickEvents {
        let mut events = TickEvents::default();

        if input.pause {
            self.phase = match self.phase {
                Phase::Playing => Phase::Paused,
                Phase::Paused => Phase::Playing,
                other => other,
            };
        }
        if self.phase != Phase::Playing {
            // Frozen: nothing advances while paused, welcome, or game over.
            return events;
        }

        if input.move_left {
            self.paddle.move_left();
        }
        if input.move_right {
            self.paddle.move_right();
        }
        if input.launch && self.ball.ready_to_spawn() {
            self.ball.spawn(&mut self.rng);
            log::debug!("ball launched: vel {:?}", self.ball.vel());
        }

        let outcome = self.ball.advance(self.viewport, &self.paddle, &mut self.bricks);
        if outcome.scored {
            self.score += 1;
            events.scored = true;
            log::debug!("brick broken, {} remain", self.bricks.remaining());
        }
        if outcome.died {
            self.balls_left -= 1;
            events.ball_lost = true;
            log::info!("ball lost, {} left", self.balls_left);
        }

        if self.balls_left < 0 || self.bricks.remaining() == 0 {
            self.phase = Phase::GameOver;
            events.round_over = true;
            log::info!("game over: final score {}", self.score);
        }
        events
    }

    #[inline]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[inline]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[inline]
    pub fn balls_left(&self) -> i32 {
        self.balls_left
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn paddle(&self) -> &Paddle {
        &self.paddle
    }

    #[inline]
    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    #[inline]
    pub fn bricks(&self) -> &BrickField {
        &self.bricks
    }
}
