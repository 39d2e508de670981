//! The ball: continuous position/velocity and the collision engine.
//!
//! Collision resolution is deliberately coarse: incidence against a brick is
//! classified from the discrete per-tick displacement rather than a true
//! trajectory angle, which is cheap and looks right at terminal resolution.

use glam::Vec2;
use rand::Rng;

use super::bricks::BrickField;
use super::paddle::Paddle;
use crate::Viewport;
use crate::consts::{REBOUND_SPEEDUP, SPAWN_SPEED_Y, SPEED_CAP};

/// Outcome of one [`Ball::advance`] step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepOutcome {
    /// A brick was broken this tick
    pub scored: bool,
    /// The ball exited through the bottom and was reset
    pub died: bool,
}

/// The ball. Idle (zero velocity, parked at center) until spawned.
#[derive(Debug, Clone)]
pub struct Ball {
    pos: Vec2,
    vel: Vec2,
    /// Position at the end of the previous tick, for incidence classification
    last_pos: Vec2,
}

impl Ball {
    /// Create an idle ball at the viewport center.
    pub fn new(viewport: Viewport) -> Self {
        let center = viewport.center();
        Self {
            pos: center,
            vel: Vec2::ZERO,
            last_pos: center,
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn vel(&self) -> Vec2 {
        self.vel
    }

    /// Integer cell the ball currently occupies, as (row, col)
    #[inline]
    pub fn cell(&self) -> (i32, i32) {
        (self.pos.y.round() as i32, self.pos.x.round() as i32)
    }

    /// True while the ball is idle and waiting on the launch key
    #[inline]
    pub fn ready_to_spawn(&self) -> bool {
        self.vel.x == 0.0 && self.vel.y == 0.0
    }

    /// Park the ball idle at the viewport center.
    pub fn reset(&mut self, viewport: Viewport) {
        self.pos = viewport.center();
        self.last_pos = self.pos;
        self.vel = Vec2::ZERO;
    }

    /// Launch: straight down with a one-bit random horizontal nudge.
    ///
    /// vx is uniformly one of {-0.02, -0.01}; keep exactly this
    /// distribution.
    pub fn spawn<R: Rng>(&mut self, rng: &mut R) {
        self.vel.y = SPAWN_SPEED_Y;
        self.vel.x = (rng.random_range(0..=1) as f32 - 2.0) / 100.0;
    }

    /// Advance one tick: resolve collisions against the cell the ball
    /// currently occupies, then integrate one Euler step.
    pub fn advance(
        &mut self,
        viewport: Viewport,
        paddle: &Paddle,
        bricks: &mut BrickField,
    ) -> StepOutcome {
        let mut outcome = StepOutcome::default();
        let (row, col) = self.cell();

        // Brick hit. Incidence is classified from last tick's displacement,
        // so this must read last_pos before it is overwritten below. Exact
        // equality is intended: a perfectly diagonal step is a corner hit.
        if bricks.query_and_break(row, col) {
            let diff = (self.last_pos - self.pos).abs();
            if diff.x == diff.y {
                self.vel.y = -(self.vel.y + REBOUND_SPEEDUP);
                self.vel.x = -(self.vel.x + REBOUND_SPEEDUP);
            } else if diff.x > diff.y {
                self.vel.x = -(self.vel.x + REBOUND_SPEEDUP);
            } else {
                self.vel.y = -(self.vel.y + REBOUND_SPEEDUP);
            }
            outcome.scored = true;
        }
        self.last_pos = self.pos;

        // Side walls: plain sign inversion, no speed change.
        if col == 0 || col == viewport.width - 1 {
            self.vel.x = -self.vel.x;
        }

        if row == 0 {
            // Top wall
            self.vel.y = -self.vel.y;
        } else if row == paddle.row() && paddle.covers(col) {
            // Paddle: invert with a speed bump, then steer by impact point.
            self.vel.y = -(self.vel.y + REBOUND_SPEEDUP);
            if self.vel.y < -SPEED_CAP {
                self.vel.y = -SPEED_CAP;
            }
            let (paddle_x, paddle_w) = paddle.span();
            // Maps impact across the paddle to [-1, 1]: center 0, left
            // edge +1, right edge -1.
            let xper = -2.0 * ((self.pos.x - paddle_x as f32) / paddle_w as f32 - 0.5);
            self.vel.x = xper * self.vel.y;
        } else if row == viewport.bottom() {
            self.reset(viewport);
            outcome.died = true;
        }

        // Per-axis cap; a capped axis snaps its position to the cell so a
        // hard rebound cannot accumulate fractional drift.
        if self.vel.x > SPEED_CAP {
            self.vel.x = SPEED_CAP;
            self.pos.x = col as f32;
        } else if self.vel.x < -SPEED_CAP {
            self.vel.x = -SPEED_CAP;
            self.pos.x = col as f32;
        }
        if self.vel.y > SPEED_CAP {
            self.vel.y = SPEED_CAP;
            self.pos.y = row as f32;
        } else if self.vel.y < -SPEED_CAP {
            self.vel.y = -SPEED_CAP;
            self.pos.y = row as f32;
        }

        self.pos += self.vel;
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    const VP: Viewport = Viewport {
        width: 80,
        height: 24,
    };

    fn ball_at(pos: Vec2, vel: Vec2) -> Ball {
        Ball {
            pos,
            vel,
            last_pos: pos - vel,
        }
    }

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_idle_until_spawned() {
        let mut ball = Ball::new(VP);
        assert!(ball.ready_to_spawn());
        assert_eq!(ball.pos(), VP.center());

        let mut rng = Pcg32::seed_from_u64(7);
        ball.spawn(&mut rng);
        assert!(!ball.ready_to_spawn());
        assert!(approx(ball.vel().y, 0.1));
    }

    #[test]
    fn test_spawn_nudge_distribution() {
        // The horizontal nudge is a single random bit: only -0.02 and
        // -0.01 may ever come out, and both do.
        let mut rng = Pcg32::seed_from_u64(42);
        let mut seen = [false; 2];
        for _ in 0..100 {
            let mut ball = Ball::new(VP);
            ball.spawn(&mut rng);
            let vx = ball.vel().x;
            if approx(vx, -0.02) {
                seen[0] = true;
            } else if approx(vx, -0.01) {
                seen[1] = true;
            } else {
                panic!("unexpected spawn vx: {vx}");
            }
        }
        assert!(seen[0] && seen[1]);
    }

    #[test]
    fn test_left_wall_rebound() {
        let mut ball = ball_at(Vec2::new(0.0, 12.0), Vec2::new(-0.3, 0.0));
        let mut bricks = BrickField::new(VP);
        let outcome = ball.advance(VP, &Paddle::new(VP), &mut bricks);
        assert!(approx(ball.vel().x, 0.3));
        assert!(!outcome.scored);
        assert!(!outcome.died);
    }

    #[test]
    fn test_right_wall_rebound() {
        let mut ball = ball_at(Vec2::new(79.0, 12.0), Vec2::new(0.3, 0.0));
        let mut bricks = BrickField::new(VP);
        ball.advance(VP, &Paddle::new(VP), &mut bricks);
        assert!(approx(ball.vel().x, -0.3));
    }

    #[test]
    fn test_top_wall_rebound() {
        let mut ball = ball_at(Vec2::new(40.0, 0.0), Vec2::new(0.05, -0.2));
        let mut bricks = BrickField::new(VP);
        ball.advance(VP, &Paddle::new(VP), &mut bricks);
        assert!(approx(ball.vel().y, 0.2));
        assert!(approx(ball.vel().x, 0.05));
    }

    #[test]
    fn test_paddle_center_hit_kills_steering() {
        let paddle = Paddle::new(VP); // spans columns 32..48, row 22
        let mut ball = ball_at(Vec2::new(40.0, 22.0), Vec2::new(0.0, 0.1));
        let mut bricks = BrickField::new(VP);
        ball.advance(VP, &paddle, &mut bricks);
        assert!(approx(ball.vel().y, -0.11));
        assert!(approx(ball.vel().x, 0.0));
    }

    #[test]
    fn test_paddle_edge_hits_steer_outward() {
        let paddle = Paddle::new(VP);
        let mut bricks = BrickField::new(VP);

        // Leftmost paddle column: steering factor +1, so vx == vy.
        let mut ball = ball_at(Vec2::new(32.0, 22.0), Vec2::new(0.0, 0.1));
        ball.advance(VP, &paddle, &mut bricks);
        assert!(approx(ball.vel().x, -0.11));

        // Rightmost covered column: most negative steering the span allows.
        let mut ball = ball_at(Vec2::new(47.0, 22.0), Vec2::new(0.0, 0.1));
        ball.advance(VP, &paddle, &mut bricks);
        let xper = -2.0 * ((47.0 - 32.0) / 16.0 - 0.5);
        assert!(approx(ball.vel().x, xper * -0.11));
        assert!(ball.vel().x > 0.0);
    }

    #[test]
    fn test_paddle_bounce_clamps_upward_speed() {
        let paddle = Paddle::new(VP);
        let mut bricks = BrickField::new(VP);
        let mut ball = ball_at(Vec2::new(40.0, 22.0), Vec2::new(0.0, 0.999));
        ball.advance(VP, &paddle, &mut bricks);
        assert!(approx(ball.vel().y, -1.0));
    }

    #[test]
    fn test_bottom_exit_dies_once() {
        let mut ball = ball_at(Vec2::new(40.0, 23.6), Vec2::new(0.0, 0.1));
        let mut bricks = BrickField::new(VP);
        let paddle_parked = {
            let mut paddle = Paddle::new(VP);
            paddle.set_position(-100);
            paddle
        };

        let mut deaths = 0;
        for _ in 0..20 {
            let outcome = ball.advance(VP, &paddle_parked, &mut bricks);
            if outcome.died {
                deaths += 1;
                assert!(ball.ready_to_spawn());
                assert_eq!(ball.pos(), VP.center());
            }
        }
        assert_eq!(deaths, 1);
    }

    #[test]
    fn test_brick_hit_from_above_inverts_vy_only() {
        // Spawn trajectory: straight down, vy dominates vx, striking the
        // top of the brick field.
        let mut bricks = BrickField::new(VP);
        let paddle = Paddle::new(VP);
        let mut ball = ball_at(Vec2::new(40.0, 3.0), Vec2::new(-0.02, 0.1));

        let before = bricks.remaining();
        let mut outcome = StepOutcome::default();
        for _ in 0..100 {
            outcome = ball.advance(VP, &paddle, &mut bricks);
            if outcome.scored {
                break;
            }
        }
        assert!(outcome.scored);
        assert_eq!(bricks.remaining(), before - 1);
        assert!(approx(ball.vel().y, -0.11));
        assert!(approx(ball.vel().x, -0.02));
    }

    #[test]
    fn test_brick_hit_sideways_inverts_vx_only() {
        let mut bricks = BrickField::new(VP);
        let paddle = Paddle::new(VP);
        // Inside the field (rows 5..10), moving horizontally.
        let mut ball = ball_at(Vec2::new(10.0, 7.0), Vec2::new(0.3, 0.01));
        let outcome = ball.advance(VP, &paddle, &mut bricks);
        assert!(outcome.scored);
        assert!(approx(ball.vel().x, -0.31));
        assert!(approx(ball.vel().y, 0.01));
    }

    #[test]
    fn test_brick_corner_hit_inverts_both_axes() {
        let mut bricks = BrickField::new(VP);
        let paddle = Paddle::new(VP);
        let mut ball = ball_at(Vec2::new(10.0, 7.0), Vec2::new(0.5, 0.5));
        let outcome = ball.advance(VP, &paddle, &mut bricks);
        assert!(outcome.scored);
        assert!(approx(ball.vel().x, -0.51));
        assert!(approx(ball.vel().y, -0.51));
    }

    #[test]
    fn test_cap_snaps_position_to_cell() {
        let mut bricks = BrickField::new(VP);
        let paddle = Paddle::new(VP);
        // Corner hit at vx=1.0 inflates to -1.01, which must cap at -1 and
        // snap x onto the cell.
        let mut ball = ball_at(Vec2::new(10.2, 7.0), Vec2::new(1.0, 0.2));
        ball.advance(VP, &paddle, &mut bricks);
        assert!(approx(ball.vel().x, -1.0));
        // snapped to col 10, then integrated one step
        assert!(approx(ball.pos().x, 10.0 - 1.0));
    }

    proptest! {
        /// After any single step from in-range state, both velocity
        /// components stay within [-1, 1].
        #[test]
        fn test_speed_cap_holds(
            px in 0.0f32..80.0,
            py in 0.0f32..24.0,
            vx in -1.0f32..1.0,
            vy in -1.0f32..1.0,
            paddle_x in -20..100i32,
        ) {
            let mut ball = ball_at(Vec2::new(px, py), Vec2::new(vx, vy));
            let mut bricks = BrickField::new(VP);
            let mut paddle = Paddle::new(VP);
            paddle.set_position(paddle_x);
            ball.advance(VP, &paddle, &mut bricks);
            prop_assert!(ball.vel().x.abs() <= 1.0);
            prop_assert!(ball.vel().y.abs() <= 1.0);
        }
    }
}
