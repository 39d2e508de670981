//! The player's paddle: a one-dimensional horizontal bat.

use crate::Viewport;
use crate::consts::PADDLE_WIDTH_FRACTION;

/// The player's paddle
#[derive(Debug, Clone)]
pub struct Paddle {
    /// Left edge column
    x: i32,
    /// Width, set once at construction and never changed
    width: i32,
    /// Row the paddle occupies
    row: i32,
}

impl Paddle {
    /// Create a paddle centered at the bottom of the viewport.
    pub fn new(viewport: Viewport) -> Self {
        let width = (PADDLE_WIDTH_FRACTION * viewport.width as f32).round() as i32;
        Self {
            x: (viewport.width - width) / 2,
            width,
            row: viewport.paddle_row(),
        }
    }

    /// Set the left edge column.
    ///
    /// No boundary clamping: the paddle is allowed to slide partially or
    /// fully out of the visible field.
    pub fn set_position(&mut self, x: i32) {
        self.x = x;
    }

    /// Move one column left (one unit per keypress, no acceleration).
    pub fn move_left(&mut self) {
        self.set_position(self.x - 1);
    }

    /// Move one column right.
    pub fn move_right(&mut self) {
        self.set_position(self.x + 1);
    }

    /// Horizontal extent as (left edge, width)
    #[inline]
    pub fn span(&self) -> (i32, i32) {
        (self.x, self.width)
    }

    #[inline]
    pub fn row(&self) -> i32 {
        self.row
    }

    /// Whether a cell column falls on the paddle
    #[inline]
    pub fn covers(&self, col: i32) -> bool {
        col >= self.x && col < self.x + self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_width_fixed_from_viewport() {
        let paddle = Paddle::new(Viewport::new(80, 24));
        let (x, width) = paddle.span();
        assert_eq!(width, 16);
        assert_eq!(x, 32); // centered
        assert_eq!(paddle.row(), 22);
    }

    #[test]
    fn test_moves_one_unit_per_event() {
        let mut paddle = Paddle::new(Viewport::new(80, 24));
        let (start, width) = paddle.span();
        paddle.move_left();
        assert_eq!(paddle.span(), (start - 1, width));
        paddle.move_right();
        paddle.move_right();
        assert_eq!(paddle.span(), (start + 1, width));
    }

    #[test]
    fn test_motion_is_unclamped() {
        let mut paddle = Paddle::new(Viewport::new(80, 24));
        paddle.set_position(-50);
        assert_eq!(paddle.span().0, -50);
        paddle.set_position(200);
        assert_eq!(paddle.span().0, 200);
        // width never changes, wherever the paddle goes
        assert_eq!(paddle.span().1, 16);
    }

    #[test]
    fn test_covers_span() {
        let mut paddle = Paddle::new(Viewport::new(80, 24));
        paddle.set_position(10);
        assert!(!paddle.covers(9));
        assert!(paddle.covers(10));
        assert!(paddle.covers(25));
        assert!(!paddle.covers(26));
    }
}
