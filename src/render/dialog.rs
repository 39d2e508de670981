//! Centered modal text boxes: welcome, pause, and game over.
//!
//! A dialog blocks the tick loop entirely: while one is up, the game is
//! frozen and the only live keys are continue (Space) and quit.

use std::thread;

use super::screen::Screen;
use super::style::{self, Style};
use crate::consts::TICK_INTERVAL;
use crate::error::{Error, Flow, Result};
use crate::input::{self, Action};

/// A rectangular block of text drawn centered over the playfield
pub struct Dialog {
    lines: Vec<String>,
    style: Style,
}

/// Frame a title and body into a bordered, uniformly wide box.
fn framed(title: &str, body: &[&str]) -> Vec<String> {
    let inner = body
        .iter()
        .map(|line| line.chars().count())
        .chain([title.chars().count()])
        .max()
        .unwrap_or(0);
    let border = format!("+{}+", "-".repeat(inner + 2));
    let mut lines = Vec::with_capacity(body.len() + 3);
    lines.push(border.clone());
    lines.push(format!("| {title:^inner$} |"));
    lines.push(border.clone());
    for line in body {
        lines.push(format!("| {line:<inner$} |"));
    }
    lines.push(border);
    lines
}

impl Dialog {
    /// Start screen with the control listing.
    pub fn welcome() -> Self {
        Self {
            lines: framed(
                "B R E A K O U T",
                &[
                    "The bricks started it. Finish it.",
                    "",
                    "Controls:",
                    "  [Space]       launch ball / start",
                    "  [,] / [Left]  move paddle left",
                    "  [.] / [Right] move paddle right",
                    "  [p]           pause",
                    "  [q] / [Esc]   quit",
                ],
            ),
            style: style::WELCOME,
        }
    }

    pub fn pause() -> Self {
        Self {
            lines: framed(
                "PAUSE",
                &[
                    "The bricks are not going anywhere.",
                    "Take your time.",
                    "",
                    "[Space] to resume",
                ],
            ),
            style: style::PAUSE,
        }
    }

    /// Shown for both "out of balls" and "field cleared".
    pub fn game_over(score: u32) -> Self {
        let score_line = format!("Your final score: {score}");
        Self {
            lines: framed(
                "GAME OVER",
                &[
                    score_line.as_str(),
                    "",
                    "[Space] to play again",
                    "[q] to quit",
                ],
            ),
            style: style::GAME_OVER,
        }
    }

    fn width(&self) -> i32 {
        self.lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0) as i32
    }

    fn height(&self) -> i32 {
        self.lines.len() as i32
    }

    /// Draw the box centered in the viewport.
    ///
    /// Fails with [`Error::ViewportTooSmall`] when the box does not fit;
    /// at startup that is the signal the terminal cannot host the game.
    pub fn draw(&self, screen: &mut Screen) -> Result<()> {
        let viewport = screen.viewport();
        let (width, height) = (self.width(), self.height());
        if width > viewport.width || height > viewport.height {
            return Err(Error::ViewportTooSmall {
                width: viewport.width,
                height: viewport.height,
                min_width: width,
                min_height: height,
            });
        }
        let top = (viewport.height - height) / 2;
        let left = (viewport.width - width) / 2;
        for (i, line) in self.lines.iter().enumerate() {
            screen.put_str(top + i as i32, left, line, self.style)?;
        }
        Ok(())
    }

    /// Show the dialog and block until continue or quit, polling at the
    /// tick interval. Game state is frozen for the duration.
    pub fn run(&self, screen: &mut Screen) -> Result<Flow> {
        self.draw(screen)?;
        screen.present()?;
        loop {
            match input::poll_action()? {
                Some(Action::Launch) => return Ok(Flow::Continue),
                Some(Action::Quit) => return Ok(Flow::Quit),
                _ => {}
            }
            thread::sleep(TICK_INTERVAL);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boxes_are_rectangular() {
        for dialog in [Dialog::welcome(), Dialog::pause(), Dialog::game_over(42)] {
            let width = dialog.width() as usize;
            assert!(width > 0);
            for line in &dialog.lines {
                assert_eq!(line.chars().count(), width, "ragged line: {line:?}");
            }
        }
    }

    #[test]
    fn test_game_over_interpolates_score() {
        let dialog = Dialog::game_over(1234);
        assert!(dialog.lines.iter().any(|line| line.contains("1234")));
    }

    #[test]
    fn test_framed_centers_title_between_borders() {
        let lines = framed("HI", &["a longer body line"]);
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("+-") && lines[0].ends_with("-+"));
        assert_eq!(lines[0], lines[2]);
        assert!(lines[1].contains("HI"));
    }
}
