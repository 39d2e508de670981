//! Color and emphasis handling.
//!
//! Every drawable carries an explicit `{bold, color}` pair instead of an
//! ad-hoc tuple. Multi-row drawables look their style up through the
//! [`StyleProvider`] seam: the brick field varies per row, everything else
//! uses a constant.

use crossterm::style::Color;

/// Emphasis + hue for a drawable cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Style {
    pub bold: bool,
    pub color: Color,
}

impl Style {
    pub const fn plain(color: Color) -> Self {
        Self { bold: false, color }
    }

    pub const fn bold(color: Color) -> Self {
        Self { bold: true, color }
    }
}

/// Border, HUD, paddle, and ball chrome
pub const CHROME: Style = Style::bold(Color::White);
/// Welcome dialog text
pub const WELCOME: Style = Style::bold(Color::Cyan);
/// Pause dialog text
pub const PAUSE: Style = Style::plain(Color::Blue);
/// Game-over dialog text
pub const GAME_OVER: Style = Style::bold(Color::Red);

/// Per-row style lookup for multi-row drawables
pub trait StyleProvider {
    /// Style for the given row offset within the drawable
    fn style_for_row(&self, row: i32) -> Style;
}

/// Fixed style regardless of row
#[derive(Debug, Clone, Copy)]
pub struct Uniform(pub Style);

impl StyleProvider for Uniform {
    fn style_for_row(&self, _row: i32) -> Style {
        self.0
    }
}

/// Brick row palette, cycled from the top of the field down
pub const BRICK_PALETTE: [Color; 4] = [Color::Blue, Color::Red, Color::Green, Color::Yellow];

/// Repeating color bands with bold flipping every full palette cycle, the
/// classic brick-wall look.
#[derive(Debug, Clone, Copy)]
pub struct RowBands;

impl StyleProvider for RowBands {
    fn style_for_row(&self, row: i32) -> Style {
        let len = BRICK_PALETTE.len() as i32;
        Style {
            bold: (row.div_euclid(len)) % 2 == 0,
            color: BRICK_PALETTE[row.rem_euclid(len) as usize],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_bands_cycle_palette() {
        let bands = RowBands;
        for row in 0..12 {
            let style = bands.style_for_row(row);
            assert_eq!(style.color, BRICK_PALETTE[(row % 4) as usize]);
        }
    }

    #[test]
    fn test_row_bands_alternate_bold_per_cycle() {
        let bands = RowBands;
        assert!(bands.style_for_row(0).bold);
        assert!(bands.style_for_row(3).bold);
        assert!(!bands.style_for_row(4).bold);
        assert!(!bands.style_for_row(7).bold);
        assert!(bands.style_for_row(8).bold);
    }

    #[test]
    fn test_uniform_ignores_row() {
        let uniform = Uniform(CHROME);
        assert_eq!(uniform.style_for_row(0), CHROME);
        assert_eq!(uniform.style_for_row(99), CHROME);
    }
}
