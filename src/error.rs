//! Error and quit-signal types.
//!
//! Quitting is deliberate control flow, not a failure: loop code threads
//! [`Flow::Quit`] back up the stack and only genuine failures travel the
//! [`Error`] channel (and get a diagnostic on the way out).

use thiserror::Error;

/// Result alias for fallible terminal/game operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Raw mode or the alternate screen could not be entered
    #[error("terminal is unavailable: {0}")]
    TerminalUnavailable(#[source] std::io::Error),

    /// The viewport cannot fit even the smallest dialog
    #[error("terminal too small: need {min_width}x{min_height}, got {width}x{height}")]
    ViewportTooSmall {
        width: i32,
        height: i32,
        min_width: i32,
        min_height: i32,
    },

    /// I/O failure while drawing or polling mid-loop
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Control signal returned by the main loop and dialog sub-loops
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running
    Continue,
    /// The user asked to leave; tear down and exit cleanly
    Quit,
}
