//! Startup failures.  Once the terminal is set up the game loop has no
//! recoverable errors of its own.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    /// Terminal I/O failed (raw mode, alternate screen, drawing).
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The terminal cannot fit a legible arena.
    #[error("terminal is {cols}x{rows}, need at least {min_cols}x{min_rows}")]
    TerminalTooSmall {
        cols: u16,
        rows: u16,
        min_cols: u16,
        min_rows: u16,
    },
}

pub type Result<T> = std::result::Result<T, GameError>;
