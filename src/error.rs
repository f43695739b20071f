//! Error type shared by the renderer, the terminal front end and the CLI.

use thiserror::Error;

/// Crate result type
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("terminal i/o failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("terminal too small: {cols}x{rows} (need at least 20x6)")]
    TerminalTooSmall { cols: u16, rows: u16 },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
