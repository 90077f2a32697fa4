use thiserror::Error;

/// Top-level error type used across the entire application.
#[derive(Debug, Error)]
pub enum NotchError {
    #[error("config error: {0}")]
    Config(String),

    #[error("trash error: {0}")]
    Trash(String),

    #[error("window error: {0}")]
    Window(String),
}

pub type Result<T, E = NotchError> = std::result::Result<T, E>;
