//! Application error types.

use thiserror::Error;

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),

    #[error("Discord error: {0}")]
    Discord(#[from] discord_client::DiscordError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] gopher_catalog::CatalogError),

    #[error("Unknown command: \"{0}\"")]
    UnknownCommand(String),
}

/// Result type alias for application errors.
pub type AppResult<T> = Result<T, AppError>;
