//! Discord client errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DiscordError {
    #[error("Discord error: {0}")]
    Serenity(#[from] serenity::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Send failed: {0}")]
    SendFailed(String),

    #[error("Gateway connection closed")]
    ConnectionClosed,
}
