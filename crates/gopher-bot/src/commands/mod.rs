//! Bot command handlers.

mod gopher;
mod gophers;

pub use gopher::GopherHandler;
pub use gophers::GophersHandler;

use crate::error::{AppError, AppResult};
use crate::intent::Intent;
use async_trait::async_trait;
use discord_client::OutgoingReply;

/// Command handler trait.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Command name (e.g., "gopher", "gophers").
    fn name(&self) -> &str;

    /// Check if this handler answers the intent.
    fn handles(&self, intent: &Intent) -> bool;

    /// Build the reply for the intent.
    async fn execute(&self, intent: &Intent) -> AppResult<OutgoingReply>;
}

/// Routes intents to the first handler that accepts them.
pub struct Responder {
    handlers: Vec<Box<dyn CommandHandler>>,
}

impl Responder {
    pub fn new(handlers: Vec<Box<dyn CommandHandler>>) -> Self {
        Self { handlers }
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Build the reply for an intent.
    pub async fn build(&self, intent: &Intent) -> AppResult<OutgoingReply> {
        let handler = self
            .handlers
            .iter()
            .find(|h| h.handles(intent))
            .ok_or_else(|| AppError::UnknownCommand(format!("{:?}", intent)))?;

        handler.execute(intent).await
    }
}
