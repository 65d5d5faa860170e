//! Discord REST client for outbound replies.

use crate::error::DiscordError;
use crate::types::*;
use secrecy::{ExposeSecret, SecretString};
use serenity::all::{ChannelId, CreateAttachment, CreateMessage};
use serenity::http::Http;
use std::sync::Arc;
use tracing::{debug, instrument, warn};

/// Discord REST API client.
#[derive(Clone)]
pub struct DiscordClient {
    http: Arc<Http>,
}

impl DiscordClient {
    /// Create a new client authenticated with a bot token.
    pub fn new(token: &SecretString) -> Self {
        Self {
            http: Arc::new(Http::new(token.expose_secret())),
        }
    }

    /// Wrap an existing HTTP handle, e.g. the one owned by a gateway client.
    pub fn from_http(http: Arc<Http>) -> Self {
        Self { http }
    }

    /// Check that the token is accepted by the API.
    pub async fn health_check(&self) -> bool {
        self.http.get_current_user().await.is_ok()
    }

    /// Send a reply to a channel.
    ///
    /// Content over [`MAX_CONTENT_LEN`] characters goes out as several
    /// messages with the attachment on the first one. The attachment's file
    /// handle is closed before this returns, whatever the outcome.
    #[instrument(skip(self, reply), fields(attachment = reply.attachment.is_some()))]
    pub async fn send(&self, channel_id: u64, reply: OutgoingReply) -> Result<(), DiscordError> {
        if reply.is_empty() {
            debug!("Skipping empty reply");
            return Ok(());
        }
        if channel_id == 0 {
            return Err(DiscordError::SendFailed("invalid channel id 0".into()));
        }

        let OutgoingReply {
            content,
            attachment,
        } = reply;
        let channel = ChannelId::new(channel_id);
        let mut chunks = split_content(&content, MAX_CONTENT_LEN).into_iter();

        let mut first = CreateMessage::new();
        if let Some(chunk) = chunks.next() {
            first = first.content(chunk);
        }
        if let Some(attachment) = attachment {
            let file = CreateAttachment::file(&attachment.file, attachment.filename.as_str()).await?;
            first = first.add_file(file);
        }

        channel
            .send_message(&self.http, first)
            .await
            .map_err(|e| {
                warn!("Send failed: {}", e);
                DiscordError::SendFailed(e.to_string())
            })?;

        for chunk in chunks {
            channel.say(&self.http, chunk).await.map_err(|e| {
                warn!("Send failed: {}", e);
                DiscordError::SendFailed(e.to_string())
            })?;
        }

        debug!("Sent reply to channel {}", channel_id);
        Ok(())
    }

    /// Reply in the channel the original message came from.
    pub async fn reply(&self, original: &BotMessage, reply: OutgoingReply) -> Result<(), DiscordError> {
        self.send(original.channel_id, reply).await
    }
}
