//! Discord message types.

use serenity::all::Message;

/// Discord rejects message content longer than this many characters.
pub const MAX_CONTENT_LEN: usize = 2000;

/// Parsed message for bot processing.
#[derive(Debug, Clone)]
pub struct BotMessage {
    /// User that wrote the message.
    pub author_id: u64,
    /// Channel the message was posted in.
    pub channel_id: u64,
    /// Message ID.
    pub message_id: u64,
    /// Guild ID, `None` for direct messages.
    pub guild_id: Option<u64>,
    /// The message text.
    pub text: String,
    /// The bot's own user ID on the connection that received this message.
    pub bot_user_id: u64,
}

impl BotMessage {
    /// Extract a bot message from a gateway message.
    pub fn from_discord(msg: &Message, bot_user_id: u64) -> Self {
        Self {
            author_id: msg.author.id.get(),
            channel_id: msg.channel_id.get(),
            message_id: msg.id.get(),
            guild_id: msg.guild_id.map(|g| g.get()),
            text: msg.content.clone(),
            bot_user_id,
        }
    }

    /// Whether the bot wrote this message itself.
    pub fn is_own(&self) -> bool {
        self.author_id == self.bot_user_id
    }

    pub fn is_direct(&self) -> bool {
        self.guild_id.is_none()
    }
}

/// A file sent along with a reply.
///
/// Holds an open handle; it is closed when the attachment is dropped.
#[derive(Debug)]
pub struct Attachment {
    pub filename: String,
    /// Media type hint, e.g. `png`.
    pub media_type: Option<String>,
    pub file: tokio::fs::File,
}

/// Outbound reply: text plus at most one attachment.
#[derive(Debug)]
pub struct OutgoingReply {
    pub content: String,
    pub attachment: Option<Attachment>,
}

impl OutgoingReply {
    /// Text-only reply.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            attachment: None,
        }
    }

    /// Reply carrying a file.
    pub fn with_attachment(content: impl Into<String>, attachment: Attachment) -> Self {
        Self {
            content: content.into(),
            attachment: Some(attachment),
        }
    }

    /// Whether there is nothing to send.
    pub fn is_empty(&self) -> bool {
        self.content.is_empty() && self.attachment.is_none()
    }
}

/// Split `content` into pieces of at most `limit` characters.
///
/// Breaks after a newline when one falls inside the window, otherwise hard
/// splits at the limit. Empty input yields no chunks.
pub fn split_content(content: &str, limit: usize) -> Vec<String> {
    let limit = limit.max(1);
    let mut chunks = Vec::new();
    let mut rest = content;

    while !rest.is_empty() {
        if rest.chars().count() <= limit {
            chunks.push(rest.to_string());
            break;
        }

        // Byte offset of the first character past the limit
        let window_end = rest
            .char_indices()
            .nth(limit)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let window = &rest[..window_end];

        let cut = match window.rfind('\n') {
            Some(i) if i > 0 => i + 1,
            _ => window_end,
        };

        chunks.push(rest[..cut].to_string());
        rest = &rest[cut..];
    }

    chunks
}
