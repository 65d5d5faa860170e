//! Discord transport for the gopher bot.
//!
//! Wraps serenity's gateway and REST clients behind two small types:
//! [`MessageReceiver`] yields inbound [`BotMessage`]s as a stream and
//! [`DiscordClient`] sends [`OutgoingReply`]s back.

mod client;
mod error;
mod receiver;
mod types;

pub use client::DiscordClient;
pub use error::DiscordError;
pub use receiver::{Gateway, MessageReceiver};
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use serenity::all::GatewayIntents;

    fn bot_message(author_id: u64, guild_id: Option<u64>) -> BotMessage {
        BotMessage {
            author_id,
            channel_id: 42,
            message_id: 1,
            guild_id,
            text: "!gopher".into(),
            bot_user_id: 1000,
        }
    }

    #[test]
    fn test_bot_message_is_own() {
        assert!(bot_message(1000, Some(7)).is_own());
        assert!(!bot_message(1001, Some(7)).is_own());
    }

    #[test]
    fn test_bot_message_is_direct() {
        assert!(bot_message(5, None).is_direct());
        assert!(!bot_message(5, Some(7)).is_direct());
    }

    #[test]
    fn test_intents_include_message_content() {
        let intents = MessageReceiver::intents();
        assert!(intents.contains(GatewayIntents::GUILD_MESSAGES));
        assert!(intents.contains(GatewayIntents::MESSAGE_CONTENT));
    }

    #[test]
    fn test_text_reply() {
        let reply = OutgoingReply::text("hello");
        assert_eq!(reply.content, "hello");
        assert!(reply.attachment.is_none());
        assert!(!reply.is_empty());
    }

    #[test]
    fn test_empty_reply() {
        assert!(OutgoingReply::text("").is_empty());
    }

    #[tokio::test]
    async fn test_attachment_reply_is_not_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gandalf.png");
        std::fs::write(&path, b"png").unwrap();

        let attachment = Attachment {
            filename: "gandalf.png".into(),
            media_type: Some("png".into()),
            file: tokio::fs::File::open(&path).await.unwrap(),
        };
        let reply = OutgoingReply::with_attachment("", attachment);

        assert!(!reply.is_empty());
        assert_eq!(reply.attachment.as_ref().unwrap().filename, "gandalf.png");
    }

    #[test]
    fn test_split_content_short() {
        assert_eq!(split_content("a\nb\n", 2000), vec!["a\nb\n"]);
    }

    #[test]
    fn test_split_content_empty() {
        assert!(split_content("", 2000).is_empty());
    }

    #[test]
    fn test_split_content_on_newlines() {
        let chunks = split_content("aaa\nbbb\nccc\n", 9);
        assert_eq!(chunks, vec!["aaa\nbbb\n", "ccc\n"]);
    }

    #[test]
    fn test_split_content_hard_split() {
        let chunks = split_content("abcdefghij", 4);
        assert_eq!(chunks, vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_split_content_respects_char_boundaries() {
        let chunks = split_content("ééééé", 2);
        assert_eq!(chunks, vec!["éé", "éé", "é"]);
    }

    #[test]
    fn test_split_content_preserves_text() {
        let content: String = (0..500).map(|i| format!("gopher-{}\n", i)).collect();
        let chunks = split_content(&content, MAX_CONTENT_LEN);

        assert!(chunks.len() > 1);
        assert!(chunks.iter().all(|c| c.chars().count() <= MAX_CONTENT_LEN));
        assert!(chunks.iter().all(|c| c.ends_with('\n')));
        assert_eq!(chunks.concat(), content);
    }
}
