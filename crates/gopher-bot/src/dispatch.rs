//! Per-message pipeline: parse, build the reply, send it.

use crate::commands::Responder;
use crate::intent::Intent;
use async_trait::async_trait;
use discord_client::{BotMessage, DiscordClient, DiscordError, OutgoingReply};
use tracing::{debug, error, info};

/// Reply sent when building a reply fails.
pub const ERROR_REPLY: &str = "Sorry, something went wrong.";

/// Outbound side of the transport.
#[async_trait]
pub trait ReplySender: Send + Sync {
    async fn reply(&self, original: &BotMessage, reply: OutgoingReply) -> Result<(), DiscordError>;
}

#[async_trait]
impl ReplySender for DiscordClient {
    async fn reply(&self, original: &BotMessage, reply: OutgoingReply) -> Result<(), DiscordError> {
        DiscordClient::reply(self, original, reply).await
    }
}

/// What happened to one inbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Written by the bot itself.
    Own,
    /// Not a command; nothing was sent.
    Ignored,
    /// A reply was built and sent.
    Replied,
    /// Building the reply failed; the apology was sent if enabled.
    Failed,
    /// The reply was built but could not be sent.
    SendFailed,
}

/// Handle one inbound message end to end.
///
/// Never returns an error: every failure is logged and the message dropped,
/// so one bad command cannot stop the bot.
pub async fn handle_message<S>(
    responder: &Responder,
    sender: &S,
    message: &BotMessage,
    reply_on_error: bool,
) -> Dispatch
where
    S: ReplySender + ?Sized,
{
    if message.is_own() {
        return Dispatch::Own;
    }

    let intent = match Intent::parse(&message.text) {
        Ok(intent) => intent,
        Err(e) => {
            debug!("{}", e);
            return Dispatch::Ignored;
        }
    };

    let (reply, outcome) = match responder.build(&intent).await {
        Ok(reply) => (reply, Dispatch::Replied),
        Err(e) => {
            error!("Handler error for {:?}: {}", intent, e);
            if !reply_on_error {
                return Dispatch::Failed;
            }
            (OutgoingReply::text(ERROR_REPLY), Dispatch::Failed)
        }
    };

    // The reply, and any open attachment, is consumed by the send
    match sender.reply(message, reply).await {
        Ok(()) => {
            if outcome == Dispatch::Replied {
                info!("Replied to {:?} in channel {}", intent, message.channel_id);
            }
            outcome
        }
        Err(e) => {
            error!("Failed to send reply: {}", e);
            match outcome {
                Dispatch::Replied => Dispatch::SendFailed,
                other => other,
            }
        }
    }
}
