//! Gateway connection delivering inbound messages as a stream.

use crate::client::DiscordClient;
use crate::error::DiscordError;
use crate::types::*;
use secrecy::{ExposeSecret, SecretString};
use serenity::all::{Context, EventHandler, GatewayIntents, Message, Ready, ShardManager};
use serenity::{async_trait, Client};
use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_stream::wrappers::ReceiverStream;
use tokio_stream::Stream;
use tracing::{debug, info, warn};

/// Forwards gateway messages into the receiver's channel.
struct ForwardHandler {
    tx: mpsc::Sender<BotMessage>,
}

#[async_trait]
impl EventHandler for ForwardHandler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        info!(
            bot_name = %ready.user.name,
            guilds = ready.guilds.len(),
            "discord bot ready"
        );
    }

    async fn message(&self, ctx: Context, msg: Message) {
        let bot_user_id = ctx.cache.current_user().id.get();
        let message = BotMessage::from_discord(&msg, bot_user_id);

        debug!(
            "Received: {} from {}",
            message.text.chars().take(50).collect::<String>(),
            message.author_id
        );

        if self.tx.send(message).await.is_err() {
            warn!("Message stream closed, dropping message");
        }
    }
}

/// Gateway client that has not been started yet.
pub struct MessageReceiver {
    client: Client,
    rx: mpsc::Receiver<BotMessage>,
}

impl MessageReceiver {
    /// Gateway intents the bot subscribes to.
    pub fn intents() -> GatewayIntents {
        GatewayIntents::GUILD_MESSAGES
            | GatewayIntents::DIRECT_MESSAGES
            | GatewayIntents::MESSAGE_CONTENT
    }

    /// Build a gateway client. At most `buffer` messages queue up before the
    /// gateway waits on the consumer.
    pub async fn connect(token: &SecretString, buffer: usize) -> Result<Self, DiscordError> {
        let (tx, rx) = mpsc::channel(buffer.max(1));

        let client = Client::builder(token.expose_secret(), Self::intents())
            .event_handler(ForwardHandler { tx })
            .await?;

        Ok(Self { client, rx })
    }

    /// REST client sharing this connection's HTTP handle.
    pub fn client(&self) -> DiscordClient {
        DiscordClient::from_http(self.client.http.clone())
    }

    /// Start the gateway in the background and return the message stream.
    ///
    /// The stream ends when the gateway stops.
    pub fn start(self) -> (Gateway, impl Stream<Item = BotMessage>) {
        let Self { mut client, rx } = self;
        let shard_manager = client.shard_manager.clone();

        let task = tokio::spawn(async move { client.start().await });

        (
            Gateway {
                shard_manager,
                task,
            },
            ReceiverStream::new(rx),
        )
    }
}

/// Handle to a running gateway connection.
pub struct Gateway {
    shard_manager: Arc<ShardManager>,
    task: JoinHandle<Result<(), serenity::Error>>,
}

impl Gateway {
    /// Close every shard and wait for the gateway task to finish.
    ///
    /// Returns the gateway's own error if it stopped on its own, e.g. after
    /// a failed login.
    pub async fn shutdown(self) -> Result<(), DiscordError> {
        self.shard_manager.shutdown_all().await;

        match self.task.await {
            Ok(result) => result.map_err(DiscordError::from),
            Err(e) => {
                warn!("Gateway task failed: {}", e);
                Err(DiscordError::ConnectionClosed)
            }
        }
    }
}
