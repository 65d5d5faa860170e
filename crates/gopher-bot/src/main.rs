//! Gopher Bot - Main entry point.

use anyhow::Context;
use clap::Parser;
use discord_client::MessageReceiver;
use gopher_bot::config::{BotConfig, Cli, Config, LogFormat};
use gopher_bot::default_responder;
use gopher_bot::dispatch::handle_message;
use gopher_bot::error::AppResult;
use gopher_catalog::Catalog;
use tokio_stream::StreamExt;
use tracing::{error, info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> AppResult<()> {
    // Load configuration
    let cli = Cli::parse();
    let config = Config::load(&cli).context("Failed to load configuration")?;

    // Initialize logging
    init_logging(&config.bot);

    info!("Starting Gopher Bot...");

    let catalog = Catalog::new(&config.catalog.directory);
    match catalog.list().await {
        Ok(gophers) => info!(
            "Found {} gophers in {}",
            gophers.len(),
            config.catalog.directory.display()
        ),
        Err(e) => warn!("Gopher directory not readable yet: {}", e),
    }

    let responder = default_responder(catalog);
    info!("Registered {} command handlers", responder.len());

    let receiver = MessageReceiver::connect(&config.discord.token, config.discord.event_buffer).await?;
    let discord = receiver.client();

    if !discord.health_check().await {
        error!("Discord rejected the bot token");
        return Err(anyhow::anyhow!("Discord API not reachable or token invalid").into());
    }
    info!("Discord API healthy");

    let (gateway, stream) = receiver.start();
    let mut stream = Box::pin(stream);
    info!("Bot is now running. Press CTRL-C to exit.");

    let shutdown = shutdown_signal();
    tokio::pin!(shutdown);

    // Main message loop
    loop {
        tokio::select! {
            message = stream.next() => {
                let Some(message) = message else {
                    error!("Gateway stopped delivering messages");
                    break;
                };

                handle_message(&responder, &discord, &message, config.bot.reply_on_error).await;
            }
            _ = &mut shutdown => {
                info!("Shutdown signal received");
                break;
            }
        }
    }

    info!("Shutting down...");
    gateway.shutdown().await?;
    Ok(())
}

fn init_logging(bot: &BotConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&bot.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    match bot.log_format {
        LogFormat::Pretty => registry.with(tracing_subscriber::fmt::layer()).init(),
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
    }
}

/// Resolves on CTRL-C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for CTRL-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}
