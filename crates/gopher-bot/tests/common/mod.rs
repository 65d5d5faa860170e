//! Common test utilities for integration tests.

use discord_client::BotMessage;
use gopher_bot::commands::{CommandHandler, GopherHandler, GophersHandler, Responder};
use gopher_catalog::{Catalog, Resolver};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use tempfile::TempDir;

pub const BOT_USER_ID: u64 = 1000;

/// Create a gopher directory holding the given files.
pub fn gopher_dir(files: &[&str]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for file in files {
        fs::write(dir.path().join(file), b"\x89PNG\r\n").unwrap();
    }
    dir
}

/// Responder over `dir` with a seeded random source.
pub fn test_responder(dir: &TempDir) -> Responder {
    let catalog = Catalog::new(dir.path());
    let handlers: Vec<Box<dyn CommandHandler>> = vec![
        Box::new(GopherHandler::with_rng(
            Resolver::new(catalog.clone()),
            StdRng::seed_from_u64(1),
        )),
        Box::new(GophersHandler::new(catalog)),
    ];
    Responder::new(handlers)
}

/// Inbound message from a user other than the bot.
pub fn user_message(text: &str) -> BotMessage {
    BotMessage {
        author_id: 42,
        channel_id: 7,
        message_id: 99,
        guild_id: Some(5),
        text: text.to_string(),
        bot_user_id: BOT_USER_ID,
    }
}
