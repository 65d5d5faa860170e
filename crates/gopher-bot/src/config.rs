//! Application configuration loaded from environment variables and flags.

use anyhow::{Context, Result};
use clap::Parser;
use secrecy::SecretString;
use serde::Deserialize;
use std::path::PathBuf;

/// Command line flags. Each one overrides its environment variable.
#[derive(Debug, Default, Parser)]
#[command(name = "gopher-bot", version, about = "Posts gophers on request")]
pub struct Cli {
    /// Bot token (env: DISCORD__TOKEN)
    #[arg(short = 't', long = "token")]
    pub token: Option<String>,

    /// Directory holding the gopher images (env: CATALOG__DIRECTORY)
    #[arg(short = 'd', long = "directory")]
    pub directory: Option<PathBuf>,

    /// Log level or filter directive (env: BOT__LOG_LEVEL)
    #[arg(long = "log-level")]
    pub log_level: Option<String>,
}

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Discord configuration
    pub discord: DiscordConfig,

    /// Image catalog configuration
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Bot configuration
    #[serde(default)]
    pub bot: BotConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiscordConfig {
    /// Bot token
    pub token: SecretString,

    /// Inbound messages buffered between the gateway and the handler loop
    #[serde(default = "default_event_buffer")]
    pub event_buffer: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Directory scanned for `.png` files
    #[serde(default = "default_directory")]
    pub directory: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BotConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log output format
    #[serde(default)]
    pub log_format: LogFormat,

    /// Answer failed commands with a short apology instead of staying silent
    #[serde(default = "default_true")]
    pub reply_on_error: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
        }
    }
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            reply_on_error: default_true(),
        }
    }
}

fn default_event_buffer() -> usize {
    64
}

fn default_directory() -> PathBuf {
    PathBuf::from("./gophers/")
}

fn default_log_level() -> String {
    "info".into()
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from `.env`, the environment and command line flags.
    pub fn load(cli: &Cli) -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        Self::load_from(cli, config::Environment::default())
    }

    /// Load configuration from an explicit environment source.
    pub fn load_from(cli: &Cli, environment: config::Environment) -> Result<Self> {
        let config = config::Config::builder()
            .add_source(environment.separator("__").try_parsing(false))
            .set_override_option("discord.token", cli.token.clone())?
            .set_override_option(
                "catalog.directory",
                cli.directory.as_ref().map(|d| d.display().to_string()),
            )?
            .set_override_option("bot.log_level", cli.log_level.clone())?
            .build()
            .context("Failed to build configuration")?;

        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}
