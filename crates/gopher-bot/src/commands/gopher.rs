//! Gopher command - posts one gopher image, named or random.

use crate::commands::CommandHandler;
use crate::error::{AppError, AppResult};
use crate::intent::{unknown_gopher, Intent};
use async_trait::async_trait;
use discord_client::{Attachment, OutgoingReply};
use gopher_catalog::{CatalogError, Resolver, Resource};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::Mutex;
use tracing::info;

pub struct GopherHandler {
    resolver: Resolver,
    rng: Mutex<StdRng>,
}

impl GopherHandler {
    /// Handler drawing random picks from OS entropy.
    pub fn new(resolver: Resolver) -> Self {
        Self::with_rng(resolver, StdRng::from_entropy())
    }

    /// Handler with a caller-supplied random source.
    pub fn with_rng(resolver: Resolver, rng: StdRng) -> Self {
        Self {
            resolver,
            rng: Mutex::new(rng),
        }
    }

    async fn attach(resource: &Resource, caption: &str) -> AppResult<OutgoingReply> {
        let file = resource.open().await?;

        Ok(OutgoingReply::with_attachment(
            caption,
            Attachment {
                filename: resource.filename.clone(),
                media_type: Some(resource.media_type.clone()),
                file,
            },
        ))
    }
}

#[async_trait]
impl CommandHandler for GopherHandler {
    fn name(&self) -> &str {
        "gopher"
    }

    fn handles(&self, intent: &Intent) -> bool {
        matches!(intent, Intent::Gopher { .. })
    }

    async fn execute(&self, intent: &Intent) -> AppResult<OutgoingReply> {
        let Intent::Gopher { name, caption } = intent else {
            return Err(AppError::UnknownCommand(format!("{:?}", intent)));
        };

        let resource = match name {
            None => {
                let mut rng = self.rng.lock().await;
                self.resolver.pick_any(&mut *rng).await?
            }
            Some(name) => match self.resolver.get(name).await {
                Ok(resource) => resource,
                Err(CatalogError::NotFound(_)) => {
                    info!("Unknown gopher requested: {}", name);
                    return Ok(OutgoingReply::text(unknown_gopher(name)));
                }
                Err(e) => return Err(e.into()),
            },
        };

        info!("Posting {}", resource.filename);
        Self::attach(&resource, caption).await
    }
}
