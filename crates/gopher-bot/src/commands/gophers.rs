//! Gophers command - lists every known gopher.

use crate::commands::CommandHandler;
use crate::error::AppResult;
use crate::intent::Intent;
use async_trait::async_trait;
use discord_client::OutgoingReply;
use gopher_catalog::Catalog;
use tracing::info;

pub struct GophersHandler {
    catalog: Catalog,
}

impl GophersHandler {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl CommandHandler for GophersHandler {
    fn name(&self) -> &str {
        "gophers"
    }

    fn handles(&self, intent: &Intent) -> bool {
        matches!(intent, Intent::Gophers)
    }

    async fn execute(&self, _intent: &Intent) -> AppResult<OutgoingReply> {
        let gophers = self.catalog.list().await?;

        // One name per line, including the last
        let listing: String = gophers.iter().map(|g| format!("{}\n", g.name)).collect();

        info!("Listing {} gophers", gophers.len());
        Ok(OutgoingReply::text(listing))
    }
}
