//! Name and random lookups over a catalog.

use crate::catalog::Catalog;
use crate::error::CatalogError;
use crate::types::Resource;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, instrument};

/// Resolves a request to exactly one gopher.
#[derive(Debug, Clone)]
pub struct Resolver {
    catalog: Catalog,
}

impl Resolver {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Find the gopher whose name matches exactly (case-sensitive).
    #[instrument(skip(self))]
    pub async fn get(&self, name: &str) -> Result<Resource, CatalogError> {
        self.catalog
            .list()
            .await?
            .into_iter()
            .find(|r| r.name == name)
            .ok_or_else(|| CatalogError::NotFound(name.to_string()))
    }

    /// Pick one gopher uniformly at random.
    ///
    /// Fails with [`CatalogError::Empty`] when the directory holds no images.
    pub async fn pick_any<R>(&self, rng: &mut R) -> Result<Resource, CatalogError>
    where
        R: Rng + Send + ?Sized,
    {
        let resources = self.catalog.list().await?;
        let picked = resources
            .choose(rng)
            .cloned()
            .ok_or_else(|| CatalogError::Empty(self.catalog.directory().to_path_buf()))?;

        debug!("Picked {} of {}", picked.name, resources.len());
        Ok(picked)
    }

    /// Resolve either a named gopher or, when `pick_any` is set, a random one.
    ///
    /// `name` is ignored for random picks.
    pub async fn get_resource<R>(
        &self,
        name: &str,
        pick_any: bool,
        rng: &mut R,
    ) -> Result<Resource, CatalogError>
    where
        R: Rng + Send + ?Sized,
    {
        if pick_any {
            self.pick_any(rng).await
        } else {
            self.get(name).await
        }
    }
}
