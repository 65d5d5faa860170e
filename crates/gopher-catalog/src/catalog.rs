//! Directory scan producing the set of available gophers.

use crate::error::CatalogError;
use crate::types::Resource;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Gopher images in a single directory.
///
/// Nothing is cached: every call to [`Catalog::list`] reads the directory
/// again, so files added or removed on disk show up on the next request.
#[derive(Debug, Clone)]
pub struct Catalog {
    directory: PathBuf,
}

impl Catalog {
    /// Create a catalog over `directory`.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// Directory this catalog reads from.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// List every image in the directory, sorted by name.
    ///
    /// The scan is not recursive. Entries without the image extension, and
    /// entries whose names are not valid UTF-8, are skipped.
    #[instrument(skip(self), fields(directory = %self.directory.display()))]
    pub async fn list(&self) -> Result<Vec<Resource>, CatalogError> {
        let mut entries = tokio::fs::read_dir(&self.directory)
            .await
            .map_err(|e| CatalogError::io(&self.directory, e))?;

        let mut resources = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| CatalogError::io(&self.directory, e))?
        {
            let Ok(filename) = entry.file_name().into_string() else {
                continue;
            };

            if let Some(resource) = Resource::from_filename(&self.directory, &filename) {
                resources.push(resource);
            }
        }

        // read_dir order is filesystem dependent
        resources.sort_by(|a, b| a.name.cmp(&b.name));

        debug!("Listed {} gophers", resources.len());
        Ok(resources)
    }
}
