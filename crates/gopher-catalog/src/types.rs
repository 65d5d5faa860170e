//! Catalog data types.

use crate::error::CatalogError;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// File extension recognized as a gopher image.
pub const IMAGE_EXTENSION: &str = "png";

/// One selectable image on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resource {
    /// File name without its extension.
    pub name: String,
    /// File name as listed in the directory.
    pub filename: String,
    /// Extension without the leading dot.
    pub media_type: String,
    /// Path to open the file with.
    pub path: PathBuf,
}

impl Resource {
    /// Build a resource from a directory entry name.
    ///
    /// Returns `None` for anything without the recognized image extension.
    pub fn from_filename(directory: &Path, filename: &str) -> Option<Self> {
        let suffix = format!(".{}", IMAGE_EXTENSION);
        let name = filename.strip_suffix(suffix.as_str())?;

        Some(Self {
            name: name.to_string(),
            filename: filename.to_string(),
            media_type: IMAGE_EXTENSION.to_string(),
            path: directory.join(filename),
        })
    }

    /// Open the image for reading. The handle closes when dropped.
    pub async fn open(&self) -> Result<tokio::fs::File, CatalogError> {
        tokio::fs::File::open(&self.path)
            .await
            .map_err(|e| CatalogError::io(&self.path, e))
    }
}
