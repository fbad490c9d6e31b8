//! Bundled asset loading

use crate::error::{FetchError, FetchResult};
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Source of local payloads used when the network is unavailable
pub trait AssetLoader: Send + Sync {
    /// Read the asset called `name` as text
    fn load(&self, name: &str) -> FetchResult<String>;
}

/// Loads assets from files inside a single directory
#[derive(Debug, Clone)]
pub struct DirAssetLoader {
    root: PathBuf,
}

impl DirAssetLoader {
    /// Create a loader rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Directory assets are read from
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve `name` inside the root, rejecting anything but a plain file name
    pub fn resolve(&self, name: &str) -> FetchResult<PathBuf> {
        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(file)), None) => Ok(self.root.join(file)),
            _ => Err(FetchError::InvalidAssetName(name.to_string())),
        }
    }
}

impl AssetLoader for DirAssetLoader {
    fn load(&self, name: &str) -> FetchResult<String> {
        let path = self.resolve(name)?;
        debug!(path = %path.display(), "Loading asset");
        std::fs::read_to_string(&path).map_err(|source| FetchError::Asset { path, source })
    }
}
