//! Content loading
//!
//! The world only needs opaque handles to loaded assets; decoding them is
//! the job of whoever consumes the handle. Two sources are provided: a
//! file-backed [`ContentManager`] and an in-memory [`MemoryContent`].

use crate::foundation::collections::{HandleMap, TypedHandle};
use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Raw bytes of a loaded asset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAsset {
    /// Name the asset was requested under
    pub name: String,
    /// File contents
    pub bytes: Vec<u8>,
}

/// Opaque handle to a loaded asset
pub type AssetHandle = TypedHandle<RawAsset>;

/// Content loading errors
#[derive(Error, Debug)]
pub enum ContentError {
    /// No asset with that name exists
    #[error("Asset not found: {0}")]
    NotFound(String),

    /// Name is absolute or climbs out of the content root
    #[error("Asset name escapes the content root: {0}")]
    InvalidName(String),

    /// IO error during asset loading
    #[error("IO error while loading '{name}': {source}")]
    Io {
        /// Requested asset
        name: String,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },
}

/// Anything that can resolve asset names to handles
pub trait ContentSource {
    /// Load (or return the cached handle of) the named asset
    fn load(&mut self, name: &str) -> Result<AssetHandle, ContentError>;

    /// Access a loaded asset
    fn get(&self, handle: AssetHandle) -> Option<&RawAsset>;
}

/// Cache shared by both content sources
#[derive(Default)]
struct AssetCache {
    assets: HandleMap<RawAsset>,
    by_name: HashMap<String, AssetHandle>,
}

impl AssetCache {
    fn cached(&self, name: &str) -> Option<AssetHandle> {
        self.by_name.get(name).copied()
    }

    fn insert(&mut self, name: &str, bytes: Vec<u8>) -> AssetHandle {
        let key = self.assets.insert(RawAsset {
            name: name.to_string(),
            bytes,
        });
        let handle = AssetHandle::new(key);
        self.by_name.insert(name.to_string(), handle);
        handle
    }

    fn get(&self, handle: AssetHandle) -> Option<&RawAsset> {
        self.assets.get(handle.key())
    }
}

/// Loads assets from files below a root directory
pub struct ContentManager {
    root: PathBuf,
    cache: AssetCache,
}

impl ContentManager {
    /// Create a manager rooted at `root`
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            cache: AssetCache::default(),
        }
    }

    /// Root directory assets are resolved against
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolve `name` below the root; only plain relative segments are allowed
    fn resolve(&self, name: &str) -> Result<PathBuf, ContentError> {
        let relative = Path::new(name);
        let plain = relative
            .components()
            .all(|component| matches!(component, Component::Normal(_) | Component::CurDir));
        if name.is_empty() || !plain {
            return Err(ContentError::InvalidName(name.to_string()));
        }
        Ok(self.root.join(relative))
    }
}

impl ContentSource for ContentManager {
    fn load(&mut self, name: &str) -> Result<AssetHandle, ContentError> {
        if let Some(handle) = self.cache.cached(name) {
            return Ok(handle);
        }

        let path = self.resolve(name)?;
        if !path.is_file() {
            return Err(ContentError::NotFound(name.to_string()));
        }
        let bytes = std::fs::read(&path).map_err(|source| ContentError::Io {
            name: name.to_string(),
            source,
        })?;

        log::debug!("Loaded '{}' ({} bytes)", path.display(), bytes.len());
        Ok(self.cache.insert(name, bytes))
    }

    fn get(&self, handle: AssetHandle) -> Option<&RawAsset> {
        self.cache.get(handle)
    }
}

/// In-memory content, for tools and tests
#[derive(Default)]
pub struct MemoryContent {
    sources: HashMap<String, Vec<u8>>,
    cache: AssetCache,
    loads: usize,
}

impl MemoryContent {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Make an asset available under `name`
    pub fn with_asset(mut self, name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        self.sources.insert(name.into(), bytes.into());
        self
    }

    /// Number of cache misses served so far
    pub fn load_count(&self) -> usize {
        self.loads
    }
}

impl ContentSource for MemoryContent {
    fn load(&mut self, name: &str) -> Result<AssetHandle, ContentError> {
        if let Some(handle) = self.cache.cached(name) {
            return Ok(handle);
        }
        let bytes = self
            .sources
            .get(name)
            .cloned()
            .ok_or_else(|| ContentError::NotFound(name.to_string()))?;
        self.loads += 1;
        Ok(self.cache.insert(name, bytes))
    }

    fn get(&self, handle: AssetHandle) -> Option<&RawAsset> {
        self.cache.get(handle)
    }
}
