//! Persistence adapter: a key-value storage plus the recipe collection key.
//!
//! [`Storage`] mirrors the Web Storage API (`getItem` / `setItem`) so the
//! same [`RecipeStore`] runs against `window.localStorage` in the browser,
//! a directory of JSON files on the command line, and a map in tests.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::collection::RecipeCollection;
use crate::error::{RecipeError, Result};

/// Storage key used when none is configured.
pub const DEFAULT_KEY: &str = "recipes";

/// String key-value storage.
pub trait Storage {
    /// Read the value stored under `key`, if any.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
}

/// In-memory storage, lost when dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Storage keeping each key in `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Storage rooted at `dir`. The directory is created on first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(RecipeError::Io { path, source }),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|source| RecipeError::Io {
            path: self.dir.clone(),
            source,
        })?;

        // Write beside the target, then rename over it.
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value).map_err(|source| RecipeError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| RecipeError::Io { path, source })
    }
}

/// Loads and saves the recipe collection under a single storage key.
#[derive(Debug, Clone)]
pub struct RecipeStore<S> {
    storage: S,
    key: String,
}

impl<S: Storage> RecipeStore<S> {
    /// Store using [`DEFAULT_KEY`].
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, DEFAULT_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Read the persisted collection.
    ///
    /// A missing key, unreadable storage or malformed value all yield an
    /// empty collection.
    pub fn load(&self) -> RecipeCollection {
        match self.storage.get_item(&self.key) {
            Ok(Some(json)) => {
                let collection = RecipeCollection::from_json_lossy(&json);
                log::info!("Loaded {} recipes from '{}'", collection.len(), self.key);
                collection
            }
            Ok(None) => {
                log::info!("No stored recipes under '{}', starting fresh", self.key);
                RecipeCollection::new()
            }
            Err(e) => {
                log::warn!("Could not read stored recipes: {}", e);
                RecipeCollection::new()
            }
        }
    }

    /// Overwrite the persisted value with the whole collection.
    pub fn save(&mut self, collection: &RecipeCollection) -> Result<()> {
        let json = collection.to_json()?;
        self.storage.set_item(&self.key, &json)?;
        log::info!("Saved {} recipes to '{}'", collection.len(), self.key);
        Ok(())
    }

    /// Raw stored value, for export.
    pub fn raw(&self) -> Result<Option<String>> {
        self.storage.get_item(&self.key)
    }
}
