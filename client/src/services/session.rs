//! # Session Store
//!
//! Holds the opaque authentication token issued by `POST /login`.
//!
//! A [`Session`] is created once per process, initialised on startup from a
//! [`TokenStore`], and shared by every screen through [`crate::app::AppState`].
//! Screens never touch storage themselves.
//!
//! ## Lifecycle
//!
//! ```text
//! startup ──init()──► token loaded (or none)
//! login   ──set()───► token stored in memory and persisted
//! logout  ──clear()─► token removed from memory and storage
//! ```
//!
//! Presence of a token means the user is authenticated. The token is never
//! inspected client-side; an expired one is only discovered when the backend
//! rejects it.

use parking_lot::RwLock;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::error::{AppError, Result};

/// Well-known key the token is persisted under.
pub const TOKEN_KEY: &str = "userToken";

/// Key/value persistence for session data.
pub trait TokenStore: Send + Sync {
    fn load(&self, key: &str) -> Result<Option<String>>;
    fn save(&self, key: &str, value: &str) -> Result<()>;
    fn remove(&self, key: &str) -> Result<()>;
}

/// JSON object file, e.g. `{"userToken": "eyJ..."}`.
///
/// A missing file reads as empty. Parent directories are created on first save.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>> {
        match fs::read_to_string(&self.path) {
            Ok(content) if content.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(content) => serde_json::from_str(&content).map_err(|e| {
                AppError::Session(format!("corrupt session file {}: {e}", self.path.display()))
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }

    fn write_all(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(entries)
            .map_err(|e| AppError::Session(e.to_string()))?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.read_all()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_all(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.read_all()?;
        if entries.remove(key).is_some() {
            self.write_all(&entries)?;
        }
        Ok(())
    }
}

/// In-memory store for tests and throwaway sessions.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    entries: RwLock<BTreeMap<String, String>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a token under [`TOKEN_KEY`].
    pub fn with_token(token: &str) -> Self {
        let store = Self::default();
        store.entries.write().insert(TOKEN_KEY.to_string(), token.to_string());
        store
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<()> {
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.write().remove(key);
        Ok(())
    }
}

/// Process-wide session.
///
/// Reads are served from memory; writes go through to the store first so that
/// memory never claims a token storage does not have.
pub struct Session {
    store: Box<dyn TokenStore>,
    token: RwLock<Option<String>>,
}

impl Session {
    /// Create an uninitialised session (no token until [`Session::init`]).
    pub fn new(store: impl TokenStore + 'static) -> Self {
        Self {
            store: Box::new(store),
            token: RwLock::new(None),
        }
    }

    /// Session with a file-backed store.
    pub fn with_file(path: impl Into<PathBuf>) -> Self {
        Self::new(FileTokenStore::new(path))
    }

    /// Ephemeral session, optionally already logged in.
    pub fn in_memory(token: Option<&str>) -> Self {
        let session = match token {
            Some(token) => Self::new(MemoryTokenStore::with_token(token)),
            None => Self::new(MemoryTokenStore::new()),
        };
        *session.token.write() = token.map(str::to_string);
        session
    }

    /// Startup check: load the persisted token into memory.
    ///
    /// Returns whether a token was found. A blank stored value counts as none.
    pub fn init(&self) -> Result<bool> {
        let loaded = self
            .store
            .load(TOKEN_KEY)?
            .filter(|token| !token.trim().is_empty());
        let found = loaded.is_some();
        *self.token.write() = loaded;
        tracing::info!(authenticated = found, "Session initialized");
        Ok(found)
    }

    pub fn token(&self) -> Option<String> {
        self.token.read().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.read().is_some()
    }

    /// Persist and adopt a freshly issued token.
    pub fn set(&self, token: &str) -> Result<()> {
        self.store.save(TOKEN_KEY, token)?;
        *self.token.write() = Some(token.to_string());
        tracing::info!("Session token stored");
        Ok(())
    }

    /// Forget the token (logout).
    pub fn clear(&self) -> Result<()> {
        self.store.remove(TOKEN_KEY)?;
        *self.token.write() = None;
        tracing::info!("Session cleared");
        Ok(())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the token itself
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
