//! Bearer token persistence

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File-backed store for the opaque bearer token
///
/// The API client never holds a token itself; callers pass one per call.
/// This store only persists the string between application runs, e.g. across
/// restarts of a till or a waiter handheld.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Create a token store at `base_path/filename`
    pub fn new(base_path: impl Into<PathBuf>, filename: &str) -> Self {
        let path = base_path.into().join(filename);
        Self { path }
    }

    fn ensure_dir(&self) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        Ok(())
    }

    /// Persist the token, replacing any previous one
    pub fn save(&self, token: &str) -> io::Result<()> {
        self.ensure_dir()?;
        fs::write(&self.path, token)
    }

    /// Load the stored token, if any
    pub fn load(&self) -> Option<String> {
        if !self.path.exists() {
            return None;
        }
        let token = fs::read_to_string(&self.path).ok()?;
        let token = token.trim();
        if token.is_empty() {
            None
        } else {
            Some(token.to_string())
        }
    }

    /// Check whether a token is stored
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Remove the stored token
    pub fn clear(&self) -> io::Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }

    /// Get the backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }
}
