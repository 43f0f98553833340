//! Bearer-token caching as an injected capability.
//!
//! The API client reads whatever token the store currently holds and attaches
//! it as an `Authorization: Bearer` header; commands that complete a login
//! write the fresh token back through the same trait.

use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::error::{CoreError, CoreResult};

pub trait CredentialStore: Send + Sync {
    /// ## Summary
    /// Returns the cached token, if any.
    ///
    /// ## Errors
    /// Returns an error if the backing storage cannot be read.
    fn token(&self) -> CoreResult<Option<String>>;

    /// ## Summary
    /// Replaces the cached token.
    ///
    /// ## Errors
    /// Returns an error if the backing storage cannot be written.
    fn store(&self, token: &str) -> CoreResult<()>;

    /// ## Summary
    /// Drops the cached token. Clearing an empty store is not an error.
    ///
    /// ## Errors
    /// Returns an error if the backing storage cannot be updated.
    fn clear(&self) -> CoreResult<()>;
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryCredentialStore {
    token: Mutex<Option<String>>,
}

impl MemoryCredentialStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Option<String>> {
        match self.token.lock() {
            Ok(guard) => guard,
            Err(poisoned) => {
                self.token.clear_poison();
                poisoned.into_inner()
            }
        }
    }
}

impl CredentialStore for MemoryCredentialStore {
    fn token(&self) -> CoreResult<Option<String>> {
        Ok(self.lock().clone())
    }

    fn store(&self, token: &str) -> CoreResult<()> {
        *self.lock() = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> CoreResult<()> {
        *self.lock() = None;
        Ok(())
    }
}

/// Token cached in a file between invocations.
#[derive(Debug)]
pub struct FileCredentialStore {
    path: PathBuf,
}

impl FileCredentialStore {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl CredentialStore for FileCredentialStore {
    fn token(&self) -> CoreResult<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                if token.is_empty() {
                    Ok(None)
                } else {
                    Ok(Some(token.to_string()))
                }
            }
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(CoreError::CredentialStore(format!(
                "failed to read {}: {error}",
                self.path.display()
            ))),
        }
    }

    fn store(&self, token: &str) -> CoreResult<()> {
        std::fs::write(&self.path, token).map_err(|error| {
            CoreError::CredentialStore(format!(
                "failed to write {}: {error}",
                self.path.display()
            ))
        })?;
        tracing::debug!(path = %self.path.display(), "Token cached");
        Ok(())
    }

    fn clear(&self) -> CoreResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(()),
            Err(error) => Err(CoreError::CredentialStore(format!(
                "failed to remove {}: {error}",
                self.path.display()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_token_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("shiftbook-test-{}-{name}", std::process::id()))
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryCredentialStore::new();
        assert_eq!(store.token().expect("readable"), None);

        store.store("abc123").expect("writable");
        assert_eq!(store.token().expect("readable").as_deref(), Some("abc123"));

        store.clear().expect("clearable");
        assert_eq!(store.token().expect("readable"), None);
    }

    #[test]
    fn test_file_store_round_trip() {
        let path = temp_token_path("round-trip");
        let store = FileCredentialStore::new(path.clone());

        assert_eq!(store.token().expect("readable"), None);

        store.store("token-value").expect("writable");
        assert_eq!(
            store.token().expect("readable").as_deref(),
            Some("token-value")
        );

        store.clear().expect("clearable");
        assert_eq!(store.token().expect("readable"), None);

        // second clear is a no-op
        store.clear().expect("clearable");
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_file_store_ignores_surrounding_whitespace() {
        let path = temp_token_path("whitespace");
        std::fs::write(&path, "  token-value\n").expect("writable");
        let store = FileCredentialStore::new(path.clone());
        assert_eq!(
            store.token().expect("readable").as_deref(),
            Some("token-value")
        );
        let _ = std::fs::remove_file(path);
    }
}
