//! File-backed [`TokenStore`].
//!
//! The durable analog of a browser's local storage: one small file holding
//! the bearer token, created on login and removed on logout or rejection.

use std::io::ErrorKind;
use std::path::PathBuf;

use emporium_app::{TokenStore, TokenStoreError};

/// Persists the admin token in a plain file.
#[derive(Debug)]
pub struct FileTokenStore {
    path: PathBuf,
}

impl FileTokenStore {
    /// Create a store backed by `path`. The file is not touched until the
    /// first load or save.
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl TokenStore for FileTokenStore {
    fn load(&self) -> Result<Option<String>, TokenStoreError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => {
                let token = contents.trim();
                Ok((!token.is_empty()).then(|| token.to_owned()))
            }
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(TokenStoreError::Io(err)),
        }
    }

    fn save(&self, token: &str) -> Result<(), TokenStoreError> {
        std::fs::write(&self.path, token)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(TokenStoreError::Io(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("emporium-token-test-{name}-{}", uuid::Uuid::new_v4()))
    }

    #[test]
    fn test_load_missing_file_is_logged_out() {
        let store = FileTokenStore::new(temp_path("missing"));
        assert_eq!(store.load().expect("load"), None);
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let path = temp_path("roundtrip");
        let store = FileTokenStore::new(path.clone());

        store.save("tok-1").expect("save");
        assert_eq!(store.load().expect("load"), Some("tok-1".into()));

        std::fs::remove_file(path).expect("cleanup");
    }

    #[test]
    fn test_clear_is_idempotent() {
        let store = FileTokenStore::new(temp_path("clear"));
        store.save("tok-1").expect("save");
        store.clear().expect("first clear");
        store.clear().expect("second clear");
        assert_eq!(store.load().expect("load"), None);
    }

    #[test]
    fn test_whitespace_only_file_is_logged_out() {
        let path = temp_path("blank");
        std::fs::write(&path, "  \n").expect("write");
        let store = FileTokenStore::new(path.clone());
        assert_eq!(store.load().expect("load"), None);
        std::fs::remove_file(path).expect("cleanup");
    }
}
