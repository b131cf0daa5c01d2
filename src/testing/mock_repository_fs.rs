//! Test double for `RepositoryFilesystem`.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::RepositoryFilesystem;

/// In-memory implementation of `RepositoryFilesystem` for unit tests.
///
/// Clones share the same file map, so tests can keep a handle for
/// assertions after passing the store to production code.
#[derive(Clone, Debug, Default)]
pub struct MockRepositoryFs {
    files: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MockRepositoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a file into the in-memory store.
    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.files.lock().unwrap().insert(path.to_string(), content.to_string());
        self
    }

    pub fn get(&self, path: &str) -> Option<String> {
        self.files.lock().unwrap().get(path).cloned()
    }

    pub fn paths(&self) -> Vec<String> {
        self.files.lock().unwrap().keys().cloned().collect()
    }
}

fn dir_prefix(path: &str) -> String {
    if path.ends_with('/') { path.to_string() } else { format!("{}/", path) }
}

impl RepositoryFilesystem for MockRepositoryFs {
    fn read_file(&self, path: &str) -> Result<String, AppError> {
        self.get(path).ok_or_else(|| AppError::MissingFile(path.to_string()))
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        self.files.lock().unwrap().insert(path.to_string(), content.to_string());
        Ok(())
    }

    fn append_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        self.files.lock().unwrap().entry(path.to_string()).or_default().push_str(content);
        Ok(())
    }

    fn remove_file(&self, path: &str) -> Result<(), AppError> {
        self.files.lock().unwrap().remove(path);
        Ok(())
    }

    fn list_dir(&self, path: &str) -> Result<Vec<String>, AppError> {
        let prefix = dir_prefix(path);
        Ok(self
            .files
            .lock()
            .unwrap()
            .keys()
            .filter_map(|key| key.strip_prefix(&prefix))
            .filter(|name| !name.contains('/'))
            .map(String::from)
            .collect())
    }

    fn file_exists(&self, path: &str) -> bool {
        let files = self.files.lock().unwrap();
        let prefix = dir_prefix(path);
        files.contains_key(path) || files.keys().any(|k| k.starts_with(&prefix))
    }

    fn create_dir_all(&self, _path: &str) -> Result<(), AppError> {
        Ok(())
    }
}
