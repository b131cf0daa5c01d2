//! Repository-level filesystem operations.
//!
//! All `path` arguments are relative to the repository root.
//! Implementations must reject paths that escape the root boundary.

use crate::domain::AppError;

/// Port for low-level repository filesystem operations.
pub trait RepositoryFilesystem {
    /// Read a file as UTF-8 text.
    fn read_file(&self, path: &str) -> Result<String, AppError>;

    /// Write UTF-8 content to a file, creating parent directories as needed.
    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError>;

    /// Append UTF-8 content to a file, creating it if absent.
    fn append_file(&self, path: &str, content: &str) -> Result<(), AppError>;

    /// Remove a file. No-op if the file does not exist.
    fn remove_file(&self, path: &str) -> Result<(), AppError>;

    /// List file names directly inside a directory, sorted. Empty if absent.
    fn list_dir(&self, path: &str) -> Result<Vec<String>, AppError>;

    /// Check whether a file or directory exists.
    fn file_exists(&self, path: &str) -> bool;

    /// Create a directory and all parent directories.
    fn create_dir_all(&self, path: &str) -> Result<(), AppError>;
}
