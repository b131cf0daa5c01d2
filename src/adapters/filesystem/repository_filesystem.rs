//! `RepositoryFilesystem` implementation for `FilesystemStore`.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};

use crate::domain::AppError;
use crate::ports::RepositoryFilesystem;

use super::FilesystemStore;

impl RepositoryFilesystem for FilesystemStore {
    fn read_file(&self, path: &str) -> Result<String, AppError> {
        let full_path = self.full_path(path)?;
        fs::read_to_string(&full_path).map_err(|err| match err.kind() {
            ErrorKind::NotFound => AppError::MissingFile(path.to_string()),
            _ => AppError::from(err),
        })
    }

    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        let full_path = self.full_path(path)?;
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(AppError::from)?;
        }
        fs::write(full_path, content).map_err(AppError::from)
    }

    fn append_file(&self, path: &str, content: &str) -> Result<(), AppError> {
        let full_path = self.full_path(path)?;
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(AppError::from)?;
        }
        let mut file = OpenOptions::new().create(true).append(true).open(full_path)?;
        file.write_all(content.as_bytes())?;
        Ok(())
    }

    fn remove_file(&self, path: &str) -> Result<(), AppError> {
        let full_path = self.full_path(path)?;
        if full_path.exists() {
            fs::remove_file(full_path).map_err(AppError::from)?;
        }
        Ok(())
    }

    fn list_dir(&self, path: &str) -> Result<Vec<String>, AppError> {
        let full_path = self.full_path(path)?;
        if !full_path.is_dir() {
            return Ok(Vec::new());
        }
        let mut names = Vec::new();
        for entry in fs::read_dir(full_path)? {
            let entry = entry?;
            if entry.file_type()?.is_file() {
                names.push(entry.file_name().to_string_lossy().to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    fn file_exists(&self, path: &str) -> bool {
        self.full_path(path).is_ok_and(|full_path| full_path.exists())
    }

    fn create_dir_all(&self, path: &str) -> Result<(), AppError> {
        let full_path = self.full_path(path)?;
        fs::create_dir_all(full_path).map_err(AppError::from)
    }
}
