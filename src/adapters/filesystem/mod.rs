//! Filesystem adapter for the `RepositoryFilesystem` port.

mod repository_filesystem;

use std::path::{Component, Path, PathBuf};

use crate::domain::AppError;

/// Filesystem-backed store rooted at a repository directory.
#[derive(Debug, Clone)]
pub struct FilesystemStore {
    root: PathBuf,
}

impl FilesystemStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Join a repository-relative path onto the root.
    ///
    /// Paths come from `issuekit.toml` and the command line, so absolute
    /// paths and `..` segments that climb above the root are refused.
    pub(crate) fn full_path(&self, path: &str) -> Result<PathBuf, AppError> {
        let traversal = || AppError::PathTraversal(path.to_string());
        let relative = Path::new(path);
        if relative.has_root() || relative.is_absolute() {
            return Err(traversal());
        }

        let mut clean = PathBuf::new();
        let mut depth = 0usize;
        for component in relative.components() {
            match component {
                Component::Normal(part) => {
                    clean.push(part);
                    depth += 1;
                }
                Component::CurDir => {}
                Component::ParentDir if depth == 0 => return Err(traversal()),
                Component::ParentDir => {
                    clean.pop();
                    depth -= 1;
                }
                Component::RootDir | Component::Prefix(_) => return Err(traversal()),
            }
        }
        Ok(self.root.join(clean))
    }
}
