//! Output directory sink for generated files.

use std::fmt;

use crate::domain::{AppError, RenderedTemplate};
use crate::ports::RepositoryFilesystem;

/// What to do when the target file already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WritePolicy {
    /// Replace existing content. Generated files are rebuilt from source.
    Overwrite,
    /// Leave existing files untouched to preserve hand edits.
    NoClobber,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Created,
    Overwritten,
    Skipped,
}

impl fmt::Display for WriteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteOutcome::Created => f.write_str("created"),
            WriteOutcome::Overwritten => f.write_str("overwritten"),
            WriteOutcome::Skipped => f.write_str("skipped (already exists)"),
        }
    }
}

/// Writes rendered files into one directory of the repository.
pub struct TemplateSink<'a, F: RepositoryFilesystem> {
    repository: &'a F,
    dir: String,
    policy: WritePolicy,
}

impl<'a, F: RepositoryFilesystem> TemplateSink<'a, F> {
    /// Create a sink, making sure the directory exists.
    pub fn open(repository: &'a F, dir: &str, policy: WritePolicy) -> Result<Self, AppError> {
        let dir = dir.trim_end_matches('/').to_string();
        repository.create_dir_all(&dir)?;
        Ok(Self { repository, dir, policy })
    }

    pub fn path_of(&self, filename: &str) -> String {
        format!("{}/{}", self.dir, filename)
    }

    pub fn write(&self, rendered: &RenderedTemplate) -> Result<WriteOutcome, AppError> {
        let path = self.path_of(&rendered.filename);
        let existed = self.repository.file_exists(&path);

        if existed && self.policy == WritePolicy::NoClobber {
            return Ok(WriteOutcome::Skipped);
        }

        self.repository.write_file(&path, &rendered.content)?;
        Ok(if existed { WriteOutcome::Overwritten } else { WriteOutcome::Created })
    }
}
