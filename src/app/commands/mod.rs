pub mod check;
pub mod chooser;
pub mod links;
pub mod setup;
pub mod sync;
pub mod templates;

use crate::domain::{AppError, CategoryEntry, MalformedLine, parse_categories};
use crate::ports::RepositoryFilesystem;

/// Category entries in file order plus the lines that were skipped.
#[derive(Debug, Clone, Default)]
pub struct LoadedCategories {
    pub entries: Vec<CategoryEntry>,
    pub skipped: Vec<MalformedLine>,
}

/// Read and parse the category list. A missing file is fatal.
pub fn load_categories(
    repository: &impl RepositoryFilesystem,
    path: &str,
) -> Result<LoadedCategories, AppError> {
    if !repository.file_exists(path) {
        return Err(AppError::MissingFile(path.to_string()));
    }
    let content = repository.read_file(path)?;

    let mut loaded = LoadedCategories::default();
    for result in parse_categories(&content) {
        match result {
            Ok(entry) => loaded.entries.push(entry),
            Err(line) => loaded.skipped.push(line),
        }
    }
    Ok(loaded)
}
