//! Verify that generated templates carry their kind label.

use crate::app::AppContext;
use crate::domain::{
    AppError, CHOOSER_FILENAME, IssueTemplateRenderer, LabelCheck, check_labels,
};
use crate::ports::RepositoryFilesystem;

use super::links::read_header;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileCheck {
    Checked(LabelCheck),
    Unreadable(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckedFile {
    pub filename: String,
    pub result: FileCheck,
}

impl CheckedFile {
    pub fn is_problem(&self) -> bool {
        matches!(self.result, FileCheck::Checked(LabelCheck::Missing(_)) | FileCheck::Unreadable(_))
    }
}

#[derive(Debug, Clone, Default)]
pub struct CheckOutcome {
    pub template_dir: String,
    pub files: Vec<CheckedFile>,
}

impl CheckOutcome {
    pub fn problems(&self) -> usize {
        self.files.iter().filter(|f| f.is_problem()).count()
    }

    pub fn is_clean(&self) -> bool {
        self.problems() == 0
    }
}

/// Inspect every template in the template directory.
pub fn execute<F, R>(ctx: &AppContext<F, R>) -> Result<CheckOutcome, AppError>
where
    F: RepositoryFilesystem,
    R: IssueTemplateRenderer,
{
    let repository = ctx.repository();
    let template_dir = ctx.config().paths.template_dir.trim_end_matches('/').to_string();

    if !repository.file_exists(&template_dir) {
        return Err(AppError::MissingFile(template_dir));
    }

    let mut files = Vec::new();
    for filename in repository.list_dir(&template_dir)? {
        if !filename.ends_with(".yml") || filename == CHOOSER_FILENAME {
            continue;
        }
        let path = format!("{}/{}", template_dir, filename);
        let result = match read_header(repository, &path) {
            Ok(header) => FileCheck::Checked(check_labels(&filename, &header)),
            Err(err) => FileCheck::Unreadable(err.to_string()),
        };
        files.push(CheckedFile { filename, result });
    }

    Ok(CheckOutcome { template_dir, files })
}
