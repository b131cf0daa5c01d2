//! Issue chooser dropdown configuration from the link list.

use crate::app::AppContext;
use crate::app::sink::{TemplateSink, WriteOutcome, WritePolicy};
use crate::domain::{
    AppError, CHOOSER_FILENAME, ChooserConfig, IssueLink, IssueTemplateRenderer, MalformedLine,
    RenderedTemplate, parse_issue_links,
};
use crate::ports::RepositoryFilesystem;

#[derive(Debug, Clone, Copy, Default)]
pub struct ChooserOptions {
    /// Replace an existing `config.yml`.
    pub force: bool,
}

#[derive(Debug, Clone)]
pub struct ChooserOutcome {
    pub path: String,
    pub links: Vec<IssueLink>,
    pub skipped_lines: Vec<MalformedLine>,
    pub outcome: WriteOutcome,
}

/// Build `config.yml` from `issue_links.txt`.
///
/// An existing `config.yml` is left alone unless `force` is set.
pub fn execute<F, R>(
    ctx: &AppContext<F, R>,
    options: ChooserOptions,
) -> Result<ChooserOutcome, AppError>
where
    F: RepositoryFilesystem,
    R: IssueTemplateRenderer,
{
    let config = ctx.config();
    let repository = ctx.repository();
    let links_path = &config.paths.issue_links;

    if !repository.file_exists(links_path) {
        return Err(AppError::MissingFile(links_path.clone()));
    }
    let content = repository.read_file(links_path)?;

    let mut links = Vec::new();
    let mut skipped_lines = Vec::new();
    for result in parse_issue_links(&content) {
        match result {
            Ok(link) => links.push(link),
            Err(line) => skipped_lines.push(line),
        }
    }

    let chooser = ChooserConfig::from_links(&links, config.templates.blank_issues_enabled);
    let rendered =
        RenderedTemplate { filename: CHOOSER_FILENAME.to_string(), content: chooser.to_yaml()? };

    let policy = if options.force { WritePolicy::Overwrite } else { WritePolicy::NoClobber };
    let sink = TemplateSink::open(repository, &config.paths.template_dir, policy)?;
    let outcome = sink.write(&rendered)?;

    Ok(ChooserOutcome { path: sink.path_of(CHOOSER_FILENAME), links, skipped_lines, outcome })
}
