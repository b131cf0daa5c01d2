//! API Facade for the application.
//!
//! Each function builds a context rooted at the given directory and runs one
//! command against the real filesystem, template engine and `gh`.

use std::path::PathBuf;

use crate::adapters::{
    FilesystemStore, GitHubCommandAdapter, MinijinjaTemplateRenderer, RetryPolicy, RetryingGitHub,
};
use crate::app::{
    AppContext,
    commands::{check, chooser, links, setup, sync, templates},
};
use crate::domain::IssueLink;

pub use crate::app::commands::check::CheckOutcome;
pub use crate::app::commands::chooser::{ChooserOptions, ChooserOutcome};
pub use crate::app::commands::links::LinksOutcome;
pub use crate::app::commands::setup::SetupOutcome;
pub use crate::app::commands::sync::SyncOutcome;
pub use crate::app::commands::templates::{TemplatesOptions, TemplatesOutcome};
pub use crate::domain::AppError;

type RepoContext = AppContext<FilesystemStore, MinijinjaTemplateRenderer>;

/// Create an `AppContext` rooted at `path`, reading `issuekit.toml` if present.
fn create_context(path: impl Into<PathBuf>) -> Result<RepoContext, AppError> {
    let repository = FilesystemStore::new(path.into());
    let renderer = MinijinjaTemplateRenderer::embedded()?;
    AppContext::load(repository, renderer)
}

/// Generate task and discussion templates for every milestone.
pub fn templates_at(
    path: impl Into<PathBuf>,
    options: TemplatesOptions,
) -> Result<TemplatesOutcome, AppError> {
    let ctx = create_context(path)?;
    templates::execute(&ctx, options)
}

/// Build the issue chooser configuration from the link list.
pub fn chooser_at(
    path: impl Into<PathBuf>,
    options: ChooserOptions,
) -> Result<ChooserOutcome, AppError> {
    let ctx = create_context(path)?;
    chooser::execute(&ctx, options)
}

/// Regenerate the link list from the templates on disk.
pub fn links_generate_at(path: impl Into<PathBuf>) -> Result<LinksOutcome, AppError> {
    let ctx = create_context(path)?;
    links::generate(&ctx)
}

/// Append custom links to the link list, stopping at the first invalid one.
pub fn links_add_at(
    path: impl Into<PathBuf>,
    new_links: &[IssueLink],
) -> Result<Vec<IssueLink>, AppError> {
    let ctx = create_context(path)?;
    new_links.iter().map(|link| links::add(&ctx, link)).collect()
}

/// Create missing labels and milestones through `gh`.
///
/// `repo` is an `OWNER/REPO` override; `gh` otherwise infers the repository
/// from the working directory.
pub fn sync_at(path: impl Into<PathBuf>, repo: Option<String>) -> Result<SyncOutcome, AppError> {
    let path = path.into();
    let ctx = create_context(path.clone())?;
    let policy = RetryPolicy::from_config(&ctx.config().sync);
    let adapter = GitHubCommandAdapter::new(repo).with_workdir(path);
    let github = RetryingGitHub::new(adapter, policy);
    sync::execute(&ctx, &github)
}

/// Check generated templates for their required labels.
pub fn check_at(path: impl Into<PathBuf>) -> Result<CheckOutcome, AppError> {
    let ctx = create_context(path)?;
    check::execute(&ctx)
}

/// Run templates, links and chooser generation in order.
pub fn setup_at(path: impl Into<PathBuf>) -> Result<SetupOutcome, AppError> {
    let ctx = create_context(path)?;
    setup::execute(&ctx)
}
