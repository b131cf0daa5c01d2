//! Issue template generation from the category list.

use std::collections::HashMap;

use crate::app::AppContext;
use crate::app::sink::{TemplateSink, WriteOutcome, WritePolicy};
use crate::domain::{
    AppError, IssueTemplateRenderer, MalformedLine, MilestoneGroup, MilestoneGroups, TemplateKind,
    render_group, sanitize_milestone,
};
use crate::ports::RepositoryFilesystem;

use super::load_categories;

#[derive(Debug, Clone, Copy, Default)]
pub struct TemplatesOptions {
    /// Remove previously generated templates before writing.
    pub clean: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenTemplate {
    pub filename: String,
    pub outcome: WriteOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFailure {
    pub filename: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct TemplatesOutcome {
    pub template_dir: String,
    pub entries_loaded: usize,
    pub skipped_lines: Vec<MalformedLine>,
    pub milestones: Vec<MilestoneGroup>,
    pub removed: Vec<String>,
    pub written: Vec<WrittenTemplate>,
    pub failures: Vec<TemplateFailure>,
}

/// Load categories, group them by milestone, and write one task and one
/// discussion template per milestone.
///
/// A rendering failure only skips that file; I/O failures abort the run.
/// A milestone whose filenames collide with an earlier milestone is skipped
/// and reported as a failure.
pub fn execute<F, R>(
    ctx: &AppContext<F, R>,
    options: TemplatesOptions,
) -> Result<TemplatesOutcome, AppError>
where
    F: RepositoryFilesystem,
    R: IssueTemplateRenderer,
{
    let config = ctx.config();
    let repository = ctx.repository();
    let template_dir = config.paths.template_dir.trim_end_matches('/').to_string();

    let loaded = load_categories(repository, &config.paths.categories)?;
    let groups = MilestoneGroups::from_entries(&loaded.entries);
    let all_labels = groups.all_labels();

    let removed = if options.clean { remove_generated(repository, &template_dir)? } else { Vec::new() };

    let sink = TemplateSink::open(repository, &template_dir, WritePolicy::Overwrite)?;
    let mut written = Vec::new();
    let mut failures = Vec::new();

    // sanitized stem -> milestone that claimed it first
    let mut claimed: HashMap<String, &str> = HashMap::new();

    for group in groups.iter() {
        let stem = sanitize_milestone(&group.milestone);
        if let Some(&first) = claimed.get(&stem) {
            for kind in TemplateKind::ALL {
                failures.push(TemplateFailure {
                    filename: kind.filename_for(&group.milestone),
                    reason: format!(
                        "milestone '{}' maps to the same file as milestone '{}'",
                        group.milestone, first
                    ),
                });
            }
            continue;
        }
        claimed.insert(stem, &group.milestone);

        for kind in TemplateKind::ALL {
            match render_group(ctx.renderer(), group, kind, &all_labels, &config.templates) {
                Ok(rendered) => {
                    let outcome = sink.write(&rendered)?;
                    written.push(WrittenTemplate { filename: rendered.filename, outcome });
                }
                Err(err) => failures.push(TemplateFailure {
                    filename: kind.filename_for(&group.milestone),
                    reason: err.to_string(),
                }),
            }
        }
    }

    Ok(TemplatesOutcome {
        template_dir,
        entries_loaded: loaded.entries.len(),
        skipped_lines: loaded.skipped,
        milestones: groups.iter().cloned().collect(),
        removed,
        written,
        failures,
    })
}

/// Delete `task_*.yml` and `discussion_*.yml` from the template directory.
fn remove_generated(
    repository: &impl RepositoryFilesystem,
    template_dir: &str,
) -> Result<Vec<String>, AppError> {
    let mut removed = Vec::new();
    for name in repository.list_dir(template_dir)? {
        if name.ends_with(".yml") && TemplateKind::from_filename(&name).is_some() {
            repository.remove_file(&format!("{}/{}", template_dir, name))?;
            removed.push(name);
        }
    }
    Ok(removed)
}
