//! Label and milestone synchronization against the hosting platform.

use std::fmt;

use crate::app::AppContext;
use crate::domain::sync::{label_color, label_description, milestone_description};
use crate::domain::{AppError, IssueTemplateRenderer, MalformedLine, SyncPlan};
use crate::ports::{GitHubPort, RepositoryFilesystem};

use super::load_categories;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncItemKind {
    Label,
    Milestone,
}

impl fmt::Display for SyncItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SyncItemKind::Label => write!(f, "label"),
            SyncItemKind::Milestone => write!(f, "milestone"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncFailure {
    pub kind: SyncItemKind,
    pub name: String,
    pub reason: String,
}

#[derive(Debug, Clone, Default)]
pub struct SyncOutcome {
    pub plan: SyncPlan,
    pub skipped_lines: Vec<MalformedLine>,
    pub labels_created: Vec<String>,
    pub milestones_created: Vec<String>,
    pub failures: Vec<SyncFailure>,
}

/// Create every missing label and milestone named by the category list.
///
/// Essential labels go first, then category labels, then milestones. A
/// failed creation is recorded and the run moves on; failing to list what
/// already exists aborts before anything is created.
pub fn execute<F, R, G>(ctx: &AppContext<F, R>, github: &G) -> Result<SyncOutcome, AppError>
where
    F: RepositoryFilesystem,
    R: IssueTemplateRenderer,
    G: GitHubPort,
{
    let config = ctx.config();
    let loaded = load_categories(ctx.repository(), &config.paths.categories)?;

    let existing_labels = github.list_labels()?;
    let existing_milestones = github.list_milestones()?;
    let plan = SyncPlan::build(
        &config.templates.base_label,
        &loaded.entries,
        &existing_labels,
        &existing_milestones,
    );

    let mut labels_created = Vec::new();
    let mut milestones_created = Vec::new();
    let mut failures = Vec::new();

    for item in plan.essential_labels.iter().chain(&plan.category_labels) {
        if item.exists {
            continue;
        }
        let name = item.name.as_str();
        match github.create_label(name, label_color(name), &label_description(name)) {
            Ok(()) => labels_created.push(item.name.clone()),
            Err(err) => failures.push(SyncFailure {
                kind: SyncItemKind::Label,
                name: item.name.clone(),
                reason: err.to_string(),
            }),
        }
    }

    for item in plan.milestones.iter().filter(|item| !item.exists) {
        match github.create_milestone(&item.name, &milestone_description(&item.name)) {
            Ok(()) => milestones_created.push(item.name.clone()),
            Err(err) => failures.push(SyncFailure {
                kind: SyncItemKind::Milestone,
                name: item.name.clone(),
                reason: err.to_string(),
            }),
        }
    }

    Ok(SyncOutcome {
        plan,
        skipped_lines: loaded.skipped,
        labels_created,
        milestones_created,
        failures,
    })
}
