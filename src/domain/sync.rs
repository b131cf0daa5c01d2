//! Label and milestone synchronization planning.

use std::collections::HashSet;

use sha2::{Digest, Sha256};

use super::category::CategoryEntry;
use super::template_kind::TemplateKind;

/// Label attached to templates that are neither tasks nor discussions.
pub const GENERAL_LABEL: &str = "general";

const LABEL_PALETTE: [&str; 24] = [
    "ff0000", "00ff00", "0000ff", "ffff00", "ff00ff", "00ffff", "ffa500", "800080", "ffc0cb",
    "a52a2a", "808080", "000000", "90ee90", "add8e6", "f0e68c", "dda0dd", "ff6347", "40e0d0",
    "98fb98", "f5deb3", "cd853f", "d2691e", "b22222", "228b22",
];

/// Pick a palette color for a label. Stable across runs for the same name.
pub fn label_color(name: &str) -> &'static str {
    let digest = Sha256::digest(name.as_bytes());
    LABEL_PALETTE[digest[0] as usize % LABEL_PALETTE.len()]
}

pub fn label_description(name: &str) -> String {
    format!("{name} related tasks")
}

pub fn milestone_description(name: &str) -> String {
    format!("{name} tasks and deliverables")
}

/// Labels every repository needs before category labels are created.
pub fn essential_labels(base_label: &str) -> Vec<String> {
    vec![
        base_label.to_string(),
        TemplateKind::Task.as_str().to_string(),
        TemplateKind::Discussion.as_str().to_string(),
        GENERAL_LABEL.to_string(),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedItem {
    pub name: String,
    pub exists: bool,
}

/// What the synchronizer will create, in creation order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncPlan {
    pub essential_labels: Vec<PlannedItem>,
    pub category_labels: Vec<PlannedItem>,
    pub milestones: Vec<PlannedItem>,
}

impl SyncPlan {
    /// Compare categories against what already exists remotely.
    ///
    /// Each name appears at most once across the label sections and once in
    /// the milestone section, in first-seen order.
    pub fn build(
        base_label: &str,
        entries: &[CategoryEntry],
        existing_labels: &[String],
        existing_milestones: &[String],
    ) -> Self {
        let existing_labels: HashSet<&str> = existing_labels.iter().map(String::as_str).collect();
        let existing_milestones: HashSet<&str> =
            existing_milestones.iter().map(String::as_str).collect();

        let mut seen_labels: HashSet<String> = HashSet::new();
        let mut plan_label = |name: &str| -> Option<PlannedItem> {
            seen_labels.insert(name.to_string()).then(|| PlannedItem {
                name: name.to_string(),
                exists: existing_labels.contains(name),
            })
        };

        let essential_labels: Vec<PlannedItem> =
            essential_labels(base_label).iter().filter_map(|name| plan_label(name)).collect();
        let category_labels: Vec<PlannedItem> =
            entries.iter().filter_map(|entry| plan_label(&entry.label)).collect();

        let mut seen_milestones: HashSet<&str> = HashSet::new();
        let milestones = entries
            .iter()
            .filter(|entry| seen_milestones.insert(entry.milestone.as_str()))
            .map(|entry| PlannedItem {
                name: entry.milestone.clone(),
                exists: existing_milestones.contains(entry.milestone.as_str()),
            })
            .collect();

        Self { essential_labels, category_labels, milestones }
    }

    pub fn labels_missing(&self) -> usize {
        self.essential_labels.iter().chain(&self.category_labels).filter(|i| !i.exists).count()
    }

    pub fn milestones_missing(&self) -> usize {
        self.milestones.iter().filter(|i| !i.exists).count()
    }
}
