//! Milestone grouping.

use std::collections::{BTreeSet, HashMap};

use super::category::CategoryEntry;

/// A milestone and the labels assigned to it, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MilestoneGroup {
    pub milestone: String,
    pub labels: Vec<String>,
}

impl MilestoneGroup {
    fn new(milestone: &str) -> Self {
        Self { milestone: milestone.to_string(), labels: Vec::new() }
    }

    fn push_label(&mut self, label: &str) {
        if !self.labels.iter().any(|existing| existing == label) {
            self.labels.push(label.to_string());
        }
    }
}

/// Milestone groups keyed by milestone name, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MilestoneGroups {
    groups: Vec<MilestoneGroup>,
}

impl MilestoneGroups {
    /// Group entries by milestone, dropping duplicate labels per milestone.
    pub fn from_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = &'a CategoryEntry>,
    {
        let mut groups: Vec<MilestoneGroup> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for entry in entries {
            let position = *index.entry(entry.milestone.clone()).or_insert_with(|| {
                groups.push(MilestoneGroup::new(&entry.milestone));
                groups.len() - 1
            });
            groups[position].push_label(&entry.label);
        }

        Self { groups }
    }

    pub fn iter(&self) -> impl Iterator<Item = &MilestoneGroup> {
        self.groups.iter()
    }

    /// Every label across all milestones, deduplicated and sorted.
    pub fn all_labels(&self) -> Vec<String> {
        self.groups
            .iter()
            .flat_map(|group| group.labels.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
