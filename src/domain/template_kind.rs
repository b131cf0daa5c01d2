use std::fmt;

/// The two issue-template shapes generated per milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    Task,
    Discussion,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 2] = [TemplateKind::Task, TemplateKind::Discussion];

    /// Name used as the filename prefix and as the kind label.
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::Task => "task",
            TemplateKind::Discussion => "discussion",
        }
    }

    /// Embedded template file rendered for this kind.
    pub fn template_name(&self) -> &'static str {
        match self {
            TemplateKind::Task => "task.yml.j2",
            TemplateKind::Discussion => "discussion.yml.j2",
        }
    }

    /// Classify a generated file by its name prefix.
    pub fn from_filename(filename: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| filename.starts_with(&format!("{}_", kind.as_str())))
    }

    /// Build the output filename for a milestone.
    pub fn filename_for(&self, milestone: &str) -> String {
        format!("{}_{}.yml", self.as_str(), sanitize_milestone(milestone))
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Convert a milestone name to a filename-safe stem.
///
/// Lower-cases, maps spaces and slashes to `_`, and drops commas.
pub fn sanitize_milestone(name: &str) -> String {
    name.to_lowercase().replace(' ', "_").replace(',', "").replace('/', "_")
}
