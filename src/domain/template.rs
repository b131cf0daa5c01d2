//! Issue template rendering contract.

use serde::Serialize;

use super::config::TemplatesConfig;
use super::milestone::MilestoneGroup;
use super::template_kind::TemplateKind;
use super::AppError;

/// A generated template ready to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedTemplate {
    pub filename: String,
    pub content: String,
}

/// Variables available to the issue templates.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateContext {
    pub milestone: String,
    pub base_label: String,
    /// Full label list: base label, kind label, then the milestone's labels.
    pub labels: Vec<String>,
    /// Every category label in the run, sorted.
    pub all_labels: Vec<String>,
    /// Labels of this milestone, used to pre-describe the category checkboxes.
    pub milestone_labels: Vec<String>,
    pub project: Option<String>,
}

impl TemplateContext {
    pub fn new(
        group: &MilestoneGroup,
        kind: TemplateKind,
        all_labels: &[String],
        config: &TemplatesConfig,
    ) -> Self {
        Self {
            milestone: group.milestone.clone(),
            base_label: config.base_label.clone(),
            labels: template_labels(&config.base_label, kind, &group.labels),
            all_labels: all_labels.to_vec(),
            milestone_labels: group.labels.clone(),
            project: config.project.clone(),
        }
    }
}

/// `{base, kind} ∪ labels`, first occurrence wins.
pub fn template_labels(base_label: &str, kind: TemplateKind, labels: &[String]) -> Vec<String> {
    let mut result = vec![base_label.to_string()];
    for label in std::iter::once(kind.as_str()).chain(labels.iter().map(String::as_str)) {
        if !result.iter().any(|existing| existing == label) {
            result.push(label.to_string());
        }
    }
    result
}

/// Renders issue templates from a context.
///
/// Keeps the template engine out of the domain layer.
pub trait IssueTemplateRenderer {
    fn render(&self, kind: TemplateKind, context: &TemplateContext) -> Result<String, AppError>;
}

/// Render one kind of template for a milestone group.
pub fn render_group<R: IssueTemplateRenderer + ?Sized>(
    renderer: &R,
    group: &MilestoneGroup,
    kind: TemplateKind,
    all_labels: &[String],
    config: &TemplatesConfig,
) -> Result<RenderedTemplate, AppError> {
    let context = TemplateContext::new(group, kind, all_labels, config);
    let content = renderer.render(kind, &context)?;
    Ok(RenderedTemplate { filename: kind.filename_for(&group.milestone), content })
}
