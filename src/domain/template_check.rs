//! Label checks for generated templates.

use serde::Deserialize;

use super::sync::GENERAL_LABEL;
use super::template_kind::TemplateKind;

/// The subset of an issue template read back for inspection.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TemplateHeader {
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub labels: Vec<String>,
}

/// The label a template file must carry, judged by its filename.
pub fn required_label(filename: &str) -> Option<&'static str> {
    if let Some(kind) = TemplateKind::from_filename(filename) {
        return Some(kind.as_str());
    }
    if filename.to_lowercase().contains(GENERAL_LABEL) {
        return Some(GENERAL_LABEL);
    }
    None
}

/// Result of checking one template file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelCheck {
    Present(&'static str),
    Missing(&'static str),
    NotRequired,
}

pub fn check_labels(filename: &str, header: &TemplateHeader) -> LabelCheck {
    match required_label(filename) {
        Some(label) if header.labels.iter().any(|l| l == label) => LabelCheck::Present(label),
        Some(label) => LabelCheck::Missing(label),
        None => LabelCheck::NotRequired,
    }
}
