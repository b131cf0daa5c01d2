//! Project configuration loaded from `issuekit.toml`.

use serde::{Deserialize, Serialize};

use crate::domain::AppError;

/// Configuration filename at the repository root. The file is optional.
pub const CONFIG_FILENAME: &str = "issuekit.toml";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    #[serde(default)]
    pub paths: PathsConfig,
    #[serde(default)]
    pub templates: TemplatesConfig,
    #[serde(default)]
    pub sync: SyncConfig,
}

impl ProjectConfig {
    pub fn parse_toml(content: &str) -> Result<Self, AppError> {
        let config: ProjectConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), AppError> {
        self.paths.validate()?;
        self.templates.validate()?;
        self.sync.validate()?;
        Ok(())
    }
}

/// Input and output locations, relative to the repository root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PathsConfig {
    #[serde(default = "default_categories")]
    pub categories: String,
    #[serde(default = "default_issue_links")]
    pub issue_links: String,
    #[serde(default = "default_template_dir")]
    pub template_dir: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            categories: default_categories(),
            issue_links: default_issue_links(),
            template_dir: default_template_dir(),
        }
    }
}

impl PathsConfig {
    fn validate(&self) -> Result<(), AppError> {
        for (key, value) in [
            ("paths.categories", &self.categories),
            ("paths.issue_links", &self.issue_links),
            ("paths.template_dir", &self.template_dir),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::InvalidConfig(format!("{key} must not be empty")));
            }
        }
        Ok(())
    }
}

fn default_categories() -> String {
    "categories.txt".to_string()
}

fn default_issue_links() -> String {
    "issue_links.txt".to_string()
}

fn default_template_dir() -> String {
    ".github/ISSUE_TEMPLATE".to_string()
}

/// Values substituted into every generated template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TemplatesConfig {
    /// Label attached to every generated template.
    #[serde(default = "default_base_label")]
    pub base_label: String,
    /// Project board added to generated issues (`owner/number`).
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub blank_issues_enabled: bool,
}

impl Default for TemplatesConfig {
    fn default() -> Self {
        Self { base_label: default_base_label(), project: None, blank_issues_enabled: false }
    }
}

impl TemplatesConfig {
    fn validate(&self) -> Result<(), AppError> {
        if self.base_label.trim().is_empty() {
            return Err(AppError::InvalidConfig("templates.base_label must not be empty".into()));
        }
        if let Some(project) = &self.project
            && project.trim().is_empty()
        {
            return Err(AppError::InvalidConfig("templates.project must not be empty".into()));
        }
        Ok(())
    }
}

fn default_base_label() -> String {
    "CVsTT".to_string()
}

/// Retry behaviour for creation calls against the hosting platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SyncConfig {
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self { max_attempts: default_max_attempts(), retry_delay_ms: default_retry_delay_ms() }
    }
}

impl SyncConfig {
    fn validate(&self) -> Result<(), AppError> {
        if self.max_attempts == 0 {
            return Err(AppError::InvalidConfig(
                "sync.max_attempts must be greater than 0".to_string(),
            ));
        }
        if self.retry_delay_ms == 0 {
            return Err(AppError::InvalidConfig(
                "sync.retry_delay_ms must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_max_attempts() -> u32 {
    1
}

fn default_retry_delay_ms() -> u64 {
    1000
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_repository_layout() {
        let config = ProjectConfig::default();
        assert_eq!(config.paths.categories, "categories.txt");
        assert_eq!(config.paths.issue_links, "issue_links.txt");
        assert_eq!(config.paths.template_dir, ".github/ISSUE_TEMPLATE");
        assert_eq!(config.templates.base_label, "CVsTT");
        assert!(!config.templates.blank_issues_enabled);
        assert_eq!(config.sync.max_attempts, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_document_uses_defaults() {
        assert_eq!(ProjectConfig::parse_toml("").unwrap(), ProjectConfig::default());
    }

    #[test]
    fn parses_partial_sections() {
        let config = ProjectConfig::parse_toml(
            r#"
[templates]
base_label = "Planning"
project = "WCRP-CMIP/4"

[sync]
max_attempts = 3
"#,
        )
        .unwrap();
        assert_eq!(config.templates.base_label, "Planning");
        assert_eq!(config.templates.project.as_deref(), Some("WCRP-CMIP/4"));
        assert_eq!(config.sync.max_attempts, 3);
        assert_eq!(config.sync.retry_delay_ms, 1000);
        assert_eq!(config.paths, PathsConfig::default());
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(matches!(
            ProjectConfig::parse_toml("[paths]\noutput = \"x\"\n"),
            Err(AppError::TomlParseError(_))
        ));
    }

    #[test]
    fn rejects_invalid_values() {
        assert!(matches!(
            ProjectConfig::parse_toml("[sync]\nmax_attempts = 0\n"),
            Err(AppError::InvalidConfig(_))
        ));
        assert!(matches!(
            ProjectConfig::parse_toml("[templates]\nbase_label = \" \"\n"),
            Err(AppError::InvalidConfig(_))
        ));
    }
}
