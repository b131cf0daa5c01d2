//! Issue chooser dropdown configuration (`config.yml`).

use serde::{Deserialize, Serialize};

use super::AppError;
use super::issue_link::IssueLink;

/// Filename of the dropdown configuration inside the template directory.
pub const CHOOSER_FILENAME: &str = "config.yml";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChooserConfig {
    pub blank_issues_enabled: bool,
    pub contact_links: Vec<ContactLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactLink {
    pub name: String,
    pub url: String,
    pub about: String,
}

impl From<&IssueLink> for ContactLink {
    fn from(link: &IssueLink) -> Self {
        Self { name: link.title.clone(), url: link.url.clone(), about: link.description.clone() }
    }
}

impl ChooserConfig {
    pub fn from_links(links: &[IssueLink], blank_issues_enabled: bool) -> Self {
        Self { blank_issues_enabled, contact_links: links.iter().map(ContactLink::from).collect() }
    }

    pub fn to_yaml(&self) -> Result<String, AppError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_contact_links_in_order() {
        let links = vec![
            IssueLink::new("CVsTT Task: v1", "Create a v1 task", "/issues/new?template=task_v1.yml"),
            IssueLink::new("Website", "Visit: \"the\" site", "https://example.com"),
        ];
        let config = ChooserConfig::from_links(&links, false);
        let yaml = config.to_yaml().unwrap();

        assert!(yaml.starts_with("blank_issues_enabled: false\n"));
        let parsed: ChooserConfig = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
        assert_eq!(parsed.contact_links[1].about, "Visit: \"the\" site");
    }

    #[test]
    fn empty_link_list_is_valid() {
        let yaml = ChooserConfig::from_links(&[], true).to_yaml().unwrap();
        let parsed: ChooserConfig = serde_yaml::from_str(&yaml).unwrap();
        assert!(parsed.blank_issues_enabled);
        assert!(parsed.contact_links.is_empty());
    }
}
