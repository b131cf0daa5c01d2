//! Full generation pipeline: templates, link list, chooser.

use crate::app::AppContext;
use crate::domain::{AppError, IssueTemplateRenderer};
use crate::ports::RepositoryFilesystem;

use super::chooser::{self, ChooserOptions, ChooserOutcome};
use super::links::{self, LinksOutcome};
use super::templates::{self, TemplatesOptions, TemplatesOutcome};

#[derive(Debug, Clone)]
pub struct SetupOutcome {
    pub templates: TemplatesOutcome,
    pub links: LinksOutcome,
    pub chooser: ChooserOutcome,
}

/// Run each generation step in order, stopping at the first fatal error.
pub fn execute<F, R>(ctx: &AppContext<F, R>) -> Result<SetupOutcome, AppError>
where
    F: RepositoryFilesystem,
    R: IssueTemplateRenderer,
{
    let templates = templates::execute(ctx, TemplatesOptions::default())?;
    let links = links::generate(ctx)?;
    let chooser = chooser::execute(ctx, ChooserOptions::default())?;
    Ok(SetupOutcome { templates, links, chooser })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::MinijinjaTemplateRenderer;
    use crate::app::sink::WriteOutcome;
    use crate::domain::{ChooserConfig, ProjectConfig};
    use crate::testing::MockRepositoryFs;

    fn context(fs: &MockRepositoryFs) -> AppContext<MockRepositoryFs, MinijinjaTemplateRenderer> {
        AppContext::new(
            fs.clone(),
            MinijinjaTemplateRenderer::embedded().unwrap(),
            ProjectConfig::default(),
        )
    }

    #[test]
    fn generates_templates_links_and_chooser() {
        let fs = MockRepositoryFs::new().with_file("categories.txt", "infra,v1\nsecurity,v2\n");

        let outcome = execute(&context(&fs)).unwrap();

        assert_eq!(outcome.templates.written.len(), 4);
        let files: Vec<_> = outcome
            .links
            .links
            .iter()
            .filter_map(|l| l.url.strip_prefix("/issues/new?template="))
            .collect();
        assert_eq!(files, vec!["task_v1.yml", "task_v2.yml", "discussion_v1.yml", "discussion_v2.yml"]);
        assert_eq!(outcome.chooser.outcome, WriteOutcome::Created);

        let chooser: ChooserConfig =
            serde_yaml::from_str(&fs.get(".github/ISSUE_TEMPLATE/config.yml").unwrap()).unwrap();
        assert_eq!(chooser.contact_links.len(), 4);
        assert_eq!(chooser.contact_links[0].url, "/issues/new?template=task_v1.yml");
    }

    #[test]
    fn stops_before_links_when_categories_are_missing() {
        let fs = MockRepositoryFs::new();
        assert!(matches!(execute(&context(&fs)), Err(AppError::MissingFile(_))));
        assert!(fs.get("issue_links.txt").is_none());
    }
}
