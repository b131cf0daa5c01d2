//! Link list maintenance: regenerate from templates, append custom links.

use url::Url;

use crate::app::AppContext;
use crate::domain::{
    AppError, CHOOSER_FILENAME, IssueLink, IssueTemplateRenderer, TemplateHeader, TemplateKind,
    format_links_file,
};
use crate::ports::RepositoryFilesystem;

#[derive(Debug, Clone)]
pub struct LinksOutcome {
    pub path: String,
    pub links: Vec<IssueLink>,
    /// Templates that could not be read, with the reason.
    pub warnings: Vec<String>,
}

/// Rewrite the link list from the templates in the template directory.
///
/// Tasks come first, then discussions, then everything else; each group is
/// ordered by lower-cased name.
pub fn generate<F, R>(ctx: &AppContext<F, R>) -> Result<LinksOutcome, AppError>
where
    F: RepositoryFilesystem,
    R: IssueTemplateRenderer,
{
    let config = ctx.config();
    let repository = ctx.repository();
    let template_dir = config.paths.template_dir.trim_end_matches('/');

    let mut entries: Vec<(u8, String, IssueLink)> = Vec::new();
    let mut warnings = Vec::new();

    for filename in repository.list_dir(template_dir)? {
        if !filename.ends_with(".yml") || filename == CHOOSER_FILENAME {
            continue;
        }
        let path = format!("{}/{}", template_dir, filename);
        let header = match read_header(repository, &path) {
            Ok(header) => header,
            Err(err) => {
                warnings.push(format!("Could not read {}: {}", filename, err));
                continue;
            }
        };

        let title = header.name.unwrap_or_else(|| "Unknown Template".to_string());
        let description = header.description.unwrap_or_else(|| "Template description".to_string());
        let rank = match TemplateKind::from_filename(&filename) {
            Some(TemplateKind::Task) => 0,
            Some(TemplateKind::Discussion) => 1,
            None => 2,
        };
        let url = format!("/issues/new?template={}", filename);
        entries.push((rank, title.to_lowercase(), IssueLink::new(title, description, url)));
    }

    entries.sort_by(|a, b| (a.0, &a.1).cmp(&(b.0, &b.1)));
    let links: Vec<IssueLink> = entries.into_iter().map(|(_, _, link)| link).collect();

    repository.write_file(&config.paths.issue_links, &format_links_file(&links))?;

    Ok(LinksOutcome { path: config.paths.issue_links.clone(), links, warnings })
}

/// Read the `name`/`description`/`labels` header of a template file.
pub(crate) fn read_header(
    repository: &impl RepositoryFilesystem,
    path: &str,
) -> Result<TemplateHeader, AppError> {
    let content = repository.read_file(path)?;
    Ok(serde_yaml::from_str(&content)?)
}

/// Append one custom link to the link list.
///
/// The URL must be an absolute http(s) URL or a repository-relative path.
pub fn add<F, R>(ctx: &AppContext<F, R>, link: &IssueLink) -> Result<IssueLink, AppError>
where
    F: RepositoryFilesystem,
    R: IssueTemplateRenderer,
{
    if link.title.trim().is_empty() {
        return Err(AppError::Validation("Link title must not be empty".to_string()));
    }
    validate_link_url(&link.url)?;

    let description = if link.description.trim().is_empty() {
        format!("Visit {}", link.title.trim())
    } else {
        link.description.clone()
    };
    let link = IssueLink::new(link.title.clone(), description, link.url.trim());

    let path = &ctx.config().paths.issue_links;
    let repository = ctx.repository();
    let needs_separator = repository.file_exists(path) && {
        let existing = repository.read_file(path)?;
        !existing.is_empty() && !existing.ends_with('\n')
    };
    let separator = if needs_separator { "\n" } else { "" };
    repository.append_file(path, &format!("{}{}\n", separator, link.to_line()))?;
    Ok(link)
}

pub fn validate_link_url(url: &str) -> Result<(), AppError> {
    let url = url.trim();
    if url.is_empty() {
        return Err(AppError::Validation("URL is required".to_string()));
    }
    if url.starts_with('/') {
        return Ok(());
    }
    match Url::parse(url) {
        Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => Ok(()),
        Ok(parsed) => Err(AppError::Validation(format!(
            "Unsupported URL scheme '{}': use http(s) or a path starting with '/'",
            parsed.scheme()
        ))),
        Err(err) => Err(AppError::Validation(format!("Invalid URL '{}': {}", url, err))),
    }
}
