//! Issue chooser link list (`issue_links.txt`).

use super::category::{MalformedLine, is_ignorable};

/// Header written at the top of a generated link list.
pub const LINKS_FILE_HEADER: &str =
    "# Issue template links configuration\n# Format: title,description,url\n\n";

/// One entry of the issue chooser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueLink {
    pub title: String,
    pub description: String,
    pub url: String,
}

impl IssueLink {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self { title: title.into(), description: description.into(), url: url.into() }
    }

    /// Serialize as a `title,description,url` line (without trailing newline).
    ///
    /// Commas in the title and description become `;` and line breaks become
    /// spaces so the line parses back into the same three fields.
    pub fn to_line(&self) -> String {
        format!(
            "{},{},{}",
            sanitize_field(&self.title),
            sanitize_field(&self.description),
            self.url.trim()
        )
    }
}

fn sanitize_field(text: &str) -> String {
    text.replace(',', ";").replace(['\n', '\r'], " ").trim().to_string()
}

/// Lazily parse link lines. The URL field keeps any further commas.
pub fn parse_issue_links(
    content: &str,
) -> impl Iterator<Item = Result<IssueLink, MalformedLine>> + '_ {
    content.lines().enumerate().filter(|(_, line)| !is_ignorable(line)).map(|(index, line)| {
        let line = line.trim();
        let parts: Vec<&str> = line.splitn(3, ',').map(str::trim).collect();
        match parts.as_slice() {
            [title, description, url] if !title.is_empty() && !url.is_empty() => {
                Ok(IssueLink::new(*title, *description, *url))
            }
            [_, _, _] => Err(MalformedLine {
                line_number: index + 1,
                content: line.to_string(),
                reason: "empty title or url",
            }),
            _ => Err(MalformedLine {
                line_number: index + 1,
                content: line.to_string(),
                reason: "expected title,description,url",
            }),
        }
    })
}

/// Render a full link list file.
pub fn format_links_file(links: &[IssueLink]) -> String {
    let mut content = String::from(LINKS_FILE_HEADER);
    for link in links {
        content.push_str(&link.to_line());
        content.push('\n');
    }
    content
}
