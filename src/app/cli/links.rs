//! Links command implementation.

use std::io::ErrorKind;
use std::path::Path;

use clap::Subcommand;
use dialoguer::{Confirm, Error as DialoguerError, Input};

use crate::app::api;
use crate::app::commands::links::validate_link_url;
use crate::domain::{AppError, IssueLink};

#[derive(Subcommand)]
pub enum LinksCommands {
    /// Regenerate issue_links.txt from the templates on disk
    #[clap(visible_alias = "g")]
    Generate,
    /// Append custom links to issue_links.txt
    #[clap(visible_alias = "a")]
    Add {
        /// Link title
        #[arg(required_unless_present = "interactive")]
        title: Option<String>,
        /// Link description
        #[arg(required_unless_present = "interactive")]
        description: Option<String>,
        /// Absolute http(s) URL or a path starting with '/'
        #[arg(required_unless_present = "interactive")]
        url: Option<String>,
        /// Prompt for links until an empty title is entered
        #[arg(short, long, conflicts_with_all = ["title", "description", "url"])]
        interactive: bool,
    },
}

pub fn run_links(root: &Path, command: LinksCommands) -> Result<(), AppError> {
    match command {
        LinksCommands::Generate => {
            let outcome = api::links_generate_at(root)?;
            print_generated(&outcome);
            Ok(())
        }
        LinksCommands::Add { title, description, url, interactive } => {
            let links = if interactive {
                prompt_links()?
            } else {
                vec![IssueLink::new(
                    title.unwrap_or_default(),
                    description.unwrap_or_default(),
                    url.unwrap_or_default(),
                )]
            };
            if links.is_empty() {
                println!("No links added");
                return Ok(());
            }
            for link in api::links_add_at(root, &links)? {
                println!("✓ Added link: {} -> {}", link.title, link.url);
            }
            Ok(())
        }
    }
}

pub(super) fn print_generated(outcome: &api::LinksOutcome) {
    for warning in &outcome.warnings {
        println!("⚠️  {}", warning);
    }
    for link in &outcome.links {
        println!("  {} -> {}", link.title, link.url);
    }
    println!("✅ Wrote {} link(s) to {}", outcome.links.len(), outcome.path);
}

fn prompt_links() -> Result<Vec<IssueLink>, AppError> {
    let mut links = Vec::new();
    loop {
        let Some(title) = prompt_text("Link title (empty to finish)", true)? else {
            break;
        };
        if title.trim().is_empty() {
            break;
        }
        let Some(description) = prompt_text("Description (empty for default)", true)? else {
            break;
        };
        let description = if description.trim().is_empty() {
            format!("Visit {}", title.trim())
        } else {
            description
        };
        let Some(url) = prompt_url()? else {
            break;
        };
        links.push(IssueLink::new(title.trim(), description, url));

        match Confirm::new().with_prompt("Add another link?").default(false).interact() {
            Ok(true) => continue,
            Ok(false) => break,
            Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => break,
            Err(err) => {
                return Err(AppError::Validation(format!("Failed to read answer: {}", err)));
            }
        }
    }
    Ok(links)
}

fn prompt_text(prompt: &str, allow_empty: bool) -> Result<Option<String>, AppError> {
    match Input::<String>::new().with_prompt(prompt).allow_empty(allow_empty).interact_text() {
        Ok(value) => Ok(Some(value)),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Validation(format!("Failed to read input: {}", err))),
    }
}

fn prompt_url() -> Result<Option<String>, AppError> {
    let result = Input::<String>::new()
        .with_prompt("URL")
        .validate_with(|value: &String| validate_link_url(value).map_err(|e| e.to_string()))
        .interact_text();
    match result {
        Ok(value) => Ok(Some(value.trim().to_string())),
        Err(DialoguerError::IO(err)) if err.kind() == ErrorKind::Interrupted => Ok(None),
        Err(err) => Err(AppError::Validation(format!("Failed to read URL: {}", err))),
    }
}
