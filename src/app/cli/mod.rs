//! CLI Adapter.

mod links;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use crate::app::api;
use crate::app::commands::check::FileCheck;
use crate::app::commands::sync::SyncItemKind;
use crate::app::sink::WriteOutcome;
use crate::domain::sync::label_color;
use crate::domain::{AppError, LabelCheck, MalformedLine, PlannedItem};

#[derive(Parser)]
#[command(name = "issuekit")]
#[command(version)]
#[command(
    about = "Generate GitHub issue templates from a category list and sync labels and milestones",
    long_about = None
)]
struct Cli {
    /// Repository root (defaults to the current directory)
    #[arg(short = 'C', long = "dir", global = true, value_name = "PATH")]
    dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate task and discussion templates for every milestone
    #[clap(visible_alias = "t")]
    Templates {
        /// Remove previously generated templates first
        #[arg(long)]
        clean: bool,
    },
    /// Build the issue chooser config.yml from issue_links.txt
    #[clap(visible_alias = "c")]
    Chooser {
        /// Overwrite an existing config.yml
        #[arg(short, long)]
        force: bool,
    },
    /// Maintain issue_links.txt
    #[clap(visible_alias = "l")]
    Links {
        #[command(subcommand)]
        command: links::LinksCommands,
    },
    /// Create missing labels and milestones with the gh CLI
    #[clap(visible_alias = "s")]
    Sync {
        /// Target repository (OWNER/REPO) instead of the current one
        #[arg(long, value_name = "OWNER/REPO")]
        repo: Option<String>,
    },
    /// Verify generated templates carry their required labels
    Check,
    /// Generate templates, links and the chooser in one step
    Setup,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    let result: Result<i32, AppError> = resolve_root(cli.dir).and_then(|root| match cli.command {
        Commands::Templates { clean } => run_templates(&root, clean).map(|_| 0),
        Commands::Chooser { force } => run_chooser(&root, force).map(|_| 0),
        Commands::Links { command } => links::run_links(&root, command).map(|_| 0),
        Commands::Sync { repo } => run_sync(&root, repo).map(|_| 0),
        Commands::Check => run_check(&root),
        Commands::Setup => run_setup(&root).map(|_| 0),
    });

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn resolve_root(dir: Option<PathBuf>) -> Result<PathBuf, AppError> {
    match dir {
        Some(dir) => Ok(std::path::absolute(dir)?),
        None => Ok(std::env::current_dir()?),
    }
}

pub(crate) fn print_skipped_lines(file: &str, lines: &[MalformedLine]) {
    for line in lines {
        println!("⚠️  {}: skipped {}", file, line);
    }
}

fn run_templates(root: &Path, clean: bool) -> Result<(), AppError> {
    let outcome = api::templates_at(root, api::TemplatesOptions { clean })?;
    print_templates(&outcome);
    Ok(())
}

fn print_templates(outcome: &api::TemplatesOutcome) {
    println!("Loaded {} categories", outcome.entries_loaded);
    print_skipped_lines("categories", &outcome.skipped_lines);
    for removed in &outcome.removed {
        println!("  Removed {}/{}", outcome.template_dir, removed);
    }
    for group in &outcome.milestones {
        println!("  {}: {}", group.milestone, group.labels.join(", "));
    }
    for written in &outcome.written {
        println!("✓ {} {}/{}", written.outcome, outcome.template_dir, written.filename);
    }
    for failure in &outcome.failures {
        println!("✗ Failed to render {}: {}", failure.filename, failure.reason);
    }
    println!(
        "✅ Generated {} template(s) for {} milestone(s)",
        outcome.written.len(),
        outcome.milestones.len()
    );
}

fn run_chooser(root: &Path, force: bool) -> Result<(), AppError> {
    let outcome = api::chooser_at(root, api::ChooserOptions { force })?;
    print_chooser(&outcome);
    Ok(())
}

fn print_chooser(outcome: &api::ChooserOutcome) {
    print_skipped_lines("issue links", &outcome.skipped_lines);
    match outcome.outcome {
        WriteOutcome::Skipped => {
            println!("⚠️  {} already exists; use --force to replace it", outcome.path);
        }
        written => {
            println!("✅ {} {} with {} link(s)", written, outcome.path, outcome.links.len());
        }
    }
}

fn run_sync(root: &Path, repo: Option<String>) -> Result<(), AppError> {
    println!("Syncing categories with GitHub");
    match &repo {
        Some(repo) => println!("Using repository: {}", repo),
        None => println!("Using current repository"),
    }

    let outcome = api::sync_at(root, repo)?;
    print_skipped_lines("categories", &outcome.skipped_lines);

    let failed = |kind: SyncItemKind, name: &str| {
        outcome.failures.iter().find(|f| f.kind == kind && f.name == name)
    };
    let print_label = |item: &PlannedItem| {
        if item.exists {
            println!("- Label already exists: {}", item.name);
        } else if let Some(failure) = failed(SyncItemKind::Label, &item.name) {
            println!("✗ Failed to create label: {} ({})", item.name, failure.reason);
        } else {
            println!("✓ Created label: {} (#{})", item.name, label_color(&item.name));
        }
    };

    println!("\n--- Essential labels ---");
    for item in &outcome.plan.essential_labels {
        print_label(item);
    }
    println!("\n--- Category labels ---");
    for item in &outcome.plan.category_labels {
        print_label(item);
    }
    println!("\n--- Milestones ---");
    for item in &outcome.plan.milestones {
        if item.exists {
            println!("- Milestone already exists: {}", item.name);
        } else if let Some(failure) = failed(SyncItemKind::Milestone, &item.name) {
            println!("✗ Failed to create milestone: {} ({})", item.name, failure.reason);
        } else {
            println!("✓ Created milestone: {}", item.name);
        }
    }

    println!("\n✅ Summary:");
    println!(
        "   Labels created: {} of {} missing",
        outcome.labels_created.len(),
        outcome.plan.labels_missing()
    );
    println!(
        "   Milestones created: {} of {} missing",
        outcome.milestones_created.len(),
        outcome.plan.milestones_missing()
    );
    if !outcome.failures.is_empty() {
        println!("   Failures: {}", outcome.failures.len());
    }
    Ok(())
}

fn run_check(root: &Path) -> Result<i32, AppError> {
    let outcome = api::check_at(root)?;
    println!("Checking templates in {}", outcome.template_dir);

    for file in &outcome.files {
        match &file.result {
            FileCheck::Checked(LabelCheck::Present(label)) => {
                println!("✓ {} has '{}' label", file.filename, label);
            }
            FileCheck::Checked(LabelCheck::Missing(label)) => {
                println!("✗ {} is missing '{}' label", file.filename, label);
            }
            FileCheck::Checked(LabelCheck::NotRequired) => {
                println!("- {} needs no kind label", file.filename);
            }
            FileCheck::Unreadable(reason) => {
                println!("✗ {} could not be read: {}", file.filename, reason);
            }
        }
    }

    if outcome.is_clean() {
        println!("✅ All {} template(s) passed", outcome.files.len());
        Ok(0)
    } else {
        println!("⚠️  {} problem(s) found", outcome.problems());
        Ok(1)
    }
}

fn run_setup(root: &Path) -> Result<(), AppError> {
    let outcome = api::setup_at(root)?;
    print_templates(&outcome.templates);
    links::print_generated(&outcome.links);
    print_chooser(&outcome.chooser);
    println!("✅ Setup complete");
    Ok(())
}
