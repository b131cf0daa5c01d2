use std::path::PathBuf;
use std::process::Command;

use serde::Deserialize;

use crate::domain::AppError;
use crate::ports::GitHubPort;

/// `GitHubPort` backed by the `gh` CLI.
///
/// Without an explicit repository, `gh` resolves the repository of the
/// current directory and `{owner}/{repo}` placeholders in API paths.
#[derive(Debug, Clone, Default)]
pub struct GitHubCommandAdapter {
    repo: Option<String>,
    workdir: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct LabelName {
    name: String,
}

impl GitHubCommandAdapter {
    pub fn new(repo: Option<String>) -> Self {
        Self { repo, workdir: None }
    }

    /// Run `gh` from `workdir` so it resolves that directory's repository.
    pub fn with_workdir(mut self, workdir: impl Into<PathBuf>) -> Self {
        self.workdir = Some(workdir.into());
        self
    }

    fn milestones_endpoint(&self) -> String {
        match &self.repo {
            Some(repo) => format!("repos/{}/milestones", repo),
            None => "repos/{owner}/{repo}/milestones".to_string(),
        }
    }

    /// Listing covers closed milestones too; creating a title that exists
    /// only as a closed milestone is rejected by the API.
    fn milestones_list_endpoint(&self) -> String {
        format!("{}?state=all", self.milestones_endpoint())
    }

    fn run_gh(&self, args: &[&str], with_repo_flag: bool) -> Result<String, AppError> {
        let mut cmd = Command::new("gh");
        cmd.args(args);
        if let Some(dir) = &self.workdir {
            cmd.current_dir(dir);
        }
        if with_repo_flag && let Some(repo) = &self.repo {
            cmd.args(["--repo", repo]);
        }

        let output = cmd
            .output()
            .map_err(|e| AppError::external_tool("gh", format!("Failed to execute gh CLI: {}", e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::external_tool(
                "gh",
                format!("gh {} failed: {}", args.first().unwrap_or(&""), stderr.trim()),
            ));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

impl GitHubPort for GitHubCommandAdapter {
    fn list_labels(&self) -> Result<Vec<String>, AppError> {
        let output = self.run_gh(&["label", "list", "--json", "name", "--limit", "1000"], true)?;
        if output.is_empty() {
            return Ok(Vec::new());
        }
        let labels: Vec<LabelName> = serde_json::from_str(&output).map_err(|e| {
            AppError::ParseError { what: "gh label list output".into(), details: e.to_string() }
        })?;
        Ok(labels.into_iter().map(|label| label.name).collect())
    }

    fn list_milestones(&self) -> Result<Vec<String>, AppError> {
        let endpoint = self.milestones_list_endpoint();
        let output =
            self.run_gh(&["api", &endpoint, "--paginate", "--jq", ".[].title"], false)?;
        Ok(output.lines().map(str::trim).filter(|l| !l.is_empty()).map(String::from).collect())
    }

    fn create_label(&self, name: &str, color: &str, description: &str) -> Result<(), AppError> {
        self.run_gh(
            &["label", "create", name, "--color", color, "--description", description],
            true,
        )?;
        Ok(())
    }

    fn create_milestone(&self, title: &str, description: &str) -> Result<(), AppError> {
        let endpoint = self.milestones_endpoint();
        let title_field = format!("title={}", title);
        let description_field = format!("description={}", description);
        self.run_gh(
            &["api", &endpoint, "-X", "POST", "-f", &title_field, "-f", &description_field],
            false,
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn milestones_endpoint_uses_placeholders_without_repo() {
        let adapter = GitHubCommandAdapter::new(None);
        assert_eq!(adapter.milestones_endpoint(), "repos/{owner}/{repo}/milestones");
    }

    #[test]
    fn milestone_listing_includes_closed_milestones() {
        let adapter = GitHubCommandAdapter::new(None);
        assert_eq!(adapter.milestones_list_endpoint(), "repos/{owner}/{repo}/milestones?state=all");
        let adapter = GitHubCommandAdapter::new(Some("WCRP-CMIP/planning".into()));
        assert_eq!(
            adapter.milestones_list_endpoint(),
            "repos/WCRP-CMIP/planning/milestones?state=all"
        );
    }

    #[test]
    fn milestones_endpoint_targets_explicit_repo() {
        let adapter = GitHubCommandAdapter::new(Some("WCRP-CMIP/planning".into()));
        assert_eq!(adapter.milestones_endpoint(), "repos/WCRP-CMIP/planning/milestones");
    }
}
