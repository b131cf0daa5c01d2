use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::domain::AppError;
use crate::ports::GitHubPort;

#[derive(Debug, Default)]
struct State {
    labels: Vec<String>,
    milestones: Vec<String>,
    fail_listing: bool,
    label_failures: HashMap<String, u32>,
    milestone_failures: HashMap<String, u32>,
    label_attempts: HashMap<String, u32>,
    milestone_attempts: HashMap<String, u32>,
    created_labels: Vec<(String, String, String)>,
    created_milestones: Vec<String>,
}

/// Scriptable in-memory `GitHubPort`.
///
/// Failures are configured per name as a count of calls that fail before
/// the call succeeds. Clones share state.
#[derive(Debug, Clone, Default)]
pub struct FakeGitHub {
    state: Arc<Mutex<State>>,
}

impl FakeGitHub {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_labels(self, labels: &[&str]) -> Self {
        self.state.lock().unwrap().labels = labels.iter().map(|l| l.to_string()).collect();
        self
    }

    pub fn with_milestones(self, milestones: &[&str]) -> Self {
        self.state.lock().unwrap().milestones = milestones.iter().map(|m| m.to_string()).collect();
        self
    }

    pub fn failing_listing(self) -> Self {
        self.state.lock().unwrap().fail_listing = true;
        self
    }

    pub fn fail_label_times(self, name: &str, times: u32) -> Self {
        self.state.lock().unwrap().label_failures.insert(name.to_string(), times);
        self
    }

    pub fn fail_milestone_times(self, title: &str, times: u32) -> Self {
        self.state.lock().unwrap().milestone_failures.insert(title.to_string(), times);
        self
    }

    pub fn created_labels(&self) -> Vec<String> {
        self.state.lock().unwrap().created_labels.iter().map(|(n, _, _)| n.clone()).collect()
    }

    pub fn created_label(&self, name: &str) -> Option<(String, String)> {
        self.state
            .lock()
            .unwrap()
            .created_labels
            .iter()
            .find(|(n, _, _)| n == name)
            .map(|(_, color, description)| (color.clone(), description.clone()))
    }

    pub fn created_milestones(&self) -> Vec<String> {
        self.state.lock().unwrap().created_milestones.clone()
    }

    pub fn label_attempts(&self, name: &str) -> u32 {
        self.state.lock().unwrap().label_attempts.get(name).copied().unwrap_or(0)
    }

    pub fn milestone_attempts(&self, title: &str) -> u32 {
        self.state.lock().unwrap().milestone_attempts.get(title).copied().unwrap_or(0)
    }
}

fn consume_failure(failures: &mut HashMap<String, u32>, key: &str) -> bool {
    match failures.get_mut(key) {
        Some(remaining) if *remaining > 0 => {
            *remaining -= 1;
            true
        }
        _ => false,
    }
}

impl GitHubPort for FakeGitHub {
    fn list_labels(&self) -> Result<Vec<String>, AppError> {
        let state = self.state.lock().unwrap();
        if state.fail_listing {
            return Err(AppError::external_tool("gh", "gh label failed: HTTP 401"));
        }
        Ok(state.labels.clone())
    }

    fn list_milestones(&self) -> Result<Vec<String>, AppError> {
        let state = self.state.lock().unwrap();
        if state.fail_listing {
            return Err(AppError::external_tool("gh", "gh api failed: HTTP 401"));
        }
        Ok(state.milestones.clone())
    }

    fn create_label(&self, name: &str, color: &str, description: &str) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        *state.label_attempts.entry(name.to_string()).or_default() += 1;
        if consume_failure(&mut state.label_failures, name) {
            return Err(AppError::external_tool("gh", format!("label create {} failed", name)));
        }
        state.created_labels.push((name.to_string(), color.to_string(), description.to_string()));
        state.labels.push(name.to_string());
        Ok(())
    }

    fn create_milestone(&self, title: &str, _description: &str) -> Result<(), AppError> {
        let mut state = self.state.lock().unwrap();
        *state.milestone_attempts.entry(title.to_string()).or_default() += 1;
        if consume_failure(&mut state.milestone_failures, title) {
            return Err(AppError::external_tool("gh", format!("milestone {} failed", title)));
        }
        state.created_milestones.push(title.to_string());
        state.milestones.push(title.to_string());
        Ok(())
    }
}
