pub mod filesystem;
pub mod github_command;
pub mod github_retrying;
pub mod template_engine;

pub use filesystem::FilesystemStore;
pub use github_command::GitHubCommandAdapter;
pub use github_retrying::{RetryPolicy, RetryingGitHub};
pub use template_engine::MinijinjaTemplateRenderer;
