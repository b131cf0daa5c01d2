mod github;
mod repository_filesystem;

pub use github::GitHubPort;
pub use repository_filesystem::RepositoryFilesystem;
