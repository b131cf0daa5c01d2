mod fake_github;
mod mock_repository_fs;

pub use fake_github::FakeGitHub;
pub use mock_repository_fs::MockRepositoryFs;
