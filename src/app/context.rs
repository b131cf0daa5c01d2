use crate::domain::{AppError, CONFIG_FILENAME, IssueTemplateRenderer, ProjectConfig};
use crate::ports::RepositoryFilesystem;

/// Application context holding dependencies for command execution.
pub struct AppContext<F: RepositoryFilesystem, R: IssueTemplateRenderer> {
    repository: F,
    renderer: R,
    config: ProjectConfig,
}

impl<F: RepositoryFilesystem, R: IssueTemplateRenderer> AppContext<F, R> {
    /// Create a new application context.
    pub fn new(repository: F, renderer: R, config: ProjectConfig) -> Self {
        Self { repository, renderer, config }
    }

    /// Create a context, loading `issuekit.toml` from the repository when present.
    pub fn load(repository: F, renderer: R) -> Result<Self, AppError> {
        let config = load_config(&repository)?;
        Ok(Self::new(repository, renderer, config))
    }

    /// Get a reference to the repository filesystem.
    pub fn repository(&self) -> &F {
        &self.repository
    }

    /// Get a reference to the template renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn config(&self) -> &ProjectConfig {
        &self.config
    }
}

/// Load the project configuration, falling back to defaults when absent.
pub fn load_config(repository: &impl RepositoryFilesystem) -> Result<ProjectConfig, AppError> {
    if !repository.file_exists(CONFIG_FILENAME) {
        return Ok(ProjectConfig::default());
    }
    let content = repository.read_file(CONFIG_FILENAME)?;
    ProjectConfig::parse_toml(&content)
}
