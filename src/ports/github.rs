use crate::domain::AppError;

/// Operations against the repository hosting platform.
///
/// Implementations only report what exists and create what is asked for;
/// deciding what is missing belongs to the caller.
pub trait GitHubPort {
    /// Names of all labels in the repository.
    fn list_labels(&self) -> Result<Vec<String>, AppError>;

    /// Titles of all milestones in the repository.
    fn list_milestones(&self) -> Result<Vec<String>, AppError>;

    /// Create a label with a 6-digit hex color.
    fn create_label(&self, name: &str, color: &str, description: &str) -> Result<(), AppError>;

    /// Create an open milestone.
    fn create_milestone(&self, title: &str, description: &str) -> Result<(), AppError>;
}
