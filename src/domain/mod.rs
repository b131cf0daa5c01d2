pub mod category;
pub mod chooser;
pub mod config;
pub mod error;
pub mod issue_link;
pub mod milestone;
pub mod sync;
pub mod template;
pub mod template_check;
pub mod template_kind;

pub use category::{CategoryEntry, MalformedLine, parse_categories};
pub use chooser::{CHOOSER_FILENAME, ChooserConfig, ContactLink};
pub use config::{CONFIG_FILENAME, PathsConfig, ProjectConfig, SyncConfig, TemplatesConfig};
pub use error::AppError;
pub use issue_link::{IssueLink, format_links_file, parse_issue_links};
pub use milestone::{MilestoneGroup, MilestoneGroups};
pub use sync::{PlannedItem, SyncPlan};
pub use template::{IssueTemplateRenderer, RenderedTemplate, TemplateContext, render_group};
pub use template_check::{LabelCheck, TemplateHeader, check_labels};
pub use template_kind::{TemplateKind, sanitize_milestone};
