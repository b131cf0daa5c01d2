//! Issue template rendering with Minijinja.

use include_dir::{Dir, include_dir};
use minijinja::{AutoEscape, Environment, ErrorKind, UndefinedBehavior};

use crate::domain::{AppError, IssueTemplateRenderer, TemplateContext, TemplateKind};

static TEMPLATE_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// Bumped whenever the generated form layout changes.
pub const TEMPLATE_VERSION: u32 = 3;

/// Renders the embedded issue templates.
///
/// Substituted values go through one of two filters:
/// - `yaml` emits a double-quoted scalar, safe for any characters.
/// - `oneline` folds line breaks so text stays inside a block scalar.
pub struct MinijinjaTemplateRenderer {
    env: Environment<'static>,
}

impl MinijinjaTemplateRenderer {
    /// Renderer over the templates compiled into the binary.
    pub fn embedded() -> Result<Self, AppError> {
        let mut sources = Vec::new();
        for kind in TemplateKind::ALL {
            let name = kind.template_name();
            let content = TEMPLATE_DIR
                .get_file(name)
                .and_then(|file| file.contents_utf8())
                .ok_or_else(|| AppError::Template {
                    template: name.to_string(),
                    reason: "embedded template is missing".to_string(),
                })?;
            sources.push((name, content));
        }
        Self::from_sources(&sources)
    }

    /// Renderer over explicit `(name, source)` pairs.
    pub fn from_sources(sources: &[(&'static str, &'static str)]) -> Result<Self, AppError> {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);
        env.add_global("template_version", TEMPLATE_VERSION);
        env.add_filter("yaml", yaml_scalar);
        env.add_filter("oneline", oneline);

        for &(name, source) in sources {
            env.add_template(name, source).map_err(|e| template_error(name, e))?;
        }

        Ok(Self { env })
    }
}

impl IssueTemplateRenderer for MinijinjaTemplateRenderer {
    fn render(&self, kind: TemplateKind, context: &TemplateContext) -> Result<String, AppError> {
        let name = kind.template_name();
        let template = self.env.get_template(name).map_err(|e| template_error(name, e))?;
        template.render(context).map_err(|e| template_error(name, e))
    }
}

fn yaml_scalar(value: String) -> Result<String, minijinja::Error> {
    // A JSON string literal is a valid YAML double-quoted scalar.
    serde_json::to_string(&value)
        .map_err(|e| minijinja::Error::new(ErrorKind::InvalidOperation, e.to_string()))
}

fn oneline(value: String) -> String {
    value.split(['\r', '\n']).filter(|part| !part.is_empty()).collect::<Vec<_>>().join(" ")
}

fn template_error(template_name: &str, err: impl std::fmt::Display) -> AppError {
    AppError::Template { template: template_name.to_string(), reason: err.to_string() }
}
