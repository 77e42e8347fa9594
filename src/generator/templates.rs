use askama::Template;
use minijinja::Environment;
use serde::Serialize;
use std::fs;
use std::path::Path;

use super::error::GenerateError;
use super::routes::GroupOutput;

/// Source of the built-in routes template.
///
/// Printed by `routegen template` as a starting point for overrides; an
/// override uses the same Jinja syntax and receives the same context.
pub const DEFAULT_ROUTES_TEMPLATE: &str = include_str!("../../templates/routes.go.txt");

/// Context passed to the routes template
#[derive(Debug, Clone, Template, Serialize)]
#[template(path = "routes.go.txt", escape = "none")]
pub struct RoutesTemplateData {
    /// Import lines, already sorted and tab-joined
    pub import_packages: String,
    /// Groups in registration order
    pub groups: Vec<GroupOutput>,
}

/// The template used to render the routes file
#[derive(Debug, Clone, Default)]
pub enum RoutesTemplate {
    /// Compiled-in template (`templates/routes.go.txt`)
    #[default]
    Builtin,
    /// User-supplied Jinja template source
    Override(String),
}

impl RoutesTemplate {
    /// Validate and wrap an override template.
    ///
    /// Syntax errors surface here, before any output file is touched.
    pub fn from_source(source: impl Into<String>) -> Result<Self, GenerateError> {
        let source = source.into();
        Environment::new()
            .template_from_str(&source)
            .map_err(GenerateError::Template)?;
        Ok(RoutesTemplate::Override(source))
    }

    /// Read and validate an override template file
    pub fn load(path: &Path) -> Result<Self, GenerateError> {
        let source = fs::read_to_string(path).map_err(GenerateError::io(path))?;
        tracing::debug!(path = %path.display(), "loaded override routes template");
        Self::from_source(source)
    }

    /// Resolve an optional override path to a template
    pub fn from_override(path: Option<&Path>) -> Result<Self, GenerateError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(RoutesTemplate::Builtin),
        }
    }

    pub fn render(&self, data: &RoutesTemplateData) -> Result<String, GenerateError> {
        match self {
            RoutesTemplate::Builtin => data
                .render()
                .map_err(|e| GenerateError::Render(Box::new(e))),
            RoutesTemplate::Override(source) => {
                let env = Environment::new();
                let template = env
                    .template_from_str(source)
                    .map_err(GenerateError::Template)?;
                template
                    .render(data)
                    .map_err(|e| GenerateError::Render(Box::new(e)))
            }
        }
    }
}
