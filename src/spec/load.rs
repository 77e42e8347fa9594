use super::types::Service;
use anyhow::Context;
use std::path::Path;

/// Document encodings accepted for a resolved service description
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// Pick the format from a file extension; anything not YAML is read as JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => DocumentFormat::Yaml,
            _ => DocumentFormat::Json,
        }
    }
}

/// Parse a service description from an in-memory document
pub fn service_from_str(content: &str, format: DocumentFormat) -> anyhow::Result<Service> {
    let service = match format {
        DocumentFormat::Yaml => serde_yaml::from_str(content)?,
        DocumentFormat::Json => serde_json::from_str(content)?,
    };
    Ok(service)
}

/// Load a resolved service description from a YAML or JSON file.
///
/// Group and route order is kept exactly as written in the document.
pub fn load_service(path: &Path) -> anyhow::Result<Service> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read service description: {}", path.display()))?;
    let service = service_from_str(&content, DocumentFormat::from_path(path))
        .with_context(|| format!("Failed to parse service description: {}", path.display()))?;
    tracing::debug!(
        path = %path.display(),
        groups = service.groups.len(),
        "loaded service description"
    );
    Ok(service)
}
