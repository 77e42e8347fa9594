//! Generator configuration for routegen
//!
//! Settings live in a `routegen.toml` file that sits alongside the service
//! description (or is passed explicitly). Command-line flags override file values.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::generator::{GenerateOptions, PackageLayout, RoutesTemplate};

/// File name looked up next to the service description
pub const CONFIG_FILE_NAME: &str = "routegen.toml";

/// Configuration loaded from `routegen.toml`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Go module path of the generated project
    pub root_package: Option<String>,
    /// Handler package directory relative to the project root
    pub handler_dir: String,
    /// Service-context package directory relative to the project root
    pub context_dir: String,
    /// Import path of the framework's route package
    pub rest_package: String,
    /// File naming style (`gozero`, `go_zero`, `GoZero`, ...)
    pub naming_format: String,
    /// Optional override for the built-in routes template
    pub template: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let layout = PackageLayout::default();
        Self {
            root_package: None,
            handler_dir: layout.handler_dir,
            context_dir: layout.context_dir,
            rest_package: layout.rest_package,
            naming_format: "gozero".to_string(),
            template: None,
        }
    }
}

impl GeneratorConfig {
    pub fn layout(&self) -> PackageLayout {
        PackageLayout {
            handler_dir: self.handler_dir.clone(),
            context_dir: self.context_dir.clone(),
            rest_package: self.rest_package.clone(),
        }
    }

    /// Build generation options for output directory `dir`.
    ///
    /// Fails when no root package is configured or the override template
    /// cannot be read or compiled.
    pub fn to_options(&self, dir: &Path) -> anyhow::Result<GenerateOptions> {
        let root_package = self
            .root_package
            .clone()
            .filter(|p| !p.is_empty())
            .ok_or_else(|| {
                anyhow::anyhow!("root package is required (use --root-package or set root_package in {CONFIG_FILE_NAME})")
            })?;
        let template = RoutesTemplate::from_override(self.template.as_deref())?;
        Ok(GenerateOptions {
            dir: dir.to_path_buf(),
            root_package,
            layout: self.layout(),
            naming_format: self.naming_format.clone(),
            template,
        })
    }
}

/// Load generator configuration from a TOML file
///
/// # Returns
///
/// Returns `Ok(Some(config))` if file exists and parses successfully,
/// `Ok(None)` if file doesn't exist (not an error),
/// `Err` if file exists but fails to parse.
pub fn load_config(config_path: &Path) -> anyhow::Result<Option<GeneratorConfig>> {
    if !config_path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read generator config: {}", config_path.display()))?;

    let mut config: GeneratorConfig = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse generator config: {}", config_path.display()))?;

    // Template paths in the file are relative to the file itself
    if let (Some(template), Some(base)) = (config.template.as_mut(), config_path.parent()) {
        if template.is_relative() {
            *template = base.join(&*template);
        }
    }

    tracing::debug!(path = %config_path.display(), "loaded generator config");
    Ok(Some(config))
}

/// Auto-detect `routegen.toml` alongside the service description
pub fn auto_detect_config_path(api_path: &Path) -> Option<PathBuf> {
    let config_path = api_path.parent()?.join(CONFIG_FILE_NAME);
    if config_path.exists() {
        Some(config_path)
    } else {
        None
    }
}

/// Resolve the config path
///
/// Priority:
/// 1. Explicitly provided path (via CLI)
/// 2. Auto-detected alongside the service description
/// 3. None (defaults)
pub fn resolve_config_path(explicit_path: Option<&Path>, api_path: &Path) -> Option<PathBuf> {
    match explicit_path {
        Some(path) => Some(path.to_path_buf()),
        None => auto_detect_config_path(api_path),
    }
}

/// Load the effective configuration for a service description.
///
/// An explicitly named config file must exist; an auto-detected one is optional.
pub fn load_effective_config(
    explicit_path: Option<&Path>,
    api_path: &Path,
) -> anyhow::Result<GeneratorConfig> {
    let Some(path) = resolve_config_path(explicit_path, api_path) else {
        return Ok(GeneratorConfig::default());
    };
    match load_config(&path)? {
        Some(config) => Ok(config),
        None if explicit_path.is_some() => {
            anyhow::bail!("Generator config not found: {}", path.display())
        }
        None => Ok(GeneratorConfig::default()),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use std::fs;

    #[test]
    fn test_missing_config_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(&dir.path().join(CONFIG_FILE_NAME)).unwrap().is_none());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "root_package = \"github.com/acme/shop\"\nnaming_format = \"go_zero\"\n").unwrap();

        let config = load_config(&path).unwrap().unwrap();
        assert_eq!(config.root_package.as_deref(), Some("github.com/acme/shop"));
        assert_eq!(config.naming_format, "go_zero");
        assert_eq!(config.handler_dir, "internal/handler");
        assert_eq!(config.context_dir, "internal/svc");
    }

    #[test]
    fn test_unknown_key_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "root_pkg = \"x\"\n").unwrap();
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn test_template_path_relative_to_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "template = \"tpl/routes.tpl\"\n").unwrap();
        let config = load_config(&path).unwrap().unwrap();
        assert_eq!(config.template, Some(dir.path().join("tpl/routes.tpl")));
    }

    #[test]
    fn test_auto_detect_next_to_api() {
        let dir = tempfile::tempdir().unwrap();
        let api = dir.path().join("shop.yaml");
        assert!(auto_detect_config_path(&api).is_none());

        fs::write(dir.path().join(CONFIG_FILE_NAME), "").unwrap();
        assert_eq!(
            resolve_config_path(None, &api),
            Some(dir.path().join(CONFIG_FILE_NAME))
        );
        let explicit = dir.path().join("other.toml");
        assert_eq!(
            resolve_config_path(Some(explicit.as_path()), &api),
            Some(explicit.clone())
        );
        assert!(load_effective_config(Some(explicit.as_path()), &api).is_err());
    }

    #[test]
    fn test_to_options_requires_root_package() {
        let dir = tempfile::tempdir().unwrap();
        let err = GeneratorConfig::default().to_options(dir.path()).unwrap_err();
        assert!(err.to_string().contains("root package is required"));

        let config = GeneratorConfig {
            root_package: Some("github.com/acme/shop".to_string()),
            ..GeneratorConfig::default()
        };
        let options = config.to_options(dir.path()).unwrap();
        assert_eq!(options.root_package, "github.com/acme/shop");
        assert_eq!(options.layout, PackageLayout::default());
    }
}
