use std::collections::HashSet;

use super::naming::to_prefix;
use crate::spec::{resolve_folder, Service};

/// Where generated packages live relative to the project's root package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageLayout {
    /// Handler package directory, e.g. `internal/handler`
    pub handler_dir: String,
    /// Shared service-context package directory, e.g. `internal/svc`
    pub context_dir: String,
    /// Import path of the web framework's route package
    pub rest_package: String,
}

impl Default for PackageLayout {
    fn default() -> Self {
        Self {
            handler_dir: "internal/handler".to_string(),
            context_dir: "internal/svc".to_string(),
            rest_package: "github.com/zeromicro/go-zero/rest".to_string(),
        }
    }
}

/// Join Go package path segments with `/`, skipping empty segments and
/// collapsing separators at the seams.
pub fn join_packages(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim_matches('/'))
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join("/")
}

/// Build the import block for the routes file.
///
/// Contains the service-context import and one aliased import per distinct
/// grouping folder, sorted by literal text, then a blank line and the
/// framework's route package.
pub fn build_imports(service: &Service, root_package: &str, layout: &PackageLayout) -> String {
    let mut import_set = HashSet::new();
    import_set.insert(format!(
        "\"{}\"",
        join_packages(&[root_package, layout.context_dir.as_str()])
    ));

    for group in &service.groups {
        for route in &group.routes {
            let Some(folder) = resolve_folder(route, group) else {
                continue;
            };
            import_set.insert(format!(
                "{} \"{}\"",
                to_prefix(folder),
                join_packages(&[root_package, layout.handler_dir.as_str(), folder])
            ));
        }
    }

    // Set iteration order is unspecified; sort by literal text.
    let mut imports: Vec<String> = import_set.into_iter().collect();
    imports.sort();

    let project_section = imports.join("\n\t");
    let dep_section = format!("\"{}\"", layout.rest_package);
    format!("{project_section}\n\n\t{dep_section}")
}
