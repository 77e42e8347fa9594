use std::path::PathBuf;
use tracing::info;

use super::emit::emit_routes;
use super::error::GenerateError;
use super::imports::{build_imports, PackageLayout};
use super::naming::{FileNamer, NamingStyle};
use super::routes::build_groups;
use super::templates::{RoutesTemplate, RoutesTemplateData};
use crate::spec::Service;

/// Base name of the generated file before the naming style is applied
pub const ROUTES_FILENAME: &str = "routes";
/// Extension of the generated file
pub const ROUTES_EXTENSION: &str = "go";

/// Everything a generation run needs besides the service itself
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Project output directory; the file lands in `<dir>/<handler_dir>/`
    pub dir: PathBuf,
    /// Go module path of the generated project, e.g. `github.com/acme/shop`
    pub root_package: String,
    pub layout: PackageLayout,
    /// File naming style, e.g. `gozero` or `go_zero`
    pub naming_format: String,
    pub template: RoutesTemplate,
}

impl GenerateOptions {
    pub fn new(dir: impl Into<PathBuf>, root_package: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            root_package: root_package.into(),
            layout: PackageLayout::default(),
            naming_format: "gozero".to_string(),
            template: RoutesTemplate::Builtin,
        }
    }

    /// Path the routes file is written to, given an already formatted name
    pub fn routes_path(&self, formatted_name: &str) -> PathBuf {
        let mut path = self.dir.clone();
        for segment in self.layout.handler_dir.split('/').filter(|s| !s.is_empty()) {
            path.push(segment);
        }
        path.join(format!("{formatted_name}.{ROUTES_EXTENSION}"))
    }
}

/// Generate the routes file, formatting its name with `options.naming_format`.
///
/// Returns the path of the written file.
pub fn generate_routes(service: &Service, options: &GenerateOptions) -> Result<PathBuf, GenerateError> {
    let style = NamingStyle::parse(&options.naming_format)?;
    generate_routes_with(service, options, &style)
}

/// Generate the routes file using a caller-supplied file namer
pub fn generate_routes_with(
    service: &Service,
    options: &GenerateOptions,
    namer: &dyn FileNamer,
) -> Result<PathBuf, GenerateError> {
    let groups = build_groups(service);

    let filename = namer.format_name(ROUTES_FILENAME)?;
    let path = options.routes_path(&filename);

    let data = RoutesTemplateData {
        import_packages: build_imports(service, &options.root_package, &options.layout),
        groups,
    };
    emit_routes(&path, &options.template, &data)?;

    info!(
        service = %service.name,
        path = %path.display(),
        "route registration generated"
    );
    Ok(path)
}

/// Build the path a run would write to without touching the file system
pub fn planned_routes_path(options: &GenerateOptions) -> Result<PathBuf, GenerateError> {
    let style = NamingStyle::parse(&options.naming_format)?;
    Ok(options.routes_path(&style.format_name(ROUTES_FILENAME)?))
}
