use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

use super::error::GenerateError;
use super::templates::{RoutesTemplate, RoutesTemplateData};

/// Render `data` through `template` and write the result to `path`.
///
/// Any existing file at `path` is removed first; a failed removal is ignored
/// and the write reports the problem instead. If rendering or writing fails
/// after the removal, no file is left at `path`.
pub fn emit_routes(
    path: &Path,
    template: &RoutesTemplate,
    data: &RoutesTemplateData,
) -> Result<(), GenerateError> {
    match fs::remove_file(path) {
        Ok(()) => debug!(path = %path.display(), "removed previous routes file"),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => debug!(path = %path.display(), error = %e, "could not remove previous routes file"),
    }

    let mut rendered = template.render(data)?;
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(GenerateError::io(parent))?;
    }
    fs::write(path, rendered).map_err(GenerateError::io(path))?;
    info!(path = %path.display(), groups = data.groups.len(), "generated routes file");
    Ok(())
}
