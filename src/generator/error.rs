use std::path::PathBuf;

/// Failure of a route generation run.
///
/// Every variant is terminal for the current run; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum GenerateError {
    /// The file naming style could not format the output file name
    #[error("invalid naming format '{format}': {reason}")]
    NamingFormat { format: String, reason: String },

    /// An override template failed to compile
    #[error("invalid routes template: {0}")]
    Template(#[source] minijinja::Error),

    /// The routes template failed while rendering
    #[error("failed to render routes template: {0}")]
    Render(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),

    /// Reading the template or writing the generated file failed
    #[error("file system error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenerateError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| GenerateError::Io { path, source }
    }
}
