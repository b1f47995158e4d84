use miette::Diagnostic;
use sift_config::error::ConfigError;
use sift_core::CoreError;
use sift_db::DbError;
use thiserror::Error;

/// Errors surfaced by the `sift` binary.
#[derive(Error, Diagnostic, Debug)]
pub enum CliError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Database(#[from] DbError),

    #[error("Error while {action}")]
    #[diagnostic(code(sift::io), help("Check file permissions and disk space"))]
    IoError {
        action: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse package rows from {path}")]
    #[diagnostic(
        code(sift::import_format),
        help("Import files are JSON arrays of objects with at least `id` and `version`")
    )]
    ImportFormat {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type CliResult<T> = std::result::Result<T, CliError>;
