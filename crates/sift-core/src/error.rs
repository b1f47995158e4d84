//! Error types for sift-core.

use miette::Diagnostic;
use thiserror::Error;

/// Core error type for catalog rows and service construction.
///
/// Query operations never produce this type: they are total over their input
/// and only surface the catalog's own error.
#[derive(Error, Diagnostic, Debug)]
pub enum CoreError {
    #[error("Search service has no catalog to query")]
    #[diagnostic(
        code(sift_core::missing_catalog),
        help("Supply a catalog with `SearchService::builder().catalog(..)` before calling `build()`")
    )]
    MissingCatalog,

    #[error("Invalid package version '{version}'")]
    #[diagnostic(
        code(sift_core::invalid_version),
        help("Versions must look like MAJOR[.MINOR[.PATCH[.REVISION]]][-PRERELEASE][+BUILD]")
    )]
    InvalidVersion {
        version: String,
        #[source]
        source: semver::Error,
    },

    #[error("Invalid revision in package version '{version}'")]
    #[diagnostic(
        code(sift_core::invalid_revision),
        help("The fourth version component must be a non-negative integer, as in 1.2.3.4")
    )]
    InvalidRevision {
        version: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("Package id must not be empty")]
    #[diagnostic(
        code(sift_core::empty_id),
        help("Every catalog row needs a non-empty package id")
    )]
    EmptyPackageId,
}

/// Result type alias for sift-core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
