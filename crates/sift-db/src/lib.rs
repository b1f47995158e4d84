//! SQLite storage for the sift package catalog.
//!
//! - [`SqliteCatalog`] - the [`sift_core::Catalog`] used by the search service
//! - [`PackageRepository`] - diesel queries over the `packages` table

pub mod catalog;
pub mod connection;
pub mod error;
pub mod migration;
pub mod models;
pub mod repository;
pub mod schema;

pub use catalog::SqliteCatalog;
pub use error::{DbError, Result};
pub use repository::PackageRepository;
