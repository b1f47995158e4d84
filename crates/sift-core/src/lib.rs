//! Search and autocomplete over a catalog of published package versions.
//!
//! The [`SearchService`] runs each request as an explicit pipeline over a
//! [`Catalog`]: normalize the query, filter listed rows, order them, cut the
//! skip/take window, and finally group rows into [`SearchResult`]s or project
//! them to distinct suggestions.

pub mod aggregate;
pub mod autocomplete;
pub mod catalog;
pub mod error;
pub mod package;
pub mod query;
pub mod service;
pub mod version;
pub mod window;

pub use autocomplete::AutocompleteRequest;
pub use catalog::{Catalog, MemoryCatalog};
pub use error::{CoreError, Result};
pub use package::{PackageRecord, PackageRow, SearchResult, SearchResultVersion};
pub use query::{RowFilter, RowOrder, RowQuery, TextMatch};
pub use service::{SearchService, SearchServiceBuilder};
pub use version::PackageVersion;
pub use window::Window;
