//! The search service: catalog query pipelines for search and autocomplete.

use tracing::{debug, trace};

use crate::{
    aggregate::group_by_package,
    autocomplete::{distinct_ids, distinct_versions, AutocompleteMode, AutocompleteRequest},
    catalog::Catalog,
    error::{CoreError, Result},
    package::{PackageRow, SearchResult},
    query::{RowFilter, RowOrder, RowQuery, TextMatch},
    window::Window,
};

/// Answers search and autocomplete requests by querying a [`Catalog`] live.
///
/// Every pipeline runs filter, order, window and then group or deduplicate,
/// in that order. Because the window is cut from version rows before they are
/// grouped, a page can return fewer packages or suggestions than `take`.
#[derive(Debug, Clone)]
pub struct SearchService<C> {
    catalog: C,
}

impl<C: Catalog> SearchService<C> {
    pub fn new(catalog: C) -> Self {
        Self { catalog }
    }

    pub fn builder() -> SearchServiceBuilder<C> {
        SearchServiceBuilder { catalog: None }
    }

    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Accepts a newly published row. The catalog is always queried directly,
    /// so there is nothing to index.
    pub fn index(&self, row: &PackageRow) {
        trace!(
            id = row.id.as_str(),
            version = row.version_string.as_str(),
            "index request ignored"
        );
    }

    /// Searches listed packages whose id contains `query`, prereleases included.
    pub fn search(
        &self,
        query: &str,
        window: Window,
    ) -> std::result::Result<Vec<SearchResult>, C::Error> {
        debug!(
            query = query,
            skip = window.skip,
            take = window.take,
            "searching packages"
        );

        let rows = self.windowed_rows(
            RowFilter::new(TextMatch::substring(query), true),
            RowOrder::DownloadsDesc,
            window,
        )?;
        let results = group_by_package(rows);

        trace!(results = results.len(), "grouped search window");
        Ok(results)
    }

    /// Suggests package ids containing `query`, excluding prereleases.
    pub fn autocomplete_by_query(
        &self,
        query: &str,
        window: Window,
    ) -> std::result::Result<Vec<String>, C::Error> {
        self.autocomplete_ids(query, window, false)
    }

    /// Routes to version suggestions when `request.id` is set, id suggestions otherwise.
    pub fn autocomplete(
        &self,
        request: &AutocompleteRequest,
    ) -> std::result::Result<Vec<String>, C::Error> {
        match request.mode() {
            AutocompleteMode::ById(id) => {
                self.autocomplete_versions(id, request.window, request.prerelease)
            }
            AutocompleteMode::ByQuery(query) => {
                self.autocomplete_ids(query, request.window, request.prerelease)
            }
        }
    }

    fn autocomplete_ids(
        &self,
        query: &str,
        window: Window,
        prerelease: bool,
    ) -> std::result::Result<Vec<String>, C::Error> {
        debug!(
            query = query,
            skip = window.skip,
            take = window.take,
            prerelease = prerelease,
            "autocompleting package ids"
        );

        let rows = self.windowed_rows(
            RowFilter::new(TextMatch::substring(query), prerelease),
            RowOrder::DownloadsDesc,
            window,
        )?;
        Ok(distinct_ids(rows))
    }

    fn autocomplete_versions(
        &self,
        id: &str,
        window: Window,
        prerelease: bool,
    ) -> std::result::Result<Vec<String>, C::Error> {
        debug!(
            id = id,
            skip = window.skip,
            take = window.take,
            prerelease = prerelease,
            "autocompleting package versions"
        );

        let rows = self.windowed_rows(
            RowFilter::new(TextMatch::exact(id), prerelease),
            RowOrder::VersionStringDesc,
            window,
        )?;
        Ok(distinct_versions(rows))
    }

    fn windowed_rows(
        &self,
        filter: RowFilter,
        order: RowOrder,
        window: Window,
    ) -> std::result::Result<Vec<PackageRow>, C::Error> {
        let query = RowQuery {
            filter,
            order,
            limit: Some(window.end()),
        };
        let rows = self.catalog.rows(&query)?;
        let fetched = rows.len();
        let rows = window.apply(rows);

        trace!(
            fetched = fetched,
            windowed = rows.len(),
            "applied pagination window"
        );
        Ok(rows)
    }
}

/// Builder for [`SearchService`] that reports a missing catalog as an error.
#[derive(Debug)]
pub struct SearchServiceBuilder<C> {
    catalog: Option<C>,
}

impl<C: Catalog> SearchServiceBuilder<C> {
    pub fn catalog(mut self, catalog: C) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn build(self) -> Result<SearchService<C>> {
        let catalog = self.catalog.ok_or(CoreError::MissingCatalog)?;
        Ok(SearchService::new(catalog))
    }
}
