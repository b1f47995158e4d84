//! Query normalization, row filters and row orderings.
//!
//! These types describe a catalog query independently of any storage engine.
//! [`crate::catalog::MemoryCatalog`] evaluates them directly; database-backed
//! catalogs translate them into their own query language and must produce the
//! same rows in the same order.

use std::cmp::Ordering;

use crate::package::PackageRow;

/// Locale-independent case fold used for every id comparison.
pub fn fold_case(value: &str) -> String {
    value.to_lowercase()
}

/// Normalizes free-text input. An empty result means "match everything".
pub fn normalize_query(query: Option<&str>) -> String {
    query.map(|q| fold_case(q.trim())).unwrap_or_default()
}

/// How a row's id is matched against the query text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextMatch {
    /// Every id matches.
    Any,
    /// The folded id contains the (already folded) needle.
    Contains(String),
    /// The folded id equals the (already folded) id.
    Exact(String),
}

impl TextMatch {
    /// Substring match on a raw query; blank input matches all ids.
    pub fn substring(query: &str) -> Self {
        let needle = normalize_query(Some(query));
        if needle.is_empty() {
            TextMatch::Any
        } else {
            TextMatch::Contains(needle)
        }
    }

    pub fn exact(id: &str) -> Self {
        TextMatch::Exact(normalize_query(Some(id)))
    }

    pub fn matches_folded(&self, folded_id: &str) -> bool {
        match self {
            TextMatch::Any => true,
            TextMatch::Contains(needle) => folded_id.contains(needle.as_str()),
            TextMatch::Exact(id) => folded_id == id,
        }
    }
}

/// Predicate selecting visible catalog rows.
///
/// Unlisted rows never match; there is no way to opt into them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowFilter {
    pub text: TextMatch,
    pub include_prerelease: bool,
}

impl RowFilter {
    pub fn new(text: TextMatch, include_prerelease: bool) -> Self {
        Self {
            text,
            include_prerelease,
        }
    }

    pub fn matches(&self, row: &PackageRow) -> bool {
        row.listed
            && (self.include_prerelease || !row.is_prerelease())
            && self.text.matches_folded(&row.folded_id())
    }
}

/// Ordering requested from the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowOrder {
    /// Downloads descending; ties by folded id, raw version string, then raw
    /// id, all ascending.
    DownloadsDesc,
    /// Raw version string descending, compared byte-wise (so `"10.0.0"`
    /// sorts before `"2.0.0"`); ties by raw id ascending.
    VersionStringDesc,
}

impl RowOrder {
    pub fn compare(&self, a: &PackageRow, b: &PackageRow) -> Ordering {
        match self {
            RowOrder::DownloadsDesc => b
                .downloads
                .cmp(&a.downloads)
                .then_with(|| a.folded_id().cmp(&b.folded_id()))
                .then_with(|| a.version_string.cmp(&b.version_string))
                .then_with(|| a.id.cmp(&b.id)),
            RowOrder::VersionStringDesc => b
                .version_string
                .cmp(&a.version_string)
                .then_with(|| a.id.cmp(&b.id)),
        }
    }
}

/// A complete catalog request: which rows, in which order.
///
/// `limit` is a hint: a catalog may stop after that many rows of the ordered
/// sequence, but returning more is never wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowQuery {
    pub filter: RowFilter,
    pub order: RowOrder,
    pub limit: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, version: &str) -> PackageRow {
        PackageRow::new(id, version).unwrap()
    }

    #[test]
    fn test_normalize_query() {
        assert_eq!(normalize_query(None), "");
        assert_eq!(normalize_query(Some("   ")), "");
        assert_eq!(normalize_query(Some("  FooBar ")), "foobar");
    }

    #[test]
    fn test_substring_blank_is_any() {
        assert_eq!(TextMatch::substring(""), TextMatch::Any);
        assert_eq!(TextMatch::substring(" \t"), TextMatch::Any);
        assert_eq!(TextMatch::substring("Js"), TextMatch::Contains("js".into()));
    }

    #[test]
    fn test_filter_matching() {
        let filter = RowFilter::new(TextMatch::substring("json"), false);

        assert!(filter.matches(&row("Newtonsoft.Json", "1.0.0")));
        assert!(!filter.matches(&row("Serilog", "1.0.0")));
        assert!(!filter.matches(&row("Newtonsoft.Json", "1.0.0").with_listed(false)));
        assert!(!filter.matches(&row("Newtonsoft.Json", "2.0.0-beta")));

        let with_pre = RowFilter::new(TextMatch::substring("json"), true);
        assert!(with_pre.matches(&row("Newtonsoft.Json", "2.0.0-beta")));
    }

    #[test]
    fn test_exact_is_case_insensitive() {
        let filter = RowFilter::new(TextMatch::exact("FOO"), true);
        assert!(filter.matches(&row("foo", "1.0.0")));
        assert!(filter.matches(&row("Foo", "1.0.0")));
        assert!(!filter.matches(&row("Foo.Bar", "1.0.0")));
    }

    #[test]
    fn test_fold_is_unicode_aware() {
        let filter = RowFilter::new(TextMatch::substring("ÄPFEL"), true);
        assert!(filter.matches(&row("Äpfel.Core", "1.0.0")));
    }

    #[test]
    fn test_downloads_order_tiebreak() {
        let mut rows = vec![
            row("b", "1.0.0").with_downloads(5),
            row("A", "2.0.0").with_downloads(5),
            row("a", "1.0.0").with_downloads(5),
            row("c", "1.0.0").with_downloads(9),
        ];
        rows.sort_by(|a, b| RowOrder::DownloadsDesc.compare(a, b));

        let keys: Vec<_> = rows
            .iter()
            .map(|r| format!("{}@{}", r.id, r.version_string))
            .collect();
        assert_eq!(keys, vec!["c@1.0.0", "a@1.0.0", "A@2.0.0", "b@1.0.0"]);
    }

    #[test]
    fn test_version_string_order_is_lexicographic() {
        let mut rows = vec![row("Foo", "2.0.0"), row("Foo", "10.0.0"), row("Foo", "9.1")];
        rows.sort_by(|a, b| RowOrder::VersionStringDesc.compare(a, b));

        let versions: Vec<_> = rows.iter().map(|r| r.version_string.as_str()).collect();
        assert_eq!(versions, vec!["9.1", "2.0.0", "10.0.0"]);
    }
}
