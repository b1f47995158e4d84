//! Grouping of a row window into per-package search results.

use std::collections::HashMap;

use crate::package::{PackageRow, SearchResult, SearchResultVersion};

/// Groups an already windowed, ordered row sequence into one result per package.
///
/// Results appear in the order each package id is first seen. Each result is
/// built only from the rows handed in: the latest version is the highest
/// semantic version present in the window and `total_downloads` sums just
/// those rows. Callers paginate before grouping, so a page may hold fewer
/// packages than rows and a package may miss versions that fell outside it.
pub fn group_by_package(rows: Vec<PackageRow>) -> Vec<SearchResult> {
    let mut groups: Vec<Vec<PackageRow>> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for row in rows {
        let key = row.folded_id();
        match positions.get(&key) {
            Some(&idx) => groups[idx].push(row),
            None => {
                positions.insert(key, groups.len());
                groups.push(vec![row]);
            }
        }
    }

    groups.into_iter().filter_map(build_result).collect()
}

fn build_result(mut versions: Vec<PackageRow>) -> Option<SearchResult> {
    versions.sort_by(|a, b| {
        b.version
            .cmp(&a.version)
            .then_with(|| b.version_string.cmp(&a.version_string))
    });

    let total_downloads = versions
        .iter()
        .fold(0u64, |acc, row| acc.saturating_add(row.downloads));
    let version_results = versions
        .iter()
        .map(|row| SearchResultVersion {
            version: row.version_string.clone(),
            downloads: row.downloads,
        })
        .collect();

    let latest = versions.into_iter().next()?;

    Some(SearchResult {
        id: latest.id,
        version: latest.version_string,
        title: latest.title,
        description: latest.description,
        summary: latest.summary,
        authors: latest.authors,
        tags: latest.tags,
        icon_url: latest.icon_url,
        license_url: latest.license_url,
        project_url: latest.project_url,
        total_downloads,
        versions: version_results,
    })
}
