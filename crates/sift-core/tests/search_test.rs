use sift_core::{AutocompleteRequest, MemoryCatalog, PackageRow, SearchService, Window};

fn row(id: &str, version: &str, downloads: u64) -> PackageRow {
    PackageRow::new(id, version)
        .unwrap()
        .with_downloads(downloads)
}

fn base_catalog() -> Vec<PackageRow> {
    vec![
        row("Foo", "1.0.0", 500),
        row("Foo", "2.0.0", 100),
        row("Bar", "1.0.0", 10),
    ]
}

fn service(rows: Vec<PackageRow>) -> SearchService<MemoryCatalog> {
    SearchService::new(MemoryCatalog::new(rows))
}

#[test]
fn search_groups_versions_of_a_package() {
    let service = service(base_catalog());

    let results = service.search("foo", Window::new(0, 20)).unwrap();

    assert_eq!(results.len(), 1);
    let foo = &results[0];
    assert_eq!(foo.id, "Foo");
    assert_eq!(foo.version, "2.0.0");
    assert_eq!(foo.total_downloads, 600);
    let versions: Vec<_> = foo
        .versions
        .iter()
        .map(|v| (v.version.as_str(), v.downloads))
        .collect();
    assert_eq!(versions, vec![("2.0.0", 100), ("1.0.0", 500)]);
}

#[test]
fn search_windows_rows_before_grouping() {
    let service = service(base_catalog());

    let results = service.search("", Window::new(0, 1)).unwrap();

    assert_eq!(results.len(), 1);
    let foo = &results[0];
    assert_eq!(foo.id, "Foo");
    assert_eq!(foo.version, "1.0.0");
    assert_eq!(foo.total_downloads, 500);
    assert_eq!(foo.versions.len(), 1);
}

#[test]
fn search_page_may_hold_fewer_packages_than_take() {
    let service = service(base_catalog());

    let results = service.search("", Window::new(0, 2)).unwrap();
    assert_eq!(results.len(), 1);

    let results = service.search("", Window::new(1, 2)).unwrap();
    let ids: Vec<_> = results.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["Foo", "Bar"]);
    assert_eq!(results[0].version, "2.0.0");
    assert_eq!(results[0].total_downloads, 100);
}

#[test]
fn search_is_case_insensitive_substring() {
    let service = service(vec![
        row("Newtonsoft.Json", "13.0.1", 900),
        row("System.Text.Json", "8.0.0", 800),
        row("Serilog", "3.0.0", 700),
    ]);

    let results = service.search("  JSON ", Window::default()).unwrap();

    let ids: Vec<_> = results.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["Newtonsoft.Json", "System.Text.Json"]);
}

#[test]
fn search_includes_prerelease_versions() {
    let service = service(vec![
        row("Baz", "1.0.0-beta", 1000),
        row("Baz", "0.9.0", 5),
    ]);

    let results = service.search("baz", Window::default()).unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].version, "1.0.0-beta");
    assert_eq!(results[0].total_downloads, 1005);
}

#[test]
fn search_versions_are_strictly_descending_and_totals_match() {
    let service = service(vec![
        row("Foo", "1.0.0", 3),
        row("Foo", "1.10.0", 1),
        row("Foo", "1.2.0", 7),
        row("Foo", "2.0.0-rc.1", 2),
        row("Foo", "2.0.0", 4),
    ]);

    let results = service.search("foo", Window::default()).unwrap();
    let foo = &results[0];

    let parsed: Vec<_> = foo
        .versions
        .iter()
        .map(|v| sift_core::PackageVersion::parse(&v.version).unwrap())
        .collect();
    assert!(parsed.windows(2).all(|pair| pair[0] > pair[1]));
    assert_eq!(
        foo.total_downloads,
        foo.versions.iter().map(|v| v.downloads).sum::<u64>()
    );
    assert_eq!(foo.version, "2.0.0");
}

#[test]
fn autocomplete_by_query_excludes_prerelease_only_packages() {
    let mut rows = base_catalog();
    rows.push(row("Baz", "1.0.0-beta", 1000));
    let service = service(rows);

    let ids = service.autocomplete_by_query("", Window::default()).unwrap();
    assert_eq!(ids, vec!["Foo".to_string(), "Bar".to_string()]);

    let request = AutocompleteRequest::by_query("").with_prerelease(true);
    let ids = service.autocomplete(&request).unwrap();
    assert_eq!(
        ids,
        vec!["Baz".to_string(), "Foo".to_string(), "Bar".to_string()]
    );
}

#[test]
fn autocomplete_by_query_deduplicates_after_windowing() {
    let service = service(base_catalog());

    let ids = service.autocomplete_by_query("", Window::new(0, 2)).unwrap();

    assert_eq!(ids, vec!["Foo".to_string()]);
}

#[test]
fn autocomplete_by_id_orders_by_raw_version_string() {
    let service = service(vec![
        row("Foo", "1.0.0", 1),
        row("Foo", "2.0.0", 1),
        row("Foo", "10.0.0", 1),
        row("Bar", "9.0.0", 1),
    ]);

    let request = AutocompleteRequest::by_id("foo").with_prerelease(true);
    let versions = service.autocomplete(&request).unwrap();

    assert_eq!(
        versions,
        vec!["2.0.0".to_string(), "10.0.0".to_string(), "1.0.0".to_string()]
    );
}

#[test]
fn autocomplete_by_id_lists_versions() {
    let service = service(base_catalog());

    let mut request = AutocompleteRequest::by_id("Foo").with_prerelease(true);
    request.query = Some(String::new());
    let versions = service.autocomplete(&request).unwrap();

    assert_eq!(versions, vec!["2.0.0".to_string(), "1.0.0".to_string()]);
}

#[test]
fn autocomplete_by_id_respects_prerelease_and_window() {
    let service = service(vec![
        row("Foo", "1.0.0", 1),
        row("Foo", "1.1.0-beta", 1),
        row("Foo", "1.2.0", 1),
    ]);

    let versions = service.autocomplete(&AutocompleteRequest::by_id("Foo")).unwrap();
    assert_eq!(versions, vec!["1.2.0".to_string(), "1.0.0".to_string()]);

    let request = AutocompleteRequest::by_id("Foo")
        .with_prerelease(true)
        .with_window(Window::new(1, 1));
    let versions = service.autocomplete(&request).unwrap();
    assert_eq!(versions, vec!["1.1.0-beta".to_string()]);
}

#[test]
fn autocomplete_ignores_supported_framework() {
    let service = service(base_catalog());

    let plain = service
        .autocomplete(&AutocompleteRequest::by_id("Foo"))
        .unwrap();
    let with_framework = service
        .autocomplete(&AutocompleteRequest::by_id("Foo").with_supported_framework("net8.0"))
        .unwrap();

    assert_eq!(plain, with_framework);
}

#[test]
fn id_takes_precedence_over_query() {
    let service = service(base_catalog());

    let mut request = AutocompleteRequest::by_id("Bar");
    request.query = Some("foo".into());

    assert_eq!(
        service.autocomplete(&request).unwrap(),
        vec!["1.0.0".to_string()]
    );
}

#[test]
fn whitespace_id_looks_up_versions_and_matches_nothing() {
    let service = service(vec![row("Foo", "1.0.0", 1)]);

    let request = AutocompleteRequest::by_id(" ").with_prerelease(true);
    assert!(service.autocomplete(&request).unwrap().is_empty());
}

#[test]
fn four_part_versions_sort_after_their_patch() {
    let service = service(vec![
        row("Legacy", "1.0.0", 1),
        row("Legacy", "1.0.0.9", 2),
        row("Legacy", "1.0.0.10", 4),
    ]);

    let results = service.search("legacy", Window::default()).unwrap();
    let versions: Vec<_> = results[0]
        .versions
        .iter()
        .map(|v| v.version.as_str())
        .collect();

    assert_eq!(versions, vec!["1.0.0.10", "1.0.0.9", "1.0.0"]);
    assert_eq!(results[0].version, "1.0.0.10");
    assert_eq!(results[0].total_downloads, 7);
}

#[test]
fn unlisted_rows_are_never_returned() {
    let service = service(vec![
        row("Hidden", "1.0.0", 1000).with_listed(false),
        row("Hidden", "2.0.0", 1).with_listed(false),
        row("Shown", "1.0.0", 1),
    ]);

    let results = service.search("", Window::default()).unwrap();
    assert!(results.iter().all(|r| r.id != "Hidden"));
    assert!(service.search("hidden", Window::default()).unwrap().is_empty());

    let ids = service.autocomplete_by_query("", Window::default()).unwrap();
    assert_eq!(ids, vec!["Shown".to_string()]);

    let request = AutocompleteRequest::by_id("Hidden").with_prerelease(true);
    assert!(service.autocomplete(&request).unwrap().is_empty());
}

#[test]
fn empty_catalog_yields_empty_lists() {
    let service = service(Vec::new());

    assert!(service.search("", Window::default()).unwrap().is_empty());
    assert!(service.search("foo", Window::new(5, 5)).unwrap().is_empty());
    assert!(service
        .autocomplete_by_query("foo", Window::default())
        .unwrap()
        .is_empty());
    assert!(service
        .autocomplete(&AutocompleteRequest::by_id("foo"))
        .unwrap()
        .is_empty());
}

#[test]
fn default_window_takes_twenty_rows() {
    let rows = (0..30)
        .map(|i| row(&format!("Pkg{i:02}"), "1.0.0", 100 - i))
        .collect();
    let service = service(rows);

    let results = service.search("pkg", Window::default()).unwrap();
    assert_eq!(results.len(), 20);
    assert_eq!(results[0].id, "Pkg00");

    let request = AutocompleteRequest::by_query("pkg");
    assert_eq!(service.autocomplete(&request).unwrap().len(), 20);
}
