use nu_ansi_term::Color::{Blue, Cyan, Green, LightRed};
use sift_core::{AutocompleteRequest, Catalog, SearchService, Window};
use tabled::{
    builder::Builder,
    settings::{themes::BorderCorrection, Panel, Style},
};
use tracing::{debug, info};

use crate::utils::Colored;

pub fn search_packages<C: Catalog>(
    service: &SearchService<C>,
    query: &str,
    window: Window,
    show_versions: bool,
) -> Result<(), C::Error> {
    debug!(
        query = query,
        skip = window.skip,
        take = window.take,
        "running search"
    );

    let results = service.search(query, window)?;
    let version_rows: usize = results.iter().map(|r| r.versions.len()).sum();

    for result in &results {
        info!(
            id = result.id.as_str(),
            version = result.version.as_str(),
            total_downloads = result.total_downloads,
            description = result.description.as_deref(),
            authors = result.authors_display().as_str(),
            "{} {} | {} downloads{}",
            Colored(Blue, &result.id),
            Colored(LightRed, &result.version),
            Colored(Cyan, result.total_downloads),
            result
                .description
                .as_deref()
                .map(|d| format!(" - {d}"))
                .unwrap_or_default(),
        );

        if show_versions {
            for version in &result.versions {
                info!(
                    id = result.id.as_str(),
                    version = version.version.as_str(),
                    downloads = version.downloads,
                    "    {} ({} downloads)",
                    Colored(Green, &version.version),
                    version.downloads
                );
            }
        }
    }

    if results.is_empty() {
        info!("{}", Colored(LightRed, "No packages found"));
        return Ok(());
    }

    let mut builder = Builder::new();
    builder.push_record([
        "Packages".to_string(),
        format!("{}", Colored(Cyan, results.len())),
    ]);
    builder.push_record([
        "Version rows".to_string(),
        format!("{}", Colored(Green, version_rows)),
    ]);
    builder.push_record([
        "Window".to_string(),
        format!("skip {} / take {}", window.skip, window.take),
    ]);

    let table = builder
        .build()
        .with(Panel::header("Search Results"))
        .with(Style::rounded())
        .with(BorderCorrection {})
        .to_string();

    info!("\n{table}");

    Ok(())
}

pub fn autocomplete<C: Catalog>(
    service: &SearchService<C>,
    request: &AutocompleteRequest,
) -> Result<(), C::Error> {
    debug!(
        query = request.query.as_deref(),
        id = request.id.as_deref(),
        prerelease = request.prerelease,
        "running autocomplete"
    );

    let suggestions = service.autocomplete(request)?;
    for suggestion in &suggestions {
        info!(suggestion = suggestion.as_str(), "{suggestion}");
    }

    Ok(())
}
