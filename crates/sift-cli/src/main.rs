use std::{fs, path::PathBuf};

use clap::Parser;
use cli::{Args, Commands};
use error::{CliError, CliResult};
use import::import_rows;
use logging::setup_logging;
use search::{autocomplete, search_packages};
use sift_config::config::{self, get_config, set_config_path, Config};
use sift_core::{AutocompleteRequest, SearchService, Window};
use sift_db::SqliteCatalog;
use tracing::debug;
use utils::set_color;

mod cli;
mod error;
mod import;
mod logging;
mod search;
mod utils;

fn open_catalog(args: &Args, config: &Config) -> CliResult<SqliteCatalog> {
    let path = args
        .db
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(|| config.get_db_path());

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|source| CliError::IoError {
            action: format!("creating directory {}", parent.display()),
            source,
        })?;
    }

    Ok(SqliteCatalog::open(&path)?)
}

fn resolve_window(config: &Config, skip: Option<usize>, take: Option<usize>) -> Window {
    Window::from_options(skip, take.or(Some(config.search_limit())))
}

fn resolve_prerelease(config: &Config, prerelease: bool, no_prerelease: bool) -> bool {
    if prerelease {
        true
    } else if no_prerelease {
        false
    } else {
        config.prerelease()
    }
}

fn handle_cli() -> CliResult<()> {
    let args = Args::parse();

    setup_logging(&args);
    set_color(!args.no_color);

    if let Some(ref path) = args.config {
        set_config_path(path);
    }
    config::init()?;
    let config = get_config();
    debug!(
        config = %config::config_path().display(),
        db = %config.get_db_path().display(),
        "loaded configuration"
    );

    match args.command {
        Commands::Config => {
            println!("{}", config.to_toml()?);
        }
        Commands::Import {
            ref file,
            replace,
        } => {
            let catalog = open_catalog(&args, &config)?;
            import_rows(&catalog, file, replace)?;
        }
        Commands::Search {
            ref query,
            skip,
            take,
            versions,
        } => {
            let service = SearchService::builder()
                .catalog(open_catalog(&args, &config)?)
                .build()?;
            search_packages(&service, query, resolve_window(&config, skip, take), versions)?;
        }
        Commands::Autocomplete {
            ref query,
            ref id,
            ref framework,
            skip,
            take,
            prerelease,
            no_prerelease,
        } => {
            let service = SearchService::builder()
                .catalog(open_catalog(&args, &config)?)
                .build()?;

            let mut request = AutocompleteRequest::by_query(query.as_str())
                .with_window(resolve_window(&config, skip, take))
                .with_prerelease(resolve_prerelease(&config, prerelease, no_prerelease));
            request.id = id.clone();
            request.supported_framework = framework.clone();

            autocomplete(&service, &request)?;
        }
    }

    Ok(())
}

fn main() {
    miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .build(),
        )
    }))
    .ok();

    if let Err(err) = handle_cli() {
        eprintln!("{:?}", miette::Report::new(err));
        std::process::exit(1);
    }
}
