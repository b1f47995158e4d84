use clap::{ArgAction, Parser, Subcommand, ValueHint};

#[derive(Parser)]
#[command(
    author,
    version,
    about,
    help_template = "{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}",
    arg_required_else_help = true
)]
pub struct Args {
    /// Set output verbosity
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress outputs
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output as json
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Provide custom config file
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<String>,

    /// Use this catalog database instead of the configured one
    #[arg(long, global = true, value_hint = ValueHint::FilePath)]
    pub db: Option<String>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the effective configuration to stdout
    Config,

    /// Import package rows from a JSON file into the catalog
    #[command(arg_required_else_help = true)]
    Import {
        /// JSON file holding an array of package rows
        #[arg(required = true, value_hint = ValueHint::FilePath)]
        file: String,

        /// Remove every existing row before importing
        #[arg(required = false, long)]
        replace: bool,
    },

    /// Search packages by id
    #[clap(name = "search", visible_alias = "s", visible_alias = "find")]
    Search {
        /// Text the package id must contain; empty matches everything
        #[arg(required = false, default_value = "")]
        query: String,

        /// Number of version rows to skip
        #[arg(required = false, long)]
        skip: Option<usize>,

        /// Number of version rows to take
        #[arg(required = false, long)]
        take: Option<usize>,

        /// Show the versions included in each result
        #[arg(required = false, long)]
        versions: bool,
    },

    /// Suggest package ids, or versions of a single package
    #[clap(name = "autocomplete", visible_alias = "ac")]
    Autocomplete {
        /// Text the package id must contain
        #[arg(required = false, default_value = "")]
        query: String,

        /// Suggest versions of this package instead of package ids
        #[arg(required = false, long)]
        id: Option<String>,

        /// Target framework of the caller (accepted, not used for matching)
        #[arg(required = false, long)]
        framework: Option<String>,

        /// Number of rows to skip
        #[arg(required = false, long)]
        skip: Option<usize>,

        /// Number of rows to take
        #[arg(required = false, long)]
        take: Option<usize>,

        /// Include prerelease versions
        #[arg(required = false, long, conflicts_with = "no_prerelease")]
        prerelease: bool,

        /// Exclude prerelease versions even if the config enables them
        #[arg(required = false, long)]
        no_prerelease: bool,
    },
}
