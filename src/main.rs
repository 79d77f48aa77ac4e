use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

mod errors;
mod handlers;
mod operations;
mod state;
mod ui;

use errors::map_error;
use operations::{JsonFileStore, TracingSink};
use state::AppState;

/// Gemstone catalog search - filter, sort and suggest over a gem catalog
///
/// Examples:
///   # Cut stones between 2 and 3 carats, most expensive first
///   gemsearch search --type cut --weight 2:3 --sort price --desc
///
///   # Free text with cut-only facets
///   gemsearch search --term sapphire --facet clarity=VS1 --facet cutForm=Oval
///
///   # Save a search and replay it later
///   gemsearch search --origin Myanmar --save burmese
///   gemsearch search --saved burmese
///
///   # Values available for a facet
///   gemsearch facets transparency
#[derive(Parser, Debug)]
#[command(name = "gemsearch")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Filtering Logic:\n  \
    - Every filter narrows the result (AND)\n  \
    - \"all\" as a value leaves a facet unfiltered\n  \
    - Ranges are MIN:MAX, inclusive; either side may be left empty\n  \
    - Cut-only facets (clarity, cutQuality, ...) never match rough stones, and vice versa\n\n\
Exit Codes:\n  \
    - 2: malformed request or arguments\n  \
    - 3: the catalog is empty\n  \
    - 1: any other failure")]
struct Cli {
    /// Path to the catalog JSON file
    #[arg(short, long, env = "GEMSEARCH_CATALOG", value_name = "FILE", global = true)]
    catalog: Option<PathBuf>,

    /// Fixed range bounds (JSON); observed from the catalog when omitted
    #[arg(long, value_name = "FILE", global = true)]
    bounds: Option<PathBuf>,

    /// Saved-search file
    #[arg(long, env = "GEMSEARCH_SAVED", value_name = "FILE", default_value = "saved-searches.json", global = true)]
    store: PathBuf,

    /// Owner of saved searches
    #[arg(short, long, env = "GEMSEARCH_USER", default_value = "default", global = true)]
    user: String,

    /// Verbose logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Filter and sort the catalog
    Search(SearchArgs),
    /// Type-ahead suggestions for a partial term
    Suggest {
        #[arg(value_name = "PARTIAL")]
        partial: String,
        #[arg(long)]
        json: bool,
    },
    /// Distinct values of one facet, with counts
    Facets {
        /// Facet key, e.g. origin, clarity, transparency
        #[arg(value_name = "FACET")]
        facet: String,
        #[arg(long)]
        json: bool,
    },
    /// Manage saved searches
    Saved {
        #[command(subcommand)]
        action: SavedAction,
    },
}

#[derive(Subcommand, Debug)]
enum SavedAction {
    /// List saved search names
    List {
        #[arg(long)]
        json: bool,
    },
    /// Delete a saved search
    Delete {
        #[arg(value_name = "NAME")]
        name: String,
    },
}

/// Search flags. Each one maps onto one key of the request payload.
#[derive(Args, Debug, Default)]
pub struct SearchArgs {
    /// Free-text term matched against name, description, category and color
    #[arg(short, long, value_name = "TEXT")]
    pub term: Option<String>,

    #[arg(long)]
    pub category: Option<String>,

    #[arg(long)]
    pub origin: Option<String>,

    /// cut, rough or all
    #[arg(long = "type", value_name = "TYPE")]
    pub variant_type: Option<String>,

    #[arg(long)]
    pub color: Option<String>,

    /// untreated, all, or a treatment type
    #[arg(long)]
    pub treatment: Option<String>,

    /// certified, uncertified, all, or a lab name
    #[arg(long)]
    pub certification: Option<String>,

    /// Any facet as key=value (can be specified multiple times)
    #[arg(short, long = "facet", value_name = "KEY=VALUE")]
    pub facets: Vec<String>,

    #[arg(long, value_name = "MIN:MAX")]
    pub price: Option<String>,

    /// Carats for cut stones, grams for rough
    #[arg(long, value_name = "MIN:MAX")]
    pub weight: Option<String>,

    /// Estimated carat yield of rough stones
    #[arg(long = "yield", value_name = "MIN:MAX")]
    pub estimated_yield: Option<String>,

    #[arg(long, value_name = "MIN:MAX")]
    pub length: Option<String>,

    #[arg(long, value_name = "MIN:MAX")]
    pub width: Option<String>,

    #[arg(long, value_name = "MIN:MAX")]
    pub height: Option<String>,

    #[arg(long)]
    pub in_stock: bool,

    #[arg(long)]
    pub videos: bool,

    #[arg(long)]
    pub certificates: bool,

    /// name, category, price or weight
    #[arg(short, long = "sort", value_name = "KEY")]
    pub sort_by: Option<String>,

    #[arg(long = "desc")]
    pub descending: bool,

    /// Raw JSON request payload; flags override its keys
    #[arg(long, value_name = "FILE")]
    pub payload: Option<PathBuf>,

    /// Save the validated criteria under this name
    #[arg(long, value_name = "NAME", conflicts_with = "saved")]
    pub save: Option<String>,

    /// Run a saved search instead of the flags
    #[arg(long, value_name = "NAME")]
    pub saved: Option<String>,

    /// Group results by a facet
    #[arg(short = 'G', long = "group-by", value_name = "FACET")]
    pub group_by: Option<String>,

    /// Print the result as JSON
    #[arg(long)]
    pub json: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(output) => println!("{}", output),
        Err(error) => {
            let mapped = map_error(&error);
            eprintln!("{}: {}", mapped.title.red().bold(), mapped.message);
            if !mapped.details.is_empty() {
                eprintln!("\n{}", mapped.details);
            }
            process::exit(mapped.exit_code);
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<String> {
    match &cli.command {
        Command::Search(args) => {
            let state = load_state(cli)?;
            let mut store = JsonFileStore::open(&cli.store)?;
            handlers::handle_search(&state, args, &mut store, &TracingSink)
        }
        Command::Suggest { partial, json } => handlers::handle_suggest(&load_state(cli)?, partial, *json),
        Command::Facets { facet, json } => handlers::handle_facets(&load_state(cli)?, facet, *json),
        Command::Saved { action } => {
            let mut store = JsonFileStore::open(&cli.store)?;
            match action {
                SavedAction::List { json } => handlers::handle_list_saved(&store, &cli.user, *json),
                SavedAction::Delete { name } => handlers::handle_delete_saved(&mut store, &cli.user, name),
            }
        }
    }
}

fn load_state(cli: &Cli) -> Result<AppState> {
    let catalog_file = cli.catalog.as_deref().ok_or_else(|| operations::ValidationError {
        field: "catalog".to_string(),
        message: "No catalog given. Pass --catalog FILE or set GEMSEARCH_CATALOG.".to_string(),
    })?;
    let state = AppState::load(catalog_file, cli.bounds.as_deref(), &cli.user)?;
    debug!(catalog = %state.catalog_label(), items = state.catalog.len(), "catalog ready");
    Ok(state)
}
