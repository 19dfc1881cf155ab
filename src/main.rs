//! Rentz CLI application entry point
//!
//! A text frontend over the rentz feed and navigation core. It reads a
//! catalog from a JSON file, composes feeds the way the app's home screen
//! does, and replays navigation walks.
//!
//! # Usage
//!
//! ```bash
//! # Main feed with default filters (default command)
//! rentz --catalog demos/catalog.json
//!
//! # Store feed, dresses in M under ₹800/day
//! rentz feed --tab store -c dress -s M -p 800
//!
//! # Free-text search (category, size and price are ignored)
//! rentz feed --search floral
//!
//! # Walk through a rental
//! rentz walk select:o1 rent back rent complete
//!
//! # Quiet mode (only output results)
//! rentz -q feed -c top
//! ```
//!
//! # Logging
//!
//! Diagnostics go to stderr through `tracing`. The filter is taken from
//! `RUST_LOG` and defaults to `rentz=warn`.
//!
//! # Configuration
//!
//! Configuration is stored in the user's config directory
//! (`~/.config/rentz/config.toml` on Linux) and created on first run.

use rentz::{
    RentzError,
    catalog::MemoryCatalog,
    cli::{Cli, Commands, FilterArgs},
    commands,
    config::RentzConfig,
    output::{OutputWriter, StdoutWriter},
};
use tracing_subscriber::EnvFilter;

type Result<T> = std::result::Result<T, RentzError>;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rentz=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn warn_ignored(filters: &FilterArgs, out: &dyn OutputWriter, quiet: bool) {
    if quiet {
        return;
    }
    for warning in filters.ignored_inputs() {
        out.warning(&warning);
    }
}

fn run(cli: &Cli, out: &dyn OutputWriter) -> Result<()> {
    let config_path = RentzConfig::config_path()?;
    let config = RentzConfig::load()?;
    let quiet = cli.quiet || config.quiet;
    let command = cli.get_command();

    if let Commands::Config { command } = &command {
        return commands::config(&config, &config_path, command, out);
    }

    let catalog_path = cli
        .catalog
        .clone()
        .or_else(|| config.catalog.clone())
        .ok_or_else(|| {
            RentzError::InvalidInput(format!(
                "No catalog given. Pass --catalog <FILE> or set `catalog` in {}",
                config_path.display()
            ))
        })?;

    let catalog = MemoryCatalog::load(&catalog_path)?;
    tracing::info!(path = %catalog_path.display(), items = catalog.len(), "catalog loaded");

    match command {
        Commands::Feed { tab, filters } => {
            warn_ignored(&filters, out, quiet);
            let criteria = filters.apply(config.initial_criteria());
            commands::feed(&catalog, tab.into(), criteria, out, quiet)
        }
        Commands::Show { id } => commands::show(&catalog, &id, out, quiet),
        Commands::Walk { steps, filters } => {
            warn_ignored(&filters, out, quiet);
            let criteria = filters.apply(config.initial_criteria());
            commands::walk(&catalog, &steps, criteria, out, quiet)
        }
        Commands::Config { .. } => unreachable!(),
    }
}

fn main() {
    init_tracing();

    let cli = Cli::parse_args();
    let out = StdoutWriter::new();

    if let Err(e) = run(&cli, &out) {
        tracing::debug!(error = ?e, "command failed");
        out.error(&e.to_string());
        std::process::exit(1);
    }
}
