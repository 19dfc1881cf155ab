//! Config command - show where configuration lives and what it holds

use crate::{
    RentzError,
    cli::ConfigCommands,
    config::RentzConfig,
    output::OutputWriter,
};
use std::path::Path;

type Result<T> = std::result::Result<T, RentzError>;

/// Execute a config subcommand
///
/// # Errors
/// Returns `RentzError::ConfigError` if the effective config cannot be
/// rendered as TOML.
pub fn execute(
    config: &RentzConfig,
    config_path: &Path,
    command: &ConfigCommands,
    out: &dyn OutputWriter,
) -> Result<()> {
    match command {
        ConfigCommands::Path => out.write(&config_path.display().to_string()),
        ConfigCommands::Show => {
            let rendered = toml::to_string_pretty(config).map_err(|e| {
                ::config::ConfigError::Message(format!("Failed to serialize config: {e}"))
            })?;
            out.write(rendered.trim_end());
        }
    }
    Ok(())
}
