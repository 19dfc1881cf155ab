//! Show command - print one item's details

use crate::{
    RentzError,
    catalog::{CatalogSource, ItemId},
    output::{self, OutputWriter},
};

type Result<T> = std::result::Result<T, RentzError>;

/// Execute the show command
///
/// # Errors
/// Returns `RentzError::CatalogError` if the item cannot be fetched.
pub fn execute(
    source: &dyn CatalogSource,
    id: &str,
    out: &dyn OutputWriter,
    quiet: bool,
) -> Result<()> {
    let item = source.item(&ItemId::from(id))?;

    if quiet {
        out.write(&output::item_line(&item, true));
        return Ok(());
    }

    for line in output::item_details(&item) {
        out.write(&line);
    }
    Ok(())
}
