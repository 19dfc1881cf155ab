//! Feed command - list one feed tab for a set of filters

use crate::{
    AppSession, RentzError,
    catalog::CatalogSource,
    feed::{EMPTY_FEED_HINT, EMPTY_FEED_MESSAGE, FeedSnapshot, FeedVariant, FilterCriteria},
    nav::Tab,
    output::{self, OutputWriter},
};

type Result<T> = std::result::Result<T, RentzError>;

/// Execute the feed command
///
/// Opens a session with `criteria` as the starting filters, switches to
/// `tab` and prints the resolved feed.
///
/// # Errors
/// Returns `RentzError::InvalidInput` if `tab` is not a feed tab, or
/// `RentzError::FeedError` if the catalog query fails.
pub fn execute(
    source: &dyn CatalogSource,
    tab: Tab,
    criteria: FilterCriteria,
    out: &dyn OutputWriter,
    quiet: bool,
) -> Result<()> {
    let Some(variant) = tab.view().feed_variant() else {
        return Err(RentzError::InvalidInput(format!(
            "{} is not a feed tab",
            tab.label()
        )));
    };

    if !quiet && criteria.has_search_term() {
        out.info(&format!("Searching for \"{}\"", criteria.search_term));
    }

    let mut app = AppSession::with_criteria(criteria);
    if tab != Tab::Feed {
        app.switch_tab(tab);
    }

    match app.refresh_feed(source) {
        Some(snapshot) => render(variant, &snapshot, out, quiet),
        None => Ok(()),
    }
}

/// Print a feed snapshot
///
/// # Errors
/// Returns `RentzError::FeedError` if the snapshot is in the failed state.
pub fn render(
    variant: FeedVariant,
    snapshot: &FeedSnapshot<'_>,
    out: &dyn OutputWriter,
    quiet: bool,
) -> Result<()> {
    if let Some(e) = snapshot.error {
        return Err(RentzError::FeedError(e.to_string()));
    }

    let Some(items) = snapshot.items else {
        out.info("Loading...");
        return Ok(());
    };

    if !quiet {
        let [title, subtitle] = output::feed_header(variant);
        out.write(&title);
        out.info(&subtitle);
    }

    if items.is_empty() {
        if !quiet {
            out.warning(EMPTY_FEED_MESSAGE);
            out.info(EMPTY_FEED_HINT);
        }
        return Ok(());
    }

    for item in items {
        out.write(&output::item_line(item, quiet));
    }

    if !quiet {
        out.info(&format!("{} outfit(s)", items.len()));
    }
    Ok(())
}
