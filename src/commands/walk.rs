//! Walk command - replay navigation events against a fresh session
//!
//! Each step is one user action. After every step the resulting navigation
//! state is printed, followed by what the new screen shows.
//!
//! ```text
//! select:<id>   open an item from the showing feed
//! back          leave the detail or rental screen
//! rent          start renting the shown item
//! complete      finish the rental
//! tab:<name>    jump to a bottom-bar tab
//! ```

use crate::{
    AppSession, RentzError,
    catalog::{CatalogSource, ItemId},
    cli::parse_tab,
    commands::feed,
    feed::FilterCriteria,
    nav::{ActiveView, EventKind, Tab, ViewKind},
    output::{self, OutputWriter},
};
use std::str::FromStr;

type Result<T> = std::result::Result<T, RentzError>;

/// One parsed walk step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Select(ItemId),
    Back,
    Rent,
    Complete,
    Tab(Tab),
}

impl Step {
    /// Navigation event this step fires
    #[must_use]
    pub const fn event(&self) -> EventKind {
        match self {
            Self::Select(_) => EventKind::SelectItem,
            Self::Back => EventKind::Back,
            Self::Rent => EventKind::RentNow,
            Self::Complete => EventKind::Complete,
            Self::Tab(_) => EventKind::SwitchTab,
        }
    }
}

impl FromStr for Step {
    type Err = RentzError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let (name, arg) = s.split_once(':').map_or((s, None), |(n, a)| (n, Some(a.trim())));

        match (name.to_ascii_lowercase().as_str(), arg) {
            ("select", Some(id)) if !id.is_empty() => Ok(Self::Select(ItemId::from(id))),
            ("back", None) => Ok(Self::Back),
            ("rent" | "rentnow", None) => Ok(Self::Rent),
            ("complete", None) => Ok(Self::Complete),
            ("tab", Some(tab)) => parse_tab(tab)
                .map(Self::Tab)
                .ok_or_else(|| RentzError::InvalidInput(format!("unknown tab '{tab}'"))),
            _ => Err(RentzError::InvalidInput(format!(
                "unrecognized step '{s}' (expected select:<id>, back, rent, complete or tab:<name>)"
            ))),
        }
    }
}

/// Execute the walk command
///
/// All steps are parsed before any is applied.
///
/// # Errors
/// Returns `RentzError::InvalidInput` for an unparsable step or one the
/// screen at that point does not accept, and `RentzError::CatalogError` if a
/// selected item cannot be fetched.
pub fn execute(
    source: &dyn CatalogSource,
    steps: &[String],
    criteria: FilterCriteria,
    out: &dyn OutputWriter,
    quiet: bool,
) -> Result<()> {
    let steps = steps
        .iter()
        .map(|step| step.parse::<Step>())
        .collect::<Result<Vec<_>>>()?;

    let mut app = AppSession::with_criteria(criteria);
    show_state(&mut app, source, out, quiet)?;

    for step in steps {
        apply(&mut app, source, step)?;
        show_state(&mut app, source, out, quiet)?;
    }
    Ok(())
}

/// Fire one step on the session
///
/// # Errors
/// Returns `RentzError::InvalidInput` if the active screen does not accept
/// the step's event.
pub fn apply(app: &mut AppSession, source: &dyn CatalogSource, step: Step) -> Result<()> {
    let view = app.current_view();
    let event = step.event();
    if !view.accepts(event) {
        return Err(not_accepted(event, view));
    }

    match step {
        Step::Tab(tab) => app.switch_tab(tab),
        Step::Select(id) => {
            source.item(&id)?;
            if let ActiveView::Feed(screen) = app.view() {
                screen.select_item(id);
            }
        }
        Step::Rent => {
            let Some(id) = app.navigator().selected_item_id().cloned() else {
                return Err(not_accepted(event, view));
            };
            let item = source.item(&id)?;
            if let ActiveView::ItemDetail(detail) = app.view() {
                detail.rent_now(&item);
            }
        }
        Step::Back => match app.view() {
            ActiveView::ItemDetail(detail) => detail.back(),
            ActiveView::RentalFlow(rental) => rental.back(),
            _ => return Err(not_accepted(event, view)),
        },
        Step::Complete => {
            if let ActiveView::RentalFlow(rental) = app.view() {
                rental.complete();
            }
        }
    }
    Ok(())
}

fn not_accepted(event: EventKind, view: ViewKind) -> RentzError {
    let accepted = view
        .accepted_events()
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    RentzError::InvalidInput(format!(
        "{event} is not accepted in {view} (accepted: {accepted})"
    ))
}

fn show_state(
    app: &mut AppSession,
    source: &dyn CatalogSource,
    out: &dyn OutputWriter,
    quiet: bool,
) -> Result<()> {
    let navigation = app.navigation();
    out.success(&output::navigation_line(&navigation));
    if quiet {
        return Ok(());
    }

    match navigation.current_view {
        ViewKind::ItemDetail => {
            if let Some(id) = &navigation.selected_item_id {
                for line in output::item_details(&source.item(id)?) {
                    out.write(&format!("  {line}"));
                }
            }
        }
        ViewKind::RentalFlow => {
            if let Some(payload) = &navigation.rental_payload {
                out.info(&format!("  Renting {}", output::payload_summary(payload)));
            }
        }
        view => {
            if let (Some(variant), Some(snapshot)) = (view.feed_variant(), app.refresh_feed(source)) {
                feed::render(variant, &snapshot, out, false)?;
            }
        }
    }
    Ok(())
}
