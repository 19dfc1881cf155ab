//! View navigator - the screen state machine
//!
//! The navigator owns the active screen and the selection context threaded
//! between screens. Context lives inside the screen variant that needs it,
//! so "item detail without an item" cannot be represented.
//!
//! # Usage
//!
//! Events are only reachable through the handle for the active screen:
//!
//! ```
//! use rentz::catalog::ItemId;
//! use rentz::nav::{ActiveView, ViewKind, ViewNavigator};
//!
//! let mut nav = ViewNavigator::new();
//! if let ActiveView::Feed(feed) = nav.view() {
//!     feed.select_item(ItemId::from("outfit-1"));
//! }
//! assert_eq!(nav.current_view(), ViewKind::ItemDetail);
//!
//! if let ActiveView::ItemDetail(detail) = nav.view() {
//!     detail.back();
//! }
//! assert_eq!(nav.current_view(), ViewKind::Feed);
//! assert!(nav.selected_item_id().is_none());
//! ```
//!
//! `switch_tab` is the one event every screen accepts, so it lives on the
//! navigator itself.

use super::payload::RentalPayload;
use super::table::{self, EventKind, Tab, ViewKind};
use crate::catalog::{CatalogItem, ItemId};
use crate::feed::FeedVariant;
use serde::Serialize;

/// Active screen plus the context it needs
#[derive(Debug, Clone, PartialEq, Eq)]
enum Screen {
    Feed(FeedVariant),
    Chat,
    Profile,
    ItemDetail { item_id: ItemId },
    RentalFlow { item_id: ItemId, payload: RentalPayload },
}

impl Screen {
    const fn kind(&self) -> ViewKind {
        match self {
            Self::Feed(FeedVariant::All) => ViewKind::Feed,
            Self::Feed(FeedVariant::Peer) => ViewKind::PeerFeed,
            Self::Feed(FeedVariant::Store) => ViewKind::StoreFeed,
            Self::Chat => ViewKind::Chat,
            Self::Profile => ViewKind::Profile,
            Self::ItemDetail { .. } => ViewKind::ItemDetail,
            Self::RentalFlow { .. } => ViewKind::RentalFlow,
        }
    }

    const fn from_tab(tab: Tab) -> Self {
        match tab {
            Tab::Feed => Self::Feed(FeedVariant::All),
            Tab::PeerFeed => Self::Feed(FeedVariant::Peer),
            Tab::StoreFeed => Self::Feed(FeedVariant::Store),
            Tab::Chat => Self::Chat,
            Tab::Profile => Self::Profile,
        }
    }
}

/// `(current_view, selected_item_id, rental_payload)` for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationSnapshot {
    pub current_view: ViewKind,
    pub selected_item_id: Option<ItemId>,
    pub rental_payload: Option<RentalPayload>,
}

/// Screen state machine
#[derive(Debug, Clone)]
pub struct ViewNavigator {
    screen: Screen,
    /// Bumped each time a feed screen is entered from a non-feed screen
    feed_mount: u64,
}

impl Default for ViewNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewNavigator {
    /// Start on the main feed with no selection
    #[must_use]
    pub const fn new() -> Self {
        Self {
            screen: Screen::Feed(FeedVariant::All),
            feed_mount: 0,
        }
    }

    #[must_use]
    pub const fn current_view(&self) -> ViewKind {
        self.screen.kind()
    }

    #[must_use]
    pub const fn selected_item_id(&self) -> Option<&ItemId> {
        match &self.screen {
            Screen::ItemDetail { item_id } | Screen::RentalFlow { item_id, .. } => Some(item_id),
            _ => None,
        }
    }

    #[must_use]
    pub const fn rental_payload(&self) -> Option<&RentalPayload> {
        match &self.screen {
            Screen::RentalFlow { payload, .. } => Some(payload),
            _ => None,
        }
    }

    /// Identifies the current feed screen instance, if a feed is showing
    ///
    /// Stays the same while switching between feed tabs and changes once the
    /// feed has been left and entered again.
    #[must_use]
    pub const fn feed_mount(&self) -> Option<u64> {
        if self.screen.kind().is_feed() {
            Some(self.feed_mount)
        } else {
            None
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> NavigationSnapshot {
        NavigationSnapshot {
            current_view: self.current_view(),
            selected_item_id: self.selected_item_id().cloned(),
            rental_payload: self.rental_payload().cloned(),
        }
    }

    /// Typed handle exposing only the events the active screen accepts
    pub fn view(&mut self) -> ActiveView<'_> {
        match self.screen {
            Screen::Feed(variant) => ActiveView::Feed(FeedScreen { nav: self, variant }),
            Screen::Chat => ActiveView::Chat,
            Screen::Profile => ActiveView::Profile,
            Screen::ItemDetail { .. } => ActiveView::ItemDetail(DetailScreen { nav: self }),
            Screen::RentalFlow { .. } => ActiveView::RentalFlow(RentalScreen { nav: self }),
        }
    }

    /// Jump to a bottom-bar tab, dropping all selection context
    pub fn switch_tab(&mut self, tab: Tab) {
        self.fire(EventKind::SwitchTab, Screen::from_tab(tab));
    }

    /// Apply a transition after checking it against the table
    ///
    /// # Panics
    ///
    /// Panics if the table has no row for the event in the current view or
    /// the row does not lead to `next`. Both mean a broken caller.
    fn fire(&mut self, event: EventKind, next: Screen) {
        let from = self.screen.kind();
        let to = next.kind();

        let Some(transition) = table::lookup(from, event) else {
            panic!("invalid navigation: {event} is not accepted in {from}");
        };
        assert!(
            transition.to.admits(to),
            "invalid navigation: {event} from {from} cannot lead to {to}"
        );

        if to.is_feed() && !from.is_feed() {
            self.feed_mount += 1;
        }

        tracing::debug!(%from, %event, %to, "navigate");
        self.screen = next;
    }
}

/// The active screen, with the events it accepts
#[derive(Debug)]
pub enum ActiveView<'a> {
    Feed(FeedScreen<'a>),
    Chat,
    Profile,
    ItemDetail(DetailScreen<'a>),
    RentalFlow(RentalScreen<'a>),
}

/// Any of the feed screens
#[derive(Debug)]
pub struct FeedScreen<'a> {
    nav: &'a mut ViewNavigator,
    variant: FeedVariant,
}

impl FeedScreen<'_> {
    #[must_use]
    pub const fn variant(&self) -> FeedVariant {
        self.variant
    }

    /// Open the detail screen for an item
    pub fn select_item(self, item_id: ItemId) {
        self.nav
            .fire(EventKind::SelectItem, Screen::ItemDetail { item_id });
    }
}

/// The item detail screen
#[derive(Debug)]
pub struct DetailScreen<'a> {
    nav: &'a mut ViewNavigator,
}

impl DetailScreen<'_> {
    /// Item being shown
    #[must_use]
    pub fn item_id(&self) -> &ItemId {
        match &self.nav.screen {
            Screen::ItemDetail { item_id } => item_id,
            other => unreachable!("detail handle on {:?}", other.kind()),
        }
    }

    /// Return to the main feed
    pub fn back(self) {
        self.nav
            .fire(EventKind::Back, Screen::Feed(FeedVariant::All));
    }

    /// Start renting the shown item
    ///
    /// # Panics
    ///
    /// Panics if `item` is not the item this screen shows.
    pub fn rent_now(self, item: &CatalogItem) {
        let item_id = self.item_id().clone();
        assert_eq!(
            item.id, item_id,
            "rentNow called with an item other than the one being shown"
        );

        let payload = RentalPayload::from(item);
        self.nav
            .fire(EventKind::RentNow, Screen::RentalFlow { item_id, payload });
    }
}

/// The rental flow screen
#[derive(Debug)]
pub struct RentalScreen<'a> {
    nav: &'a mut ViewNavigator,
}

impl RentalScreen<'_> {
    #[must_use]
    pub fn payload(&self) -> &RentalPayload {
        match &self.nav.screen {
            Screen::RentalFlow { payload, .. } => payload,
            other => unreachable!("rental handle on {:?}", other.kind()),
        }
    }

    /// Return to the item detail, dropping the payload
    pub fn back(self) {
        let item_id = self.payload().item_id.clone();
        self.nav
            .fire(EventKind::Back, Screen::ItemDetail { item_id });
    }

    /// Finish the rental and return to the main feed
    pub fn complete(self) {
        self.nav
            .fire(EventKind::Complete, Screen::Feed(FeedVariant::All));
    }
}
