//! Application session - navigator plus the feed screen it shows
//!
//! The feed screen keeps its filters while the user flips between the
//! feed tabs (all / P2P / store) and only the segment changes. Leaving the
//! feed for any other screen throws its filters away; coming back starts a
//! fresh feed with default filters.
//!
//! # Workflow
//!
//! ```text
//! AppSession::new()
//!     ↓
//! feed() ──→ reconcile with navigator.feed_mount()
//!     ├─ same mount, same variant → existing FeedSession
//!     ├─ same mount, new variant  → existing FeedSession, set_segment()
//!     └─ new mount                → fresh FeedSession
//! ```

use crate::catalog::CatalogSource;
use crate::feed::{FeedSession, FeedSnapshot, FeedVariant, FilterCriteria};
use crate::nav::{ActiveView, NavigationSnapshot, Tab, ViewKind, ViewNavigator};

/// Feed session tied to one feed mount
#[derive(Debug)]
struct MountedFeed {
    mount: u64,
    variant: FeedVariant,
    session: FeedSession,
}

/// One signed-in user's session
#[derive(Debug)]
pub struct AppSession {
    navigator: ViewNavigator,
    feed: Option<MountedFeed>,
    initial_criteria: FilterCriteria,
}

impl Default for AppSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AppSession {
    #[must_use]
    pub fn new() -> Self {
        Self::with_criteria(FilterCriteria::default())
    }

    /// Start a session whose fresh feeds begin with `criteria`
    #[must_use]
    pub const fn with_criteria(criteria: FilterCriteria) -> Self {
        Self {
            navigator: ViewNavigator::new(),
            feed: None,
            initial_criteria: criteria,
        }
    }

    #[must_use]
    pub const fn navigator(&self) -> &ViewNavigator {
        &self.navigator
    }

    #[must_use]
    pub const fn current_view(&self) -> ViewKind {
        self.navigator.current_view()
    }

    #[must_use]
    pub fn navigation(&self) -> NavigationSnapshot {
        self.navigator.snapshot()
    }

    /// Typed handle for the active screen
    pub fn view(&mut self) -> ActiveView<'_> {
        self.navigator.view()
    }

    pub fn switch_tab(&mut self, tab: Tab) {
        self.navigator.switch_tab(tab);
    }

    /// The feed session for the showing feed, or `None` off the feed
    pub fn feed(&mut self) -> Option<&mut FeedSession> {
        let Some(mount) = self.navigator.feed_mount() else {
            self.feed = None;
            return None;
        };
        let variant = self
            .navigator
            .current_view()
            .feed_variant()
            .unwrap_or_default();

        match self.feed.as_mut() {
            Some(mounted) if mounted.mount == mount => {
                if mounted.variant != variant {
                    tracing::debug!(from = ?mounted.variant, to = ?variant, "feed tab changed");
                    mounted.variant = variant;
                    mounted.session.set_segment(variant.segment());
                }
            }
            _ => {
                tracing::debug!(mount, ?variant, "mounting fresh feed");
                let session = FeedSession::new(self.initial_criteria.clone(), variant.segment());
                self.feed = Some(MountedFeed {
                    mount,
                    variant,
                    session,
                });
            }
        }

        self.feed.as_mut().map(|mounted| &mut mounted.session)
    }

    /// Run the showing feed's pending query against `source`
    pub fn refresh_feed<S: CatalogSource + ?Sized>(
        &mut self,
        source: &S,
    ) -> Option<FeedSnapshot<'_>> {
        self.feed().map(|session| session.refresh(source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, ItemId, OwnerType};
    use crate::testing::sample_catalog;

    #[test]
    fn test_feed_available_on_start() {
        let mut app = AppSession::new();
        let feed = app.feed().unwrap();

        assert_eq!(feed.segment(), None);
        assert!(feed.snapshot().is_loading);
    }

    #[test]
    fn test_no_feed_off_feed_views() {
        let mut app = AppSession::new();
        app.switch_tab(Tab::Chat);
        assert!(app.feed().is_none());

        app.switch_tab(Tab::Profile);
        assert!(app.feed().is_none());
    }

    #[test]
    fn test_switching_feed_tabs_keeps_filters() {
        let catalog = sample_catalog();
        let mut app = AppSession::new();
        app.feed().unwrap().set_category(Some(Category::Dress));
        app.refresh_feed(&catalog);

        app.switch_tab(Tab::StoreFeed);
        let feed = app.feed().unwrap();
        assert_eq!(feed.criteria().category, Some(Category::Dress));
        assert_eq!(feed.segment(), Some(OwnerType::Store));
        assert!(feed.snapshot().is_loading);

        let snapshot = app.refresh_feed(&catalog).unwrap();
        for item in snapshot.items.unwrap() {
            assert_eq!(item.owner_type, OwnerType::Store);
            assert_eq!(item.category, Some(Category::Dress));
        }
    }

    #[test]
    fn test_returning_from_chat_resets_filters() {
        let mut app = AppSession::new();
        app.feed().unwrap().set_search_term("silk");

        app.switch_tab(Tab::Chat);
        app.switch_tab(Tab::Feed);

        assert!(app.feed().unwrap().criteria().search_term.is_empty());
    }

    #[test]
    fn test_returning_from_detail_resets_filters() {
        let mut app = AppSession::new();
        app.feed().unwrap().set_max_price(200);

        if let ActiveView::Feed(feed) = app.view() {
            feed.select_item(ItemId::from("o1"));
        }
        assert!(app.feed().is_none());

        if let ActiveView::ItemDetail(detail) = app.view() {
            detail.back();
        }
        assert_eq!(app.feed().unwrap().criteria().max_price, 1000);
    }

    #[test]
    fn test_initial_criteria_used_for_fresh_feeds() {
        let criteria = FilterCriteria::builder().max_price(1500).build();
        let mut app = AppSession::with_criteria(criteria);

        assert_eq!(app.feed().unwrap().criteria().max_price, 1500);
        app.switch_tab(Tab::Profile);
        app.switch_tab(Tab::PeerFeed);
        assert_eq!(app.feed().unwrap().criteria().max_price, 1500);
    }
}
