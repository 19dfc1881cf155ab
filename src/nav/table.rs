//! Navigation transition table
//!
//! Every view change the navigator performs is looked up here first. The
//! typed screen handles in `navigator` only offer events that have a row in
//! this table, so a lookup miss means a caller bypassed them.

use crate::feed::FeedVariant;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Screens the application can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ViewKind {
    Feed,
    PeerFeed,
    StoreFeed,
    Chat,
    Profile,
    ItemDetail,
    RentalFlow,
}

impl ViewKind {
    pub const ALL: [Self; 7] = [
        Self::Feed,
        Self::PeerFeed,
        Self::StoreFeed,
        Self::Chat,
        Self::Profile,
        Self::ItemDetail,
        Self::RentalFlow,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Feed => "feed",
            Self::PeerFeed => "peerFeed",
            Self::StoreFeed => "storeFeed",
            Self::Chat => "chat",
            Self::Profile => "profile",
            Self::ItemDetail => "itemDetail",
            Self::RentalFlow => "rentalFlow",
        }
    }

    /// Feed variant shown by this view, if it is a feed
    #[must_use]
    pub const fn feed_variant(self) -> Option<FeedVariant> {
        match self {
            Self::Feed => Some(FeedVariant::All),
            Self::PeerFeed => Some(FeedVariant::Peer),
            Self::StoreFeed => Some(FeedVariant::Store),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_feed(self) -> bool {
        self.feed_variant().is_some()
    }

    /// Whether `event` has a row for this view
    #[must_use]
    pub fn accepts(self, event: EventKind) -> bool {
        lookup(self, event).is_some()
    }

    /// Events this view accepts, in table order
    #[must_use]
    pub fn accepted_events(self) -> Vec<EventKind> {
        TRANSITIONS
            .iter()
            .filter(|t| t.from == self)
            .map(|t| t.event)
            .fold(Vec::new(), |mut events, event| {
                if !events.contains(&event) {
                    events.push(event);
                }
                events
            })
    }
}

impl fmt::Display for ViewKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Navigation events, without their payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    SelectItem,
    Back,
    RentNow,
    Complete,
    SwitchTab,
}

impl EventKind {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::SelectItem => "selectItem",
            Self::Back => "back",
            Self::RentNow => "rentNow",
            Self::Complete => "complete",
            Self::SwitchTab => "switchTab",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Bottom-bar tabs; the only views reachable from anywhere
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tab {
    Feed,
    PeerFeed,
    StoreFeed,
    Chat,
    Profile,
}

impl Tab {
    pub const ALL: [Self; 5] = [
        Self::Feed,
        Self::PeerFeed,
        Self::StoreFeed,
        Self::Chat,
        Self::Profile,
    ];

    #[must_use]
    pub const fn view(self) -> ViewKind {
        match self {
            Self::Feed => ViewKind::Feed,
            Self::PeerFeed => ViewKind::PeerFeed,
            Self::StoreFeed => ViewKind::StoreFeed,
            Self::Chat => ViewKind::Chat,
            Self::Profile => ViewKind::Profile,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Feed => "Home",
            Self::PeerFeed => "P2P",
            Self::StoreFeed => "Store",
            Self::Chat => "AI Chat",
            Self::Profile => "Profile",
        }
    }
}

/// Where a transition lands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A fixed view
    View(ViewKind),
    /// Whichever tab the event names
    Tab,
}

impl Target {
    /// Whether `view` is a valid landing view for this target
    #[must_use]
    pub fn admits(self, view: ViewKind) -> bool {
        match self {
            Self::View(kind) => kind == view,
            Self::Tab => Tab::ALL.iter().any(|tab| tab.view() == view),
        }
    }
}

/// One row of the transition table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: ViewKind,
    pub event: EventKind,
    pub to: Target,
}

const fn row(from: ViewKind, event: EventKind, to: Target) -> Transition {
    Transition { from, event, to }
}

/// All valid transitions
pub const TRANSITIONS: &[Transition] = &[
    row(ViewKind::Feed, EventKind::SelectItem, Target::View(ViewKind::ItemDetail)),
    row(ViewKind::PeerFeed, EventKind::SelectItem, Target::View(ViewKind::ItemDetail)),
    row(ViewKind::StoreFeed, EventKind::SelectItem, Target::View(ViewKind::ItemDetail)),
    row(ViewKind::ItemDetail, EventKind::Back, Target::View(ViewKind::Feed)),
    row(ViewKind::ItemDetail, EventKind::RentNow, Target::View(ViewKind::RentalFlow)),
    row(ViewKind::RentalFlow, EventKind::Back, Target::View(ViewKind::ItemDetail)),
    row(ViewKind::RentalFlow, EventKind::Complete, Target::View(ViewKind::Feed)),
    row(ViewKind::Feed, EventKind::SwitchTab, Target::Tab),
    row(ViewKind::PeerFeed, EventKind::SwitchTab, Target::Tab),
    row(ViewKind::StoreFeed, EventKind::SwitchTab, Target::Tab),
    row(ViewKind::Chat, EventKind::SwitchTab, Target::Tab),
    row(ViewKind::Profile, EventKind::SwitchTab, Target::Tab),
    row(ViewKind::ItemDetail, EventKind::SwitchTab, Target::Tab),
    row(ViewKind::RentalFlow, EventKind::SwitchTab, Target::Tab),
];

/// Find the row for `event` fired in `from`
#[must_use]
pub fn lookup(from: ViewKind, event: EventKind) -> Option<&'static Transition> {
    TRANSITIONS
        .iter()
        .find(|t| t.from == from && t.event == event)
}
