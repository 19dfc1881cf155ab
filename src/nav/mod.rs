//! Navigation module - which screen is showing and what it was opened with
//!
//! # Architecture
//!
//! - `table`: The transition table (views, events, tabs)
//! - `navigator`: `ViewNavigator` and the typed per-screen handles
//! - `payload`: `RentalPayload`, the item summary handed to the rental flow

pub mod navigator;
pub mod payload;
pub mod table;

pub use navigator::{
    ActiveView, DetailScreen, FeedScreen, NavigationSnapshot, RentalScreen, ViewNavigator,
};
pub use payload::RentalPayload;
pub use table::{EventKind, TRANSITIONS, Tab, Target, Transition, ViewKind};
