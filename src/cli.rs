//! Command-line interface definitions and parsing
//!
//! This module defines the CLI structure for rentz using the `clap` crate.
//! The CLI is a thin text frontend over the feed and navigation core.
//!
//! # Commands
//!
//! - **feed**: List the feed for the given filters or search (default)
//! - **show**: Show one item's details
//! - **walk**: Replay a sequence of navigation events
//! - **config**: Inspect configuration
//!
//! # Examples
//!
//! ```bash
//! rentz feed --category dress --size M --max-price 800
//! rentz feed --search floral --tab p2p
//! rentz walk select:o1 rent back rent complete tab:chat
//! ```

use crate::catalog::{Category, Size};
use crate::feed::{FeedVariant, FilterCriteria, PriceRange};
use crate::nav::Tab;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Feed tab selectable from the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedTab {
    /// Everything
    #[default]
    All,
    /// Peer-to-peer listings
    #[value(alias = "peer")]
    P2p,
    /// Store listings
    Store,
}

impl From<FeedTab> for FeedVariant {
    fn from(tab: FeedTab) -> Self {
        match tab {
            FeedTab::All => Self::All,
            FeedTab::P2p => Self::Peer,
            FeedTab::Store => Self::Store,
        }
    }
}

impl From<FeedTab> for Tab {
    fn from(tab: FeedTab) -> Self {
        match tab {
            FeedTab::All => Self::Feed,
            FeedTab::P2p => Self::PeerFeed,
            FeedTab::Store => Self::StoreFeed,
        }
    }
}

/// Parse a bottom-bar tab name as typed in `walk` steps
#[must_use]
pub fn parse_tab(name: &str) -> Option<Tab> {
    match name.to_ascii_lowercase().as_str() {
        "feed" | "home" | "all" => Some(Tab::Feed),
        "p2p" | "peer" | "peerfeed" => Some(Tab::PeerFeed),
        "store" | "storefeed" => Some(Tab::StoreFeed),
        "chat" => Some(Tab::Chat),
        "profile" => Some(Tab::Profile),
        _ => None,
    }
}

/// Filter and search inputs shared by feed-showing commands
#[derive(Parser, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Free-text search (overrides category, size and price filters)
    #[arg(long = "search", value_name = "TEXT")]
    pub search: Option<String>,

    /// Category filter (dress, top, bottom, accessories)
    #[arg(short = 'c', long = "category", value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Size filter (XS, S, M, L, XL)
    #[arg(short = 's', long = "size", value_name = "SIZE")]
    pub size: Option<String>,

    /// Maximum price per day (50-2000, in steps of 50)
    #[arg(short = 'p', long = "max-price", value_name = "PRICE")]
    pub max_price: Option<u32>,
}

impl FilterArgs {
    /// Apply these inputs on top of `base`
    ///
    /// Unknown category or size values clear that filter; the price is
    /// clamped to the slider range.
    #[must_use]
    pub fn apply(&self, mut base: FilterCriteria) -> FilterCriteria {
        if let Some(search) = &self.search {
            base.search_term.clone_from(search);
        }
        if let Some(category) = &self.category {
            base.category = Category::parse(category);
        }
        if let Some(size) = &self.size {
            base.size = Size::parse(size);
        }
        if let Some(max_price) = self.max_price {
            base.max_price = PriceRange::FEED.clamp(max_price);
        }
        base
    }

    /// Inputs that were given but normalized away
    #[must_use]
    pub fn ignored_inputs(&self) -> Vec<String> {
        let mut ignored = Vec::new();
        if let Some(category) = self.category.as_deref().filter(|c| Category::parse(c).is_none()) {
            ignored.push(format!("unknown category '{category}', showing all categories"));
        }
        if let Some(size) = self.size.as_deref().filter(|s| Size::parse(s).is_none()) {
            ignored.push(format!("unknown size '{size}', showing all sizes"));
        }
        if let Some(price) = self.max_price.filter(|p| !PriceRange::FEED.contains(*p)) {
            ignored.push(format!(
                "max price {price} out of range, using {}",
                PriceRange::FEED.clamp(price)
            ));
        }
        ignored
    }
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "rentz")]
#[command(about = "Browse and rent outfits from the Rentz catalog", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Catalog JSON file (overrides config)
    #[arg(long = "catalog", value_name = "FILE", global = true)]
    pub catalog: Option<PathBuf>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List the feed (default)
    #[command(visible_alias = "f")]
    Feed {
        /// Which feed tab to show
        #[arg(short = 't', long = "tab", value_enum, default_value_t = FeedTab::All)]
        tab: FeedTab,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Show the details of one item
    Show {
        /// Item id
        #[arg(value_name = "ID")]
        id: String,
    },

    /// Replay navigation events and print each resulting state
    ///
    /// Steps: select:<id>, back, rent, complete, tab:<feed|p2p|store|chat|profile>
    #[command(visible_alias = "w")]
    Walk {
        /// Navigation steps, applied in order
        #[arg(value_name = "STEP", num_args = 1..)]
        steps: Vec<String>,

        #[command(flatten)]
        filters: FilterArgs,
    },

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Config subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommands {
    /// Print the config file location
    Path,
    /// Print the effective configuration
    Show,
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to the main feed if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Feed {
            tab: FeedTab::All,
            filters: FilterArgs::default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_command_is_feed() {
        let cli = Cli::parse_from(["rentz"]);
        assert!(matches!(
            cli.get_command(),
            Commands::Feed {
                tab: FeedTab::All,
                ..
            }
        ));
    }

    #[test]
    fn test_parse_feed_with_filters() {
        let cli = Cli::parse_from([
            "rentz", "feed", "--tab", "store", "-c", "dress", "-s", "M", "-p", "800",
        ]);

        match cli.get_command() {
            Commands::Feed { tab, filters } => {
                assert_eq!(tab, FeedTab::Store);
                let criteria = filters.apply(FilterCriteria::default());
                assert_eq!(criteria.category, Some(Category::Dress));
                assert_eq!(criteria.size, Some(Size::M));
                assert_eq!(criteria.max_price, 800);
                assert!(criteria.search_term.is_empty());
            }
            other => panic!("expected feed, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_feed_search() {
        let cli = Cli::parse_from(["rentz", "feed", "--search", "floral", "--tab", "peer"]);

        match cli.get_command() {
            Commands::Feed { tab, filters } => {
                assert_eq!(tab, FeedTab::P2p);
                assert_eq!(filters.search.as_deref(), Some("floral"));
            }
            other => panic!("expected feed, got {other:?}"),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["rentz", "show", "o1", "--catalog", "items.json", "-q"]);
        assert!(cli.quiet);
        assert_eq!(cli.catalog, Some(PathBuf::from("items.json")));
    }

    #[test]
    fn test_parse_walk_steps() {
        let cli = Cli::parse_from(["rentz", "walk", "select:o1", "rent", "back", "-p", "600"]);
        match cli.get_command() {
            Commands::Walk { steps, filters } => {
                assert_eq!(steps, vec!["select:o1", "rent", "back"]);
                assert_eq!(filters.max_price, Some(600));
            }
            other => panic!("expected walk, got {other:?}"),
        }
    }

    #[test]
    fn test_filter_args_normalize_unknown_values() {
        let args = FilterArgs {
            search: None,
            category: Some("shoes".into()),
            size: Some("XXL".into()),
            max_price: Some(5000),
        };
        let base = FilterCriteria::builder()
            .category(Category::Top)
            .size(Size::S)
            .build();

        let criteria = args.apply(base);
        assert_eq!(criteria.category, None);
        assert_eq!(criteria.size, None);
        assert_eq!(criteria.max_price, 2000);
        assert_eq!(args.ignored_inputs().len(), 3);
    }

    #[test]
    fn test_parse_tab_names() {
        assert_eq!(parse_tab("home"), Some(Tab::Feed));
        assert_eq!(parse_tab("P2P"), Some(Tab::PeerFeed));
        assert_eq!(parse_tab("chat"), Some(Tab::Chat));
        assert_eq!(parse_tab("cart"), None);
    }

    #[test]
    fn test_feed_tab_conversions() {
        assert_eq!(FeedVariant::from(FeedTab::Store), FeedVariant::Store);
        assert_eq!(Tab::from(FeedTab::P2p), Tab::PeerFeed);
    }
}
