//! Output formatting for CLI display
//!
//! Text renderings of catalog items, feed headers and navigation state.

pub mod writer;

pub use writer::{BufferWriter, MessageLevel, OutputWriter, StdoutWriter};

use crate::catalog::{CatalogItem, OwnerType};
use crate::feed::FeedVariant;
use crate::nav::{NavigationSnapshot, RentalPayload};
use colored::Colorize;

/// Format a daily rental price
#[must_use]
pub fn price_per_day(price: u32) -> String {
    format!("₹{price}/day")
}

/// Short owner label used in listings
#[must_use]
pub const fn owner_label(owner: OwnerType) -> &'static str {
    match owner {
        OwnerType::Individual => "P2P",
        OwnerType::Store => "Store",
    }
}

/// Format one item for a feed listing
#[must_use]
pub fn item_line(item: &CatalogItem, quiet: bool) -> String {
    if quiet {
        return item.id.to_string();
    }

    let mut facets = Vec::new();
    if let Some(category) = item.category {
        facets.push(category.to_string());
    }
    if let Some(size) = item.size {
        facets.push(size.to_string());
    }

    let facets = if facets.is_empty() {
        String::new()
    } else {
        format!(" [{}]", facets.join(", "))
    };

    format!(
        "  {}  {}  {}{} ({})",
        item.id.to_string().dimmed(),
        item.title.bold(),
        price_per_day(item.price_per_day).green(),
        facets,
        owner_label(item.owner_type)
    )
}

/// Format every field of an item for the detail screen
#[must_use]
pub fn item_details(item: &CatalogItem) -> Vec<String> {
    let mut lines = vec![
        item.title.bold().to_string(),
        format!("Price: {}", price_per_day(item.price_per_day)),
        format!("Listed by: {}", owner_display(item.owner_type, item.owner_name.as_deref())),
    ];

    if let Some(brand) = &item.brand {
        lines.push(format!("Brand: {brand}"));
    }
    if let Some(category) = item.category {
        lines.push(format!("Category: {category}"));
    }
    if let Some(size) = item.size {
        lines.push(format!("Size: {size}"));
    }
    if !item.description.is_empty() {
        lines.push(item.description.clone());
    }
    if !item.tags.is_empty() {
        lines.push(format!("Tags: {}", item.tags.join(", ")));
    }
    if !item.available {
        lines.push("Currently rented out".yellow().to_string());
    }

    lines
}

fn owner_display(owner: OwnerType, name: Option<&str>) -> String {
    match (owner, name) {
        (OwnerType::Store, _) => "Rentz Store".to_string(),
        (OwnerType::Individual, Some(name)) => name.to_string(),
        (OwnerType::Individual, None) => "another user".to_string(),
    }
}

/// Title and subtitle for a feed screen
#[must_use]
pub fn feed_header(variant: FeedVariant) -> [String; 2] {
    [
        variant.title().bold().to_string(),
        variant.subtitle().dimmed().to_string(),
    ]
}

/// One-line summary of a rental payload
#[must_use]
pub fn payload_summary(payload: &RentalPayload) -> String {
    let size = payload
        .size
        .map(|size| format!(", size {size}"))
        .unwrap_or_default();

    format!(
        "{} ({}{})",
        payload.title,
        price_per_day(payload.price_per_day),
        size
    )
}

/// One-line summary of navigation state
#[must_use]
pub fn navigation_line(snapshot: &NavigationSnapshot) -> String {
    let mut line = snapshot.current_view.to_string();

    if let Some(id) = &snapshot.selected_item_id {
        line.push_str(&format!(" item={id}"));
    }
    if let Some(payload) = &snapshot.rental_payload {
        line.push_str(&format!(" renting=\"{}\"", payload.title));
    }

    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, ItemId, Size};
    use crate::nav::ViewKind;

    #[test]
    fn test_price_format() {
        assert_eq!(price_per_day(450), "₹450/day");
    }

    #[test]
    fn test_item_line_quiet_is_id() {
        let item = CatalogItem::new("o1", "Floral Maxi Dress", 450, OwnerType::Individual);
        assert_eq!(item_line(&item, true), "o1");
    }

    #[test]
    fn test_item_line_includes_facets() {
        let item = CatalogItem::new("o1", "Floral Maxi Dress", 450, OwnerType::Individual)
            .with_category(Category::Dress)
            .with_size(Size::M);

        let line = item_line(&item, false);
        assert!(line.contains("Floral Maxi Dress"));
        assert!(line.contains("₹450/day"));
        assert!(line.contains("[dress, M]"));
        assert!(line.ends_with("(P2P)"));
    }

    #[test]
    fn test_item_details_store_owner() {
        let item = CatalogItem::new("o2", "Gown", 1800, OwnerType::Store)
            .with_owner_name("ignored for store items");

        let lines = item_details(&item);
        assert!(lines.contains(&"Listed by: Rentz Store".to_string()));
    }

    #[test]
    fn test_navigation_line() {
        let payload = RentalPayload::from(&CatalogItem::new("o1", "Gown", 900, OwnerType::Store));
        let snapshot = NavigationSnapshot {
            current_view: ViewKind::RentalFlow,
            selected_item_id: Some(ItemId::from("o1")),
            rental_payload: Some(payload),
        };

        assert_eq!(
            navigation_line(&snapshot),
            "rentalFlow item=o1 renting=\"Gown\""
        );
    }

    #[test]
    fn test_payload_summary() {
        let item = CatalogItem::new("o6", "Little Black Dress", 600, OwnerType::Store)
            .with_size(Size::M);
        assert_eq!(
            payload_summary(&RentalPayload::from(&item)),
            "Little Black Dress (₹600/day, size M)"
        );
    }
}
