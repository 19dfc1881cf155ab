//! Rental payload carried from item detail into the rental flow

use crate::catalog::{CatalogItem, ItemId, OwnerType, Size};
use serde::{Deserialize, Serialize};

/// The item fields the rental flow needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RentalPayload {
    pub item_id: ItemId,
    pub title: String,
    pub size: Option<Size>,
    pub price_per_day: u32,
    pub owner_type: OwnerType,
    pub owner_name: Option<String>,
}

impl From<&CatalogItem> for RentalPayload {
    fn from(item: &CatalogItem) -> Self {
        Self {
            item_id: item.id.clone(),
            title: item.title.clone(),
            size: item.size,
            price_per_day: item.price_per_day,
            owner_type: item.owner_type,
            owner_name: item.owner_name.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_payload_from_item() {
        let item = CatalogItem::new("o7", "Velvet Blazer", 350, OwnerType::Individual)
            .with_size(Size::L)
            .with_owner_name("Priya")
            .with_description("not carried over");

        let payload = RentalPayload::from(&item);

        assert_eq!(payload.item_id, item.id);
        assert_eq!(payload.title, "Velvet Blazer");
        assert_eq!(payload.size, Some(Size::L));
        assert_eq!(payload.price_per_day, 350);
        assert_eq!(payload.owner_name.as_deref(), Some("Priya"));
    }
}
