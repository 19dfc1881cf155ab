//! Catalog domain types
//!
//! Plain data returned by a catalog source. Items are immutable snapshots:
//! the feed and navigation layers only reference them.
//!
//! # Types
//!
//! - **`ItemId`**: Opaque identifier of a catalog item
//! - **`Category`** / **`Size`**: Fixed enumerations used by structured filters
//! - **`OwnerType`**: Who lists the item (an individual or the store)
//! - **`CatalogItem`**: One rentable outfit
//!
//! Category and size values coming from user input or catalog data are
//! parsed leniently: anything outside the enumeration becomes `None`, which
//! structured filters treat as "match all".

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque catalog item identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Create a new item id
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw identifier
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for ItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Returned when a string is not part of a fixed enumeration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownValue(pub String);

impl fmt::Display for UnknownValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown value '{}'", self.0)
    }
}

impl std::error::Error for UnknownValue {}

/// Outfit category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Dress,
    Top,
    Bottom,
    Accessories,
}

impl Category {
    /// All categories in display order
    pub const ALL: [Self; 4] = [Self::Dress, Self::Top, Self::Bottom, Self::Accessories];

    /// Parse a category, treating unknown or empty input as unset
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        value.parse().ok()
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dress => "dress",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Accessories => "accessories",
        }
    }
}

impl FromStr for Category {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownValue(s.to_string()))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Garment size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Size {
    Xs,
    S,
    M,
    L,
    Xl,
}

impl Size {
    /// All sizes, smallest first
    pub const ALL: [Self; 5] = [Self::Xs, Self::S, Self::M, Self::L, Self::Xl];

    /// Parse a size, treating unknown or empty input as unset
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        value.parse().ok()
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Xs => "XS",
            Self::S => "S",
            Self::M => "M",
            Self::L => "L",
            Self::Xl => "XL",
        }
    }
}

impl FromStr for Size {
    type Err = UnknownValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|size| size.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| UnknownValue(s.to_string()))
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who lists an item for rent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OwnerType {
    /// Peer-to-peer listing by another user
    #[serde(rename = "user", alias = "individual")]
    Individual,
    /// Listing owned by the store
    #[serde(rename = "store")]
    Store,
}

impl fmt::Display for OwnerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Individual => f.write_str("individual"),
            Self::Store => f.write_str("store"),
        }
    }
}

/// A rentable outfit as returned by a catalog source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    pub id: ItemId,
    pub title: String,
    #[serde(default, deserialize_with = "lenient_enum")]
    pub category: Option<Category>,
    #[serde(default, deserialize_with = "lenient_enum")]
    pub size: Option<Size>,
    /// Rental price per day
    pub price_per_day: u32,
    pub owner_type: OwnerType,

    #[serde(default)]
    pub owner_name: Option<String>,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default = "default_available")]
    pub available: bool,
}

const fn default_available() -> bool {
    true
}

impl CatalogItem {
    /// Create an available item with empty presentation fields
    pub fn new(
        id: impl Into<ItemId>,
        title: impl Into<String>,
        price_per_day: u32,
        owner_type: OwnerType,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            category: None,
            size: None,
            price_per_day,
            owner_type,
            owner_name: None,
            brand: None,
            description: String::new(),
            images: Vec::new(),
            tags: Vec::new(),
            available: true,
        }
    }

    #[must_use]
    pub const fn with_category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    #[must_use]
    pub const fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }

    #[must_use]
    pub fn with_brand(mut self, brand: impl Into<String>) -> Self {
        self.brand = Some(brand.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    #[must_use]
    pub fn with_owner_name(mut self, name: impl Into<String>) -> Self {
        self.owner_name = Some(name.into());
        self
    }

    #[must_use]
    pub const fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }
}

/// Deserialize an optional enum, mapping unknown strings to `None`
fn lenient_enum<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|value| value.parse().ok()))
}
