//! Item identity and payload types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Repository-assigned identifier of an item.
///
/// Serialized as a bare integer so the wire shape stays `{"id": 1, ...}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(u64);

impl ItemId {
    /// Wraps a raw numeric id.
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw numeric id.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for ItemId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self)
    }
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Unique, immutable identity.
    pub id: ItemId,
    /// Free-text name; not unique.
    pub name: String,
    /// Free-text category.
    pub category: String,
    /// Whether the item is currently available.
    pub available: bool,
}

/// Fields supplied when creating an item. The id is assigned by the repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub category: String,
    pub available: bool,
}

impl NewItem {
    /// Creates a new payload.
    pub fn new(name: impl Into<String>, category: impl Into<String>, available: bool) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            available,
        }
    }

    /// Attaches an identity, producing a stored item.
    pub fn into_item(self, id: ItemId) -> Item {
        Item {
            id,
            name: self.name,
            category: self.category,
            available: self.available,
        }
    }
}

/// Merge update: only `Some` fields overwrite the stored item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

impl ItemPatch {
    /// Sets the name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the availability flag.
    pub fn with_available(mut self, available: bool) -> Self {
        self.available = Some(available);
        self
    }

    /// Returns true when no field would be overwritten.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.category.is_none() && self.available.is_none()
    }

    /// Overwrites the supplied fields of `item`, leaving the rest untouched.
    pub fn apply(self, item: &mut Item) {
        if let Some(name) = self.name {
            item.name = name;
        }
        if let Some(category) = self.category {
            item.category = category;
        }
        if let Some(available) = self.available {
            item.available = available;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Item {
        NewItem::new("Item2", "CategoryB", false).into_item(ItemId::new(2))
    }

    #[test]
    fn item_id_parses_decimal() {
        let id: ItemId = "42".parse().expect("parse");
        assert_eq!(id.get(), 42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn item_id_rejects_non_numeric() {
        assert!("abc".parse::<ItemId>().is_err());
        assert!("-1".parse::<ItemId>().is_err());
        assert!("".parse::<ItemId>().is_err());
    }

    #[test]
    fn item_serializes_with_flat_id() {
        let json = serde_json::to_value(sample()).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "id": 2,
                "name": "Item2",
                "category": "CategoryB",
                "available": false
            })
        );
    }

    #[test]
    fn patch_overwrites_only_supplied_fields() {
        let mut item = sample();
        ItemPatch::default()
            .with_category("CategoryC")
            .apply(&mut item);
        assert_eq!(item.id, ItemId::new(2));
        assert_eq!(item.name, "Item2");
        assert_eq!(item.category, "CategoryC");
        assert!(!item.available);
    }

    #[test]
    fn empty_patch_is_noop() {
        let patch = ItemPatch::default();
        assert!(patch.is_empty());
        let mut item = sample();
        patch.apply(&mut item);
        assert_eq!(item, sample());
    }

    #[test]
    fn patch_deserializes_partial_body() {
        let patch: ItemPatch =
            serde_json::from_str(r#"{"available": true}"#).expect("deserialize");
        assert_eq!(patch, ItemPatch::default().with_available(true));
        assert!(!patch.is_empty());
    }
}
