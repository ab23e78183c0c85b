//! Query types for item repository lookups.

use serde::{Deserialize, Serialize};

use catalog_types::Item;

/// Attribute filter for item queries.
///
/// Every supplied predicate must match. Name and category comparisons are
/// exact and case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemQuery {
    /// Exact name match.
    pub name: Option<String>,
    /// Exact category match.
    pub category: Option<String>,
    /// Availability flag match.
    pub available: Option<bool>,
}

impl ItemQuery {
    /// Creates a query that matches all items.
    pub fn all() -> Self {
        Self::default()
    }

    /// Sets the name filter.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the category filter.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the availability filter.
    pub fn with_availability(mut self, available: bool) -> Self {
        self.available = Some(available);
        self
    }

    /// Returns true if no predicate is set.
    pub fn is_unfiltered(&self) -> bool {
        self.name.is_none() && self.category.is_none() && self.available.is_none()
    }

    /// Evaluates the query against one item.
    pub fn matches(&self, item: &Item) -> bool {
        self.name.as_deref().map_or(true, |n| item.name == n)
            && self
                .category
                .as_deref()
                .map_or(true, |c| item.category == c)
            && self.available.map_or(true, |a| item.available == a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_types::{ItemId, NewItem};

    fn item(name: &str, category: &str, available: bool) -> Item {
        NewItem::new(name, category, available).into_item(ItemId::new(1))
    }

    #[test]
    fn all_matches_everything() {
        let q = ItemQuery::all();
        assert!(q.is_unfiltered());
        assert!(q.matches(&item("a", "b", true)));
        assert!(q.matches(&item("c", "d", false)));
    }

    #[test]
    fn name_match_is_case_sensitive() {
        let q = ItemQuery::all().with_name("Item1");
        assert!(q.matches(&item("Item1", "x", true)));
        assert!(!q.matches(&item("item1", "x", true)));
        assert!(!q.matches(&item("Item10", "x", true)));
    }

    #[test]
    fn category_match_is_exact() {
        let q = ItemQuery::all().with_category("CategoryA");
        assert!(q.matches(&item("x", "CategoryA", false)));
        assert!(!q.matches(&item("x", "CategoryAB", false)));
    }

    #[test]
    fn availability_filter_both_ways() {
        let on = ItemQuery::all().with_availability(true);
        let off = ItemQuery::all().with_availability(false);
        let a = item("x", "y", true);
        let b = item("x", "y", false);
        assert!(on.matches(&a) && !on.matches(&b));
        assert!(off.matches(&b) && !off.matches(&a));
    }

    #[test]
    fn combined_predicates_are_conjunctive() {
        let q = ItemQuery::all()
            .with_category("CategoryA")
            .with_availability(true);
        assert!(!q.is_unfiltered());
        assert!(q.matches(&item("x", "CategoryA", true)));
        assert!(!q.matches(&item("x", "CategoryA", false)));
        assert!(!q.matches(&item("x", "CategoryB", true)));
    }
}
