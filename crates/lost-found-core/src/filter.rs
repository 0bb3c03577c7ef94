//! Item Filtering
//!
//! Dashboard filter: free-text query AND category facet AND status facet.
//! Results keep collection order; there is no relevance ranking.

use std::str::FromStr;

use crate::domain::{Category, Item, ItemStatus};

/// Select value meaning "no constraint"
pub const ALL_VALUE: &str = "all";

/// Either every value, or exactly one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facet<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Facet<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Facet::All => true,
            Facet::Only(wanted) => wanted == value,
        }
    }
}

impl<T: FromStr> Facet<T> {
    /// Parse a select value; `"all"` and unrecognised values both mean `All`
    pub fn from_param(value: &str) -> Self {
        if value == ALL_VALUE {
            return Facet::All;
        }
        value.parse().map(Facet::Only).unwrap_or(Facet::All)
    }
}

impl Facet<Category> {
    pub fn as_param(&self) -> &'static str {
        match self {
            Facet::All => ALL_VALUE,
            Facet::Only(category) => category.as_str(),
        }
    }
}

impl Facet<ItemStatus> {
    pub fn as_param(&self) -> &'static str {
        match self {
            Facet::All => ALL_VALUE,
            Facet::Only(status) => status.as_str(),
        }
    }
}

/// True when the query is empty or whitespace only
pub fn is_blank(query: &str) -> bool {
    query.trim().is_empty()
}

/// Case-insensitive substring match over title, description, location and category.
///
/// `lowered` must already be lowercased.
pub(crate) fn matches_text(item: &Item, lowered: &str) -> bool {
    item.title.to_lowercase().contains(lowered)
        || item.description.to_lowercase().contains(lowered)
        || item.location.to_lowercase().contains(lowered)
        || item.category.as_str().contains(lowered)
}

/// Active dashboard filter
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemFilter {
    pub query: String,
    pub category: Facet<Category>,
    pub status: Facet<ItemStatus>,
}

impl ItemFilter {
    pub fn is_empty(&self) -> bool {
        is_blank(&self.query) && self.category == Facet::All && self.status == Facet::All
    }

    /// Items passing all three predicates, in their original order
    pub fn apply<'a, I>(&self, items: I) -> Vec<&'a Item>
    where
        I: IntoIterator<Item = &'a Item>,
    {
        let lowered = (!is_blank(&self.query)).then(|| self.query.to_lowercase());
        items
            .into_iter()
            .filter(|item| {
                lowered.as_deref().map_or(true, |q| matches_text(item, q))
                    && self.category.matches(&item.category)
                    && self.status.matches(&item.status)
            })
            .collect()
    }
}
