//! Item Repository
//!
//! Ordered in-memory collection of items. Insertion order is the default
//! display order.

use chrono::Utc;

use crate::domain::{new_id, DomainError, DomainResult, Item, ItemPatch, ItemStatus, NewItem};
use crate::filter::{self, ItemFilter};
use super::traits::{Repository, SearchableRepository};

/// Per-status totals for the admin overview
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub lost: usize,
    pub found: usize,
    pub claimed: usize,
}

impl StatusCounts {
    pub fn total(&self) -> usize {
        self.lost + self.found + self.claimed
    }

    /// Share of items already claimed, rounded down to a whole percent
    pub fn claimed_percent(&self) -> u8 {
        match self.total() {
            0 => 0,
            total => (self.claimed * 100 / total) as u8,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemRepository {
    items: Vec<Item>,
}

impl ItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap records loaded from a snapshot
    pub fn from_items(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Append a new item with a fresh id and `created_at == updated_at == now`
    pub fn add(&mut self, new_item: NewItem) -> Item {
        let item = new_item.into_item(new_id(), Utc::now());
        log::debug!("[ITEMS] add {} '{}' ({})", item.id, item.title, item.status);
        self.items.push(item.clone());
        item
    }

    /// Merge `patch` into the item and refresh `updated_at`
    pub fn update(&mut self, id: &str, patch: ItemPatch) -> DomainResult<Item> {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            log::warn!("[ITEMS] update: no item {}", id);
            return Err(DomainError::NotFound(format!("item {}", id)));
        };
        patch.apply(item, Utc::now());
        log::debug!("[ITEMS] updated {}", id);
        Ok(item.clone())
    }

    pub fn list_by_status(&self, status: ItemStatus) -> Vec<&Item> {
        self.items.iter().filter(|item| item.status == status).collect()
    }

    /// Items matching the dashboard filter, in order
    pub fn filter(&self, filter: &ItemFilter) -> Vec<&Item> {
        filter.apply(&self.items)
    }

    pub fn status_counts(&self) -> StatusCounts {
        self.items.iter().fold(StatusCounts::default(), |mut counts, item| {
            match item.status {
                ItemStatus::Lost => counts.lost += 1,
                ItemStatus::Found => counts.found += 1,
                ItemStatus::Claimed => counts.claimed += 1,
            }
            counts
        })
    }

    /// Most recently added first
    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &Item> {
        self.items.iter().rev().take(limit)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Repository<Item> for ItemRepository {
    type Draft = NewItem;

    fn create(&mut self, draft: NewItem) -> Item {
        self.add(draft)
    }

    fn find_by_id(&self, id: &String) -> Option<&Item> {
        self.items.iter().find(|item| &item.id == id)
    }

    fn list(&self) -> &[Item] {
        &self.items
    }

    fn delete(&mut self, id: &String) -> DomainResult<Item> {
        match self.items.iter().position(|item| &item.id == id) {
            Some(index) => {
                log::debug!("[ITEMS] delete {}", id);
                Ok(self.items.remove(index))
            }
            None => {
                log::warn!("[ITEMS] delete: no item {}", id);
                Err(DomainError::NotFound(format!("item {}", id)))
            }
        }
    }
}

impl SearchableRepository<Item> for ItemRepository {
    /// Blank query returns every item
    fn search(&self, query: &str) -> Vec<&Item> {
        if filter::is_blank(query) {
            return self.items.iter().collect();
        }
        let lowered = query.to_lowercase();
        self.items
            .iter()
            .filter(|item| filter::matches_text(item, &lowered))
            .collect()
    }
}
