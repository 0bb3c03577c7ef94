//! Item Entity
//!
//! A reported lost or found object.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::catalog::Category;
use super::entity::{DomainError, Entity};

/// Lifecycle tag of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    Lost,
    Found,
    Claimed,
}

impl ItemStatus {
    pub const ALL: [ItemStatus; 3] = [ItemStatus::Lost, ItemStatus::Found, ItemStatus::Claimed];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemStatus::Lost => "lost",
            ItemStatus::Found => "found",
            ItemStatus::Claimed => "claimed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ItemStatus::Lost => "Lost",
            ItemStatus::Found => "Found",
            ItemStatus::Claimed => "Claimed",
        }
    }
}

impl fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ItemStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "lost" => Ok(ItemStatus::Lost),
            "found" => Ok(ItemStatus::Found),
            "claimed" => Ok(ItemStatus::Claimed),
            other => Err(DomainError::InvalidInput(format!("unknown status '{}'", other))),
        }
    }
}

/// A reported item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// Unique identifier
    pub id: String,
    pub title: String,
    pub category: Category,
    pub location: String,
    /// Day the item was lost or found
    pub date: NaiveDate,
    pub description: String,
    pub status: ItemStatus,
    /// Optional image reference (URL)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    /// Display name of whoever reported it
    pub reporter: String,
    pub contact_info: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entity for Item {
    type Id = String;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Fields of an item before the repository assigns id and timestamps
#[derive(Debug, Clone, PartialEq)]
pub struct NewItem {
    pub title: String,
    pub category: Category,
    pub location: String,
    pub date: NaiveDate,
    pub description: String,
    pub status: ItemStatus,
    pub image: Option<String>,
    pub reporter: String,
    pub contact_info: String,
}

impl NewItem {
    pub(crate) fn into_item(self, id: String, now: DateTime<Utc>) -> Item {
        Item {
            id,
            title: self.title,
            category: self.category,
            location: self.location,
            date: self.date,
            description: self.description,
            status: self.status,
            image: self.image,
            reporter: self.reporter,
            contact_info: self.contact_info,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Partial update; `None` leaves the field untouched
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    pub title: Option<String>,
    pub category: Option<Category>,
    pub location: Option<String>,
    pub date: Option<NaiveDate>,
    pub description: Option<String>,
    pub status: Option<ItemStatus>,
    /// `Some(None)` clears the image
    pub image: Option<Option<String>>,
    pub reporter: Option<String>,
    pub contact_info: Option<String>,
}

impl ItemPatch {
    /// Patch that only changes the status
    pub fn status(status: ItemStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    /// Merge present fields into `item` and stamp `updated_at`.
    ///
    /// `updated_at` never goes below `created_at`.
    pub(crate) fn apply(self, item: &mut Item, now: DateTime<Utc>) {
        if let Some(title) = self.title {
            item.title = title;
        }
        if let Some(category) = self.category {
            item.category = category;
        }
        if let Some(location) = self.location {
            item.location = location;
        }
        if let Some(date) = self.date {
            item.date = date;
        }
        if let Some(description) = self.description {
            item.description = description;
        }
        if let Some(status) = self.status {
            item.status = status;
        }
        if let Some(image) = self.image {
            item.image = image;
        }
        if let Some(reporter) = self.reporter {
            item.reporter = reporter;
        }
        if let Some(contact_info) = self.contact_info {
            item.contact_info = contact_info;
        }
        item.updated_at = now.max(item.created_at);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> NewItem {
        NewItem {
            title: "Blue Backpack".to_string(),
            category: Category::Bag,
            location: "Library - 2nd Floor".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, 10).unwrap(),
            description: "Navy blue backpack".to_string(),
            status: ItemStatus::Found,
            image: None,
            reporter: "Sarah Chen".to_string(),
            contact_info: "sarah.chen@university.edu".to_string(),
        }
    }

    #[test]
    fn test_patch_only_touches_given_fields() {
        let now = Utc.with_ymd_and_hms(2025, 1, 10, 10, 0, 0).unwrap();
        let mut item = sample().into_item("1".to_string(), now);

        let later = Utc.with_ymd_and_hms(2025, 1, 11, 8, 0, 0).unwrap();
        ItemPatch::status(ItemStatus::Claimed).apply(&mut item, later);

        assert_eq!(item.status, ItemStatus::Claimed);
        assert_eq!(item.title, "Blue Backpack");
        assert_eq!(item.created_at, now);
        assert_eq!(item.updated_at, later);
    }

    #[test]
    fn test_patch_never_moves_updated_before_created() {
        let now = Utc.with_ymd_and_hms(2025, 1, 10, 10, 0, 0).unwrap();
        let mut item = sample().into_item("1".to_string(), now);

        let skewed = Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap();
        ItemPatch {
            title: Some("Navy Backpack".to_string()),
            ..Default::default()
        }
        .apply(&mut item, skewed);

        assert_eq!(item.title, "Navy Backpack");
        assert!(item.created_at <= item.updated_at);
    }

    #[test]
    fn test_status_serialization() {
        assert_eq!(ItemStatus::Lost.as_str(), "lost");
        assert_eq!("claimed".parse::<ItemStatus>(), Ok(ItemStatus::Claimed));
        assert!("missing".parse::<ItemStatus>().is_err());
    }

    #[test]
    fn test_item_json_uses_camel_case() {
        let now = Utc.with_ymd_and_hms(2025, 1, 10, 10, 0, 0).unwrap();
        let item = sample().into_item("1".to_string(), now);
        let json = serde_json::to_value(&item).unwrap();

        assert_eq!(json["contactInfo"], "sarah.chen@university.edu");
        assert_eq!(json["status"], "found");
        assert!(json.get("image").is_none());
    }
}
