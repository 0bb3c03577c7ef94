//! Fixed Catalogs
//!
//! Item categories and the location suggestions offered by the report form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::entity::DomainError;

/// Category tag of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Electronics,
    Bag,
    Clothing,
    Documents,
    Jewelry,
    Books,
    Sports,
    Personal,
    Other,
}

impl Category {
    /// Every category, in the order the report form lists them
    pub const ALL: [Category; 9] = [
        Category::Electronics,
        Category::Bag,
        Category::Clothing,
        Category::Documents,
        Category::Jewelry,
        Category::Books,
        Category::Sports,
        Category::Personal,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Electronics => "electronics",
            Category::Bag => "bag",
            Category::Clothing => "clothing",
            Category::Documents => "documents",
            Category::Jewelry => "jewelry",
            Category::Books => "books",
            Category::Sports => "sports",
            Category::Personal => "personal",
            Category::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Bag => "Bags & Backpacks",
            Category::Clothing => "Clothing",
            Category::Documents => "Documents",
            Category::Jewelry => "Jewelry",
            Category::Books => "Books & Stationery",
            Category::Sports => "Sports Equipment",
            Category::Personal => "Personal Items",
            Category::Other => "Other",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Category::Electronics => "📱",
            Category::Bag => "🎒",
            Category::Clothing => "👕",
            Category::Documents => "📄",
            Category::Jewelry => "💍",
            Category::Books => "📚",
            Category::Sports => "⚽",
            Category::Personal => "🧴",
            Category::Other => "🔍",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| DomainError::InvalidInput(format!("unknown category '{}'", s)))
    }
}

/// Location suggestions for the report form
pub const LOCATIONS: &[&str] = &[
    "Library - Main Floor",
    "Library - 2nd Floor",
    "Library - 3rd Floor",
    "Student Center",
    "Cafeteria",
    "Gym/Sports Complex",
    "Engineering Building",
    "Science Building",
    "Arts Building",
    "Dormitory",
    "Parking Lot",
    "Other",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse() {
        assert_eq!("electronics".parse::<Category>(), Ok(Category::Electronics));
        assert_eq!("bag".parse::<Category>(), Ok(Category::Bag));
        assert!("Electronics".parse::<Category>().is_err());
        assert!("".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_serde_uses_ids() {
        let json = serde_json::to_string(&Category::Jewelry).unwrap();
        assert_eq!(json, "\"jewelry\"");
        for category in Category::ALL {
            let text = serde_json::to_string(&category).unwrap();
            assert_eq!(text, format!("\"{}\"", category.as_str()));
        }
    }
}
