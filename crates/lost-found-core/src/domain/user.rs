//! User Entity
//!
//! The profile shown on the profile page. Stats are display-only counters.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Student,
    Staff,
    Admin,
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Role::Student => "Student",
            Role::Staff => "Staff",
            Role::Admin => "Admin",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub items_reported: u32,
    pub items_claimed: u32,
    pub helpful_returns: u32,
    /// Percentage, 0..=100
    pub success_rate: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub role: Role,
    pub join_date: NaiveDate,
    pub stats: UserStats,
    /// Ids of earned badges, see [`BADGES`]
    pub badges: BTreeSet<String>,
}

impl User {
    pub fn has_badge(&self, badge_id: &str) -> bool {
        self.badges.contains(badge_id)
    }

    /// Badge catalog paired with whether this user earned each one
    pub fn badge_progress(&self) -> impl Iterator<Item = (&'static Badge, bool)> + '_ {
        BADGES.iter().map(move |badge| (badge, self.has_badge(badge.id)))
    }
}

/// Badge catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

pub const BADGES: &[Badge] = &[
    Badge { id: "helper", name: "Community Helper", description: "Helped return 10+ items", icon: "🤝" },
    Badge { id: "reporter", name: "Eagle Eye", description: "Reported 10+ lost items", icon: "👁️" },
    Badge { id: "finder", name: "Treasure Hunter", description: "Found 5+ items", icon: "🔍" },
    Badge { id: "trusted", name: "Trusted Member", description: "High verification rate", icon: "⭐" },
];
