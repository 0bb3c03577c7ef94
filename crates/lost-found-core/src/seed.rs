//! Mock data used when no snapshot has been saved yet.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::domain::{Category, Item, ItemStatus, NewNotification, Notification, NotificationKind, Role, User, UserStats};

fn day(year: i32, month: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, d).unwrap_or_default()
}

fn at(year: i32, month: u32, d: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, d, hour, min, 0)
        .single()
        .unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn item(
    id: &str,
    title: &str,
    category: Category,
    location: &str,
    date: NaiveDate,
    description: &str,
    status: ItemStatus,
    image: Option<&str>,
    reporter: &str,
    created: DateTime<Utc>,
) -> Item {
    let contact = format!("{}@university.edu", reporter.to_lowercase().replace(' ', "."));
    Item {
        id: id.to_string(),
        title: title.to_string(),
        category,
        location: location.to_string(),
        date,
        description: description.to_string(),
        status,
        image: image.map(str::to_string),
        reporter: reporter.to_string(),
        contact_info: contact,
        created_at: created,
        updated_at: created,
    }
}

/// The six starter items, oldest last
pub fn items() -> Vec<Item> {
    vec![
        item(
            "1",
            "Blue Backpack",
            Category::Bag,
            "Library - 2nd Floor",
            day(2025, 1, 10),
            "Navy blue backpack with laptop compartment, found near study area",
            ItemStatus::Found,
            Some("https://images.pexels.com/photos/2905238/pexels-photo-2905238.jpeg?w=400"),
            "Sarah Chen",
            at(2025, 1, 10, 10, 0),
        ),
        item(
            "2",
            "iPhone 14 Pro",
            Category::Electronics,
            "Student Center",
            day(2025, 1, 9),
            "Space Gray iPhone with cracked screen protector",
            ItemStatus::Lost,
            None,
            "Mike Johnson",
            at(2025, 1, 9, 14, 30),
        ),
        item(
            "3",
            "Red Water Bottle",
            Category::Personal,
            "Gym",
            day(2025, 1, 8),
            "Hydro Flask red water bottle with stickers",
            ItemStatus::Found,
            Some("https://images.pexels.com/photos/4393021/pexels-photo-4393021.jpeg?w=400"),
            "Alex Rivera",
            at(2025, 1, 8, 16, 45),
        ),
        item(
            "4",
            "Student ID Card",
            Category::Documents,
            "Cafeteria",
            day(2025, 1, 7),
            "Student ID for Emma Wilson, Computer Science",
            ItemStatus::Claimed,
            None,
            "David Park",
            at(2025, 1, 7, 12, 15),
        ),
        item(
            "5",
            "Wireless Earbuds",
            Category::Electronics,
            "Engineering Building",
            day(2025, 1, 6),
            "AirPods Pro in white case",
            ItemStatus::Found,
            None,
            "Lisa Garcia",
            at(2025, 1, 6, 9, 20),
        ),
        item(
            "6",
            "Black Hoodie",
            Category::Clothing,
            "Sports Complex",
            day(2025, 1, 5),
            "Nike black hoodie, size Medium",
            ItemStatus::Lost,
            None,
            "Tom Wilson",
            at(2025, 1, 5, 18, 5),
        ),
    ]
}

pub fn current_user() -> User {
    User {
        id: "1".to_string(),
        name: "Sarah Chen".to_string(),
        email: "sarah.chen@university.edu".to_string(),
        avatar: Some(
            "https://images.pexels.com/photos/774909/pexels-photo-774909.jpeg?w=150&h=150&fit=crop&crop=face"
                .to_string(),
        ),
        role: Role::Student,
        join_date: day(2023, 9, 15),
        stats: UserStats {
            items_reported: 12,
            items_claimed: 8,
            helpful_returns: 15,
            success_rate: 87,
        },
        badges: ["helper", "reporter", "finder"].into_iter().map(str::to_string).collect(),
    }
}

pub fn notifications() -> Vec<Notification> {
    let seeded = [
        (
            "1",
            NotificationKind::Match,
            "Potential Match Found!",
            "A blue backpack matching your report was found in Library",
            at(2025, 1, 10, 9, 30),
            false,
        ),
        (
            "2",
            NotificationKind::Claim,
            "Claim Approved",
            "Your claim for AirPods has been approved",
            at(2025, 1, 9, 15, 20),
            true,
        ),
    ];
    seeded
        .into_iter()
        .map(|(id, kind, title, message, date, read)| {
            let mut notification = NewNotification {
                kind,
                title: title.to_string(),
                message: message.to_string(),
            }
            .into_notification(id.to_string(), date);
            notification.read = read;
            notification
        })
        .collect()
}
