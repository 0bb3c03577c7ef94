//! Repository Tests
//!
//! ItemRepository and NotificationList over the seed fixture.

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::NaiveDate;

    use crate::domain::{Category, DomainError, ItemPatch, ItemStatus, NewItem, NewNotification, NotificationKind};
    use crate::repository::{ItemRepository, NotificationList, Repository, SearchableRepository};
    use crate::seed;

    fn setup_items() -> ItemRepository {
        ItemRepository::from_items(seed::items())
    }

    fn new_item(title: &str, status: ItemStatus) -> NewItem {
        NewItem {
            title: title.to_string(),
            category: Category::Books,
            location: "Library - Main Floor".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 1, 11).unwrap(),
            description: "Left on a reading table".to_string(),
            status,
            image: None,
            reporter: "Sarah Chen".to_string(),
            contact_info: "sarah.chen@university.edu".to_string(),
        }
    }

    fn titles<'a>(items: impl IntoIterator<Item = &'a crate::domain::Item>) -> Vec<&'a str> {
        items.into_iter().map(|i| i.title.as_str()).collect()
    }

    #[test]
    fn test_add_item() {
        let mut repo = setup_items();
        let created = repo.add(new_item("Linear Algebra Notes", ItemStatus::Lost));

        assert_eq!(repo.len(), 7);
        assert_eq!(created.created_at, created.updated_at);
        assert_eq!(repo.list().last(), Some(&created));
        assert_eq!(repo.find_by_id(&created.id), Some(&created));
    }

    #[test]
    fn test_added_ids_are_unique() {
        let mut repo = setup_items();
        let mut seen: HashSet<String> = repo.list().iter().map(|i| i.id.clone()).collect();

        for n in 0..50 {
            let created = repo.create(new_item(&format!("Item {}", n), ItemStatus::Found));
            assert!(seen.insert(created.id), "duplicate id");
        }
    }

    #[test]
    fn test_update_item() {
        let mut repo = setup_items();
        let updated = repo
            .update("2", ItemPatch::status(ItemStatus::Claimed))
            .expect("Update failed");

        assert_eq!(updated.status, ItemStatus::Claimed);
        assert_eq!(updated.title, "iPhone 14 Pro");
        assert!(updated.updated_at >= updated.created_at);
        assert_eq!(repo.find_by_id(&"2".to_string()), Some(&updated));
    }

    #[test]
    fn test_update_unknown_id() {
        let mut repo = setup_items();
        let before = repo.clone();

        let result = repo.update("missing", ItemPatch::status(ItemStatus::Found));
        assert!(matches!(result, Err(DomainError::NotFound(_))));
        assert_eq!(repo, before);
    }

    #[test]
    fn test_delete_item() {
        let mut repo = setup_items();
        let removed = repo.delete(&"3".to_string()).expect("Delete failed");

        assert_eq!(removed.title, "Red Water Bottle");
        assert_eq!(repo.len(), 5);
        assert!(repo.find_by_id(&"3".to_string()).is_none());

        let again = repo.delete(&"3".to_string());
        assert!(matches!(again, Err(DomainError::NotFound(_))));
        assert_eq!(repo.len(), 5);
    }

    #[test]
    fn test_list_by_status_keeps_order() {
        let repo = setup_items();
        assert_eq!(titles(repo.list_by_status(ItemStatus::Lost)), vec!["iPhone 14 Pro", "Black Hoodie"]);
        assert_eq!(
            titles(repo.list_by_status(ItemStatus::Found)),
            vec!["Blue Backpack", "Red Water Bottle", "Wireless Earbuds"]
        );
        assert_eq!(titles(repo.list_by_status(ItemStatus::Claimed)), vec!["Student ID Card"]);
    }

    #[test]
    fn test_blank_search_returns_everything() {
        let repo = setup_items();
        assert_eq!(titles(repo.search("")), titles(repo.list()));
        assert_eq!(repo.search("   \t").len(), 6);
    }

    #[test]
    fn test_search_is_case_insensitive_over_fields() {
        let repo = setup_items();
        // location
        assert_eq!(titles(repo.search("library")), vec!["Blue Backpack"]);
        // title
        assert_eq!(titles(repo.search("IPHONE")), vec!["iPhone 14 Pro"]);
        // description
        assert_eq!(titles(repo.search("airpods")), vec!["Wireless Earbuds"]);
        // category id
        assert_eq!(titles(repo.search("documents")), vec!["Student ID Card"]);
        assert!(repo.search("umbrella").is_empty());
    }

    #[test]
    fn test_search_keeps_seed_locations_apart() {
        let repo = setup_items();
        assert_eq!(titles(repo.search("gym")), vec!["Red Water Bottle"]);
        assert_eq!(titles(repo.search("sports complex")), vec!["Black Hoodie"]);
    }

    #[test]
    fn test_status_counts() {
        let mut repo = setup_items();
        let counts = repo.status_counts();
        assert_eq!((counts.lost, counts.found, counts.claimed, counts.total()), (2, 3, 1, 6));
        assert_eq!(counts.claimed_percent(), 16);

        repo.update("1", ItemPatch::status(ItemStatus::Claimed)).unwrap();
        assert_eq!(repo.status_counts().claimed, 2);
        assert_eq!(ItemRepository::new().status_counts().claimed_percent(), 0);
    }

    #[test]
    fn test_recent_is_newest_first() {
        let mut repo = setup_items();
        repo.add(new_item("Newest", ItemStatus::Found));
        assert_eq!(titles(repo.recent(3)), vec!["Newest", "Black Hoodie", "Wireless Earbuds"]);
    }

    #[test]
    fn test_add_notification_goes_first() {
        let mut list = NotificationList::from_notifications(seed::notifications());
        let added = list.add(NewNotification {
            kind: NotificationKind::Success,
            title: "Item Returned".to_string(),
            message: "Your backpack was picked up".to_string(),
        });

        assert!(!added.read);
        assert_eq!(list.list()[0], added);
        assert_eq!(list.len(), 3);
        assert_eq!(list.unread_count(), 2);
    }

    #[test]
    fn test_mark_read_touches_only_target() {
        let mut list = NotificationList::from_notifications(seed::notifications());
        let before = list.list().to_vec();

        list.mark_read("1").expect("mark_read failed");

        let after = list.list();
        assert!(after[0].read);
        let mut expected_first = before[0].clone();
        expected_first.read = true;
        assert_eq!(after[0], expected_first);
        assert_eq!(after[1], before[1]);
        assert_eq!(list.unread_count(), 0);

        // read stays read
        list.mark_read("1").unwrap();
        assert!(list.list()[0].read);
    }

    #[test]
    fn test_mark_read_unknown_id() {
        let mut list = NotificationList::from_notifications(seed::notifications());
        assert!(matches!(list.mark_read("99"), Err(DomainError::NotFound(_))));
        assert_eq!(list.unread_count(), 1);
    }

    #[test]
    fn test_clear_notifications() {
        let mut list = NotificationList::from_notifications(seed::notifications());
        list.clear();
        assert!(list.is_empty());
        assert_eq!(list.unread_count(), 0);
    }
}
