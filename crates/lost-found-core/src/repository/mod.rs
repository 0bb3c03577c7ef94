//! Repository Layer
//!
//! In-memory collections behind the store.

mod traits;
mod item_repo;
mod notification_repo;

#[cfg(test)]
mod tests;

pub use traits::{Repository, SearchableRepository};
pub use item_repo::{ItemRepository, StatusCounts};
pub use notification_repo::NotificationList;
