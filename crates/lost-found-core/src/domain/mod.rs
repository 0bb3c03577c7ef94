//! Domain Layer
//!
//! Entities, fixed catalogs and the core error type.

mod entity;
mod item;
mod notification;
mod user;
mod catalog;
mod page;

pub use entity::{Entity, DomainError, DomainResult};
pub(crate) use entity::new_id;
pub use item::{Item, ItemStatus, NewItem, ItemPatch};
pub use notification::{Notification, NotificationKind, NewNotification};
pub use user::{User, Role, UserStats, Badge, BADGES};
pub use catalog::{Category, LOCATIONS};
pub use page::Page;
