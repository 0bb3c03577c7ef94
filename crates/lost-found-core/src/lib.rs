//! CampusFind Core
//!
//! Storage-agnostic logic behind the lost & found app:
//! - domain: entities and fixed catalogs
//! - repository: item and notification collections
//! - filter: dashboard search and facets
//! - wizard: the four-step report form
//! - snapshot: persistence through an injected storage port
//! - counter: landing page counter animation steps

pub mod domain;
pub mod repository;
pub mod filter;
pub mod wizard;
pub mod snapshot;
pub mod counter;
pub mod config;
pub mod seed;

pub use config::AppConfig;
pub use domain::{Category, DomainError, DomainResult, Item, ItemPatch, ItemStatus, NewItem, Notification, Page, User};
pub use filter::{Facet, ItemFilter};
pub use repository::{ItemRepository, NotificationList, Repository, SearchableRepository};
pub use snapshot::{MemoryStorage, Snapshot, StorageError, StoragePort};
pub use wizard::{Photo, ReportKind, ReportWizard, Step, WizardError};
