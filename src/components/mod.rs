//! UI Components
//!
//! Pages and the reusable pieces they share.

mod nav_bar;
mod landing_page;
mod animated_counters;
mod dashboard;
mod item_card;
mod report_form;
mod category_selector;
mod admin_panel;
mod user_profile;

pub use nav_bar::NavBar;
pub use landing_page::LandingPage;
pub use animated_counters::AnimatedCounters;
pub use dashboard::Dashboard;
pub use item_card::ItemCard;
pub use report_form::ReportForm;
pub use category_selector::CategorySelector;
pub use admin_panel::AdminPanel;
pub use user_profile::UserProfile;
