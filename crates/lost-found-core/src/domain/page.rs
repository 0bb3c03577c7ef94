//! Navigation target

/// Top-level page of the app; never persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Dashboard,
    Report,
    Admin,
    Profile,
}

impl Page {
    pub const ALL: [Page; 5] = [Page::Home, Page::Dashboard, Page::Report, Page::Admin, Page::Profile];

    pub fn as_str(&self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Dashboard => "dashboard",
            Page::Report => "report",
            Page::Admin => "admin",
            Page::Profile => "profile",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Dashboard => "Browse Items",
            Page::Report => "Report Item",
            Page::Admin => "Admin",
            Page::Profile => "Profile",
        }
    }
}
