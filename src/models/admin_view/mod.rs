//! View-state of the admin dashboard page.
//!
//! One [`AdminView`] lives for one page mount. It starts in
//! [`ViewPhase::Loading`], and [`AdminView::settle`] moves it to
//! [`ViewPhase::Loaded`] exactly once, whatever the fetch outcome.

pub mod loader;

use crate::api::ApiError;
use crate::models::dashboard_stats::DashboardStats;
use crate::models::system_log::SystemLog;
use crate::models::user::{RoleFilter, User};

pub use self::loader::{DashboardData, LoadOutcome, fetch_dashboard, load};

pub const FETCH_FAILED_TITLE: &str = "Error";
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch dashboard data";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewPhase {
    Loading,
    Loaded,
}

/// A transient user-visible message (toast).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub destructive: bool,
}

impl Notification {
    pub fn fetch_failed() -> Self {
        Notification {
            title: FETCH_FAILED_TITLE.to_string(),
            description: FETCH_FAILED_MESSAGE.to_string(),
            destructive: true,
        }
    }
}

/// One of the four cards above the tabs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCard {
    pub key: &'static str,
    pub title: &'static str,
    pub value: String,
    pub caption: &'static str,
    pub accent: &'static str,
}

#[derive(Debug, Clone)]
pub struct AdminView {
    pub search_query: String,
    pub role_filter: RoleFilter,
    pub phase: ViewPhase,
    pub stats: Option<DashboardStats>,
    pub users: Vec<User>,
    pub logs: Vec<SystemLog>,
    pub notifications: Vec<Notification>,
}

impl AdminView {
    /// Fresh state for a new mount: empty collections, loading.
    pub fn mount() -> Self {
        AdminView {
            search_query: String::new(),
            role_filter: RoleFilter::All,
            phase: ViewPhase::Loading,
            stats: None,
            users: Vec::new(),
            logs: Vec::new(),
            notifications: Vec::new(),
        }
    }

    pub fn loading(&self) -> bool {
        self.phase == ViewPhase::Loading
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn set_role_filter(&mut self, filter: RoleFilter) {
        self.role_filter = filter;
    }

    /// Rows of the user table. The search box and role selector are not
    /// applied; every loaded user is listed.
    pub fn visible_users(&self) -> &[User] {
        &self.users
    }

    pub fn total_users(&self) -> usize {
        self.users.len()
    }

    /// Commit the aggregate fetch result and leave the loading phase.
    pub fn settle(&mut self, outcome: Result<DashboardData, ApiError>) {
        if self.phase == ViewPhase::Loaded {
            log::warn!("Dashboard view already loaded; ignoring late fetch result");
            return;
        }

        match outcome {
            Ok(data) => {
                if let Err(slot) = self.commit(data) {
                    log::error!("Error fetching data: {slot} response reported success without data");
                    self.notifications.push(Notification::fetch_failed());
                }
            }
            Err(e) => {
                log::error!("Error fetching data: {e}");
                self.notifications.push(Notification::fetch_failed());
            }
        }

        self.phase = ViewPhase::Loaded;
    }

    /// Copy successful payloads in stats, users, logs order. A successful
    /// response without data stops the commit; earlier slots stay set.
    fn commit(&mut self, data: DashboardData) -> Result<(), &'static str> {
        if data.stats.success {
            self.stats = Some(data.stats.data.ok_or("stats")?);
        }
        if data.users.success {
            self.users = data.users.data.ok_or("users")?.items;
        }
        if data.logs.success {
            self.logs = data.logs.data.ok_or("logs")?.items;
        }
        Ok(())
    }

    /// Total Users is live; the other three are fixed display values.
    pub fn summary_cards(&self) -> Vec<SummaryCard> {
        vec![
            SummaryCard {
                key: "total-users",
                title: "Total Users",
                value: self.total_users().to_string(),
                caption: "Active accounts",
                accent: "purple",
            },
            SummaryCard {
                key: "system-health",
                title: "System Health",
                value: "98%".to_string(),
                caption: "All systems operational",
                accent: "green",
            },
            SummaryCard {
                key: "active-sessions",
                title: "Active Sessions",
                value: "24".to_string(),
                caption: "Current users online",
                accent: "blue",
            },
            SummaryCard {
                key: "system-load",
                title: "System Load",
                value: "42%".to_string(),
                caption: "Optimal performance",
                accent: "orange",
            },
        ]
    }
}
