use std::sync::Weak;

use tokio::sync::Mutex;

use super::AdminView;
use crate::api::{AdminBackend, ApiError};
use crate::models::dashboard_stats::DashboardStats;
use crate::models::envelope::{ApiResponse, ItemList};
use crate::models::system_log::SystemLog;
use crate::models::user::User;

/// The three responses, collected before anything touches view-state.
#[derive(Debug, Clone)]
pub struct DashboardData {
    pub stats: ApiResponse<DashboardStats>,
    pub users: ApiResponse<ItemList<User>>,
    pub logs: ApiResponse<ItemList<SystemLog>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// Result committed to the view.
    Applied,
    /// The view was gone by the time the fetch settled.
    Discarded,
}

/// Issue the three reads concurrently. The first failure fails the whole
/// batch; which request failed is only visible in the error itself.
pub async fn fetch_dashboard(backend: &dyn AdminBackend) -> Result<DashboardData, ApiError> {
    let (stats, users, logs) = tokio::try_join!(
        backend.dashboard_stats(),
        backend.all_users(),
        backend.system_logs(),
    )?;
    Ok(DashboardData { stats, users, logs })
}

/// Fetch and commit into `view` if it is still alive.
pub async fn load(backend: &dyn AdminBackend, view: Weak<Mutex<AdminView>>) -> LoadOutcome {
    let outcome = fetch_dashboard(backend).await;

    let Some(view) = view.upgrade() else {
        log::debug!("Admin view dropped before dashboard data settled; discarding");
        return LoadOutcome::Discarded;
    };

    view.lock().await.settle(outcome);
    LoadOutcome::Applied
}
