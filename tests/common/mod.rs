//! Shared test infrastructure: an in-memory admin backend and sample data.
#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Notify;

use bloodbank_admin::api::{AdminBackend, ApiError};
use bloodbank_admin::models::dashboard_stats::{BloodInventoryEntry, DashboardStats};
use bloodbank_admin::models::envelope::{ApiResponse, ItemList};
use bloodbank_admin::models::system_log::SystemLog;
use bloodbank_admin::models::user::{Role, User};

// ============================================================================
// STUB BACKEND
// ============================================================================

/// What one stubbed endpoint answers.
#[derive(Clone)]
pub enum Reply<T> {
    Ok(ApiResponse<T>),
    /// Fails the call with this HTTP status.
    Fail(u16),
}

pub struct StubBackend {
    pub stats: Reply<DashboardStats>,
    pub users: Reply<ItemList<User>>,
    pub logs: Reply<ItemList<SystemLog>>,
    pub calls: AtomicUsize,
    /// When set, the users call waits for a permit before answering.
    pub users_gate: Option<Arc<Notify>>,
}

impl StubBackend {
    pub fn new(stats: DashboardStats, users: Vec<User>, logs: Vec<SystemLog>) -> Self {
        StubBackend {
            stats: Reply::Ok(ApiResponse::ok(stats)),
            users: Reply::Ok(ApiResponse::ok(ItemList::from(users))),
            logs: Reply::Ok(ApiResponse::ok(ItemList::from(logs))),
            calls: AtomicUsize::new(0),
            users_gate: None,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn answer<T: Clone>(&self, reply: &Reply<T>, endpoint: &'static str) -> Result<ApiResponse<T>, ApiError> {
        match reply {
            Reply::Ok(resp) => Ok(resp.clone()),
            Reply::Fail(status) => Err(ApiError::Status { endpoint, status: *status }),
        }
    }
}

#[async_trait]
impl AdminBackend for StubBackend {
    async fn dashboard_stats(&self) -> Result<ApiResponse<DashboardStats>, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer(&self.stats, "/dashboard/stats")
    }

    async fn all_users(&self) -> Result<ApiResponse<ItemList<User>>, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(gate) = &self.users_gate {
            gate.notified().await;
        }
        self.answer(&self.users, "/admin/users")
    }

    async fn system_logs(&self) -> Result<ApiResponse<ItemList<SystemLog>>, ApiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer(&self.logs, "/admin/logs")
    }
}

// ============================================================================
// SAMPLE DATA
// ============================================================================

pub fn sample_user(i: usize, role: Role) -> User {
    User {
        id: format!("user-{i}"),
        first_name: format!("First{i}"),
        last_name: format!("Last{i}"),
        email: format!("user{i}@example.org"),
        role,
        blood_type: Some("O+".to_string()),
    }
}

/// Donor, staff and admin accounts in rotation.
pub fn sample_users(n: usize) -> Vec<User> {
    (0..n)
        .map(|i| {
            let role = match i % 3 {
                0 => Role::Donor,
                1 => Role::Staff,
                _ => Role::Admin,
            };
            sample_user(i, role)
        })
        .collect()
}

pub fn sample_log(i: usize) -> SystemLog {
    SystemLog {
        id: format!("log-{i}"),
        kind: "info".to_string(),
        message: format!("event {i}"),
        user_id: Some(format!("user-{i}")),
        created_at: DateTime::parse_from_rfc3339("2025-03-14T14:05:09Z")
            .expect("timestamp")
            .with_timezone(&Utc),
    }
}

pub fn sample_stats(total_users: i64) -> DashboardStats {
    DashboardStats {
        total_users,
        total_donors: 6,
        total_staff: 3,
        total_blood_requests: 12,
        pending_blood_requests: 4,
        total_donations: 40,
        recent_donations: 5,
        blood_inventory: vec![
            BloodInventoryEntry { blood_type: "A+".to_string(), units: 14 },
            BloodInventoryEntry { blood_type: "O-".to_string(), units: 3 },
        ],
    }
}
