//! Read-only client side of the admin backend.
//!
//! The dashboard only ever calls three endpoints. They sit behind the
//! [`AdminBackend`] trait so handlers take `web::Data<dyn AdminBackend>`
//! and tests can substitute an in-memory backend.

pub mod http;

use async_trait::async_trait;
use std::fmt;

use crate::models::dashboard_stats::DashboardStats;
use crate::models::envelope::{ApiResponse, ItemList};
use crate::models::system_log::SystemLog;
use crate::models::user::User;

pub use self::http::HttpBackend;

#[async_trait]
pub trait AdminBackend: Send + Sync {
    async fn dashboard_stats(&self) -> Result<ApiResponse<DashboardStats>, ApiError>;
    async fn all_users(&self) -> Result<ApiResponse<ItemList<User>>, ApiError>;
    async fn system_logs(&self) -> Result<ApiResponse<ItemList<SystemLog>>, ApiError>;
}

#[derive(Debug)]
pub enum ApiError {
    /// Connection, TLS or client construction failure.
    Request { endpoint: &'static str, message: String },
    /// Non-2xx reply.
    Status { endpoint: &'static str, status: u16 },
    /// Body was not the expected envelope.
    Decode { endpoint: &'static str, message: String },
}

impl ApiError {
    pub fn endpoint(&self) -> &'static str {
        match self {
            ApiError::Request { endpoint, .. }
            | ApiError::Status { endpoint, .. }
            | ApiError::Decode { endpoint, .. } => endpoint,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Request { endpoint, message } => write!(f, "Request to {endpoint} failed: {message}"),
            ApiError::Status { endpoint, status } => write!(f, "{endpoint} returned HTTP {status}"),
            ApiError::Decode { endpoint, message } => write!(f, "Invalid response from {endpoint}: {message}"),
        }
    }
}

impl std::error::Error for ApiError {}
