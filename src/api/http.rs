use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;

use super::{AdminBackend, ApiError};
use crate::config::AppConfig;
use crate::models::dashboard_stats::DashboardStats;
use crate::models::envelope::{ApiResponse, ItemList};
use crate::models::system_log::SystemLog;
use crate::models::user::User;

pub const STATS_PATH: &str = "/dashboard/stats";
pub const USERS_PATH: &str = "/admin/users";
pub const LOGS_PATH: &str = "/admin/logs";

/// [`AdminBackend`] over HTTP/JSON.
pub struct HttpBackend {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpBackend {
    pub fn new(base_url: &str, token: Option<String>) -> Result<Self, ApiError> {
        let client = Client::builder()
            .build()
            .map_err(|e| ApiError::Request { endpoint: "client", message: e.to_string() })?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ApiError> {
        Self::new(&config.api_base_url, config.api_token.clone())
    }

    async fn get<T: DeserializeOwned>(&self, endpoint: &'static str) -> Result<ApiResponse<T>, ApiError> {
        let url = format!("{}{}", self.base_url, endpoint);
        log::debug!("GET {url}");

        let mut req = self.client.get(&url);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| ApiError::Request { endpoint, message: e.to_string() })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ApiError::Status { endpoint, status: status.as_u16() });
        }

        resp.json::<ApiResponse<T>>()
            .await
            .map_err(|e| ApiError::Decode { endpoint, message: e.to_string() })
    }
}

#[async_trait]
impl AdminBackend for HttpBackend {
    async fn dashboard_stats(&self) -> Result<ApiResponse<DashboardStats>, ApiError> {
        self.get(STATS_PATH).await
    }

    async fn all_users(&self) -> Result<ApiResponse<ItemList<User>>, ApiError> {
        self.get(USERS_PATH).await
    }

    async fn system_logs(&self) -> Result<ApiResponse<ItemList<SystemLog>>, ApiError> {
        self.get(LOGS_PATH).await
    }
}
