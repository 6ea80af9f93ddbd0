use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::envelope::{opt_string_or_number, string_or_number};

/// Event record owned by the logging service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemLog {
    #[serde(deserialize_with = "string_or_number")]
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub message: String,
    #[serde(default, deserialize_with = "opt_string_or_number")]
    pub user_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl SystemLog {
    pub fn user_id_label(&self) -> &str {
        self.user_id.as_deref().unwrap_or("")
    }

    /// `created_at` in the server's local time zone.
    pub fn local_timestamp(&self) -> String {
        format_timestamp(&self.created_at, &Local)
    }
}

/// en-US style date/time, e.g. `3/14/2025, 2:05:09 PM`.
pub fn format_timestamp<Tz: TimeZone>(ts: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    ts.with_timezone(tz).format("%-m/%-d/%Y, %-I:%M:%S %p").to_string()
}
