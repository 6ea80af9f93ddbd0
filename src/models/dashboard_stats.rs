use serde::{Deserialize, Serialize};

/// Units on hand for one blood type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BloodInventoryEntry {
    pub blood_type: String,
    pub units: i64,
}

/// Aggregate snapshot computed by the backend.
/// Kept in view-state only; the summary cards do not read it.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_users: i64,
    pub total_donors: i64,
    pub total_staff: i64,
    pub total_blood_requests: i64,
    pub pending_blood_requests: i64,
    pub total_donations: i64,
    pub recent_donations: i64,
    #[serde(default)]
    pub blood_inventory: Vec<BloodInventoryEntry>,
}
