pub mod admin_view;
pub mod dashboard_stats;
pub mod envelope;
pub mod system_log;
pub mod user;
