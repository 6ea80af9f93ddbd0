// Template context structures for Askama templates.

mod admin;

pub use self::admin::{AdminTab, AdminTemplate, RoleOption, TabLink};

/// Context shared by every page layout.
pub struct PageContext {
    pub app_name: String,
    pub home_url: String,
    pub csrf_token: String,
}
