use askama::Template;

use super::PageContext;
use crate::models::admin_view::{AdminView, SummaryCard};
use crate::models::user::{RoleFilter, User};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Users,
    Logs,
    Settings,
    Reports,
}

impl AdminTab {
    pub const ALL: [AdminTab; 4] = [AdminTab::Users, AdminTab::Logs, AdminTab::Settings, AdminTab::Reports];

    pub fn parse(value: &str) -> Self {
        match value {
            "logs" => AdminTab::Logs,
            "settings" => AdminTab::Settings,
            "reports" => AdminTab::Reports,
            _ => AdminTab::Users,
        }
    }

    pub fn slug(&self) -> &'static str {
        match self {
            AdminTab::Users => "users",
            AdminTab::Logs => "logs",
            AdminTab::Settings => "settings",
            AdminTab::Reports => "reports",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AdminTab::Users => "User Management",
            AdminTab::Logs => "System Logs",
            AdminTab::Settings => "System Settings",
            AdminTab::Reports => "Reports",
        }
    }
}

pub struct TabLink {
    pub slug: &'static str,
    pub label: &'static str,
    pub active: bool,
}

pub struct RoleOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Template)]
#[template(path = "admin.html")]
pub struct AdminTemplate {
    pub ctx: PageContext,
    pub tab: AdminTab,
    pub tabs: Vec<TabLink>,
    pub role_options: Vec<RoleOption>,
    pub cards: Vec<SummaryCard>,
    pub user_rows: Vec<User>,
    pub view: AdminView,
}

impl AdminTemplate {
    pub fn new(ctx: PageContext, tab: AdminTab, view: AdminView) -> Self {
        let tabs = AdminTab::ALL
            .iter()
            .map(|t| TabLink { slug: t.slug(), label: t.label(), active: *t == tab })
            .collect();
        let role_options = RoleFilter::ALL
            .iter()
            .map(|r| RoleOption { value: r.value(), label: r.label(), selected: *r == view.role_filter })
            .collect();
        let cards = view.summary_cards();
        let user_rows = view.visible_users().to_vec();
        Self { ctx, tab, tabs, role_options, cards, user_rows, view }
    }
}
