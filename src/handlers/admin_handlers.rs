use std::sync::Arc;

use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::api::AdminBackend;
use crate::auth::csrf;
use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::models::admin_view::{self, AdminView, LoadOutcome};
use crate::models::user::RoleFilter;
use crate::templates_structs::{AdminTab, AdminTemplate, PageContext};

#[derive(Debug, Default, Deserialize)]
pub struct AdminQuery {
    pub tab: Option<String>,
    pub q: Option<String>,
    pub role: Option<String>,
}

/// GET /admin — mount the dashboard view, load it, render it.
pub async fn index(
    backend: web::Data<dyn AdminBackend>,
    config: web::Data<AppConfig>,
    session: Session,
    query: web::Query<AdminQuery>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();
    let tab = query.tab.as_deref().map(AdminTab::parse).unwrap_or_default();

    let view = Arc::new(Mutex::new(AdminView::mount()));
    {
        let mut v = view.lock().await;
        if let Some(q) = query.q {
            v.set_search_query(q);
        }
        if let Some(role) = query.role.as_deref() {
            v.set_role_filter(RoleFilter::parse(role));
        }
    }

    if admin_view::load(backend.get_ref(), Arc::downgrade(&view)).await == LoadOutcome::Discarded {
        log::debug!("Dashboard load discarded; rendering the mounted view as is");
    }
    let snapshot = view.lock().await.clone();

    let ctx = PageContext {
        app_name: config.app_name.clone(),
        home_url: config.home_url.clone(),
        csrf_token: csrf::get_or_create_token(&session)?,
    };
    render(AdminTemplate::new(ctx, tab, snapshot))
}
