pub mod api;
pub mod auth;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod templates_structs;

use actix_web::web;

/// Register the dashboard routes. Shared by `main` and the integration tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/admin", web::get().to(handlers::admin_handlers::index))
        .route("/logout", web::post().to(handlers::auth_handlers::logout));
}
