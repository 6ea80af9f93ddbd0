use actix_session::Session;
use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::auth::csrf;
use crate::config::AppConfig;
use crate::errors::AppError;

#[derive(Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}

/// POST /logout — drop the local session and hand over to the login screen.
/// The authentication service itself is not contacted.
pub async fn logout(
    config: web::Data<AppConfig>,
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    session.purge();
    Ok(HttpResponse::SeeOther()
        .insert_header(("Location", config.login_url.clone()))
        .finish())
}
