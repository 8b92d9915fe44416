use actix_web::{web, HttpResponse};

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::middleware::{auth::generate_token, auth_context::AdminSession};
use crate::models::{
    account::{AdminCredentials, TokenResponse},
    notification::{Navigation, Notification},
};

/// The single demo operator account.
pub const ADMIN_EMAIL: &str = "admin@example.com";
pub const ADMIN_PASSWORD: &str = "admin123";
pub const ADMIN_DASHBOARD_PATH: &str = "/admin/dashboard";

pub fn is_admin(credentials: &AdminCredentials) -> bool {
    credentials.email == ADMIN_EMAIL && credentials.password == ADMIN_PASSWORD
}

/*
    /api/admin/login
*/
pub async fn login(
    config: web::Data<AppConfig>,
    input: web::Json<AdminCredentials>,
) -> Result<HttpResponse, ApiError> {
    let credentials = input.into_inner();
    if credentials.email.is_empty() || credentials.password.is_empty() {
        return Err(ApiError::Validation("Please fill in all fields".to_string()));
    }

    if !config.search_delay.is_zero() {
        tokio::time::sleep(config.search_delay).await;
    }

    if !is_admin(&credentials) {
        log::warn!("Rejected admin login for {}", credentials.email);
        return Err(ApiError::Unauthorized("Invalid admin credentials".to_string()));
    }

    let auth_token = generate_token(&config.jwt_secret, &credentials.email).map_err(|err| {
        log::error!("Token generation failed: {:?}", err);
        ApiError::Internal("Token generation failed".to_string())
    })?;
    log::info!("Admin {} signed in", credentials.email);

    let navigation = Navigation::to(ADMIN_DASHBOARD_PATH, TokenResponse { auth_token })
        .with_notification(Notification::info(
            "Success",
            "Welcome to the admin dashboard!",
        ));
    Ok(HttpResponse::Ok().json(navigation))
}

/*
    /api/admin/session
*/
pub async fn session(session: AdminSession) -> HttpResponse {
    HttpResponse::Ok().json(session)
}
