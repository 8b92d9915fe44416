use std::future::{ready, Ready};

use actix_web::{dev::Payload, Error, FromRequest, HttpMessage, HttpRequest};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::ApiError;
use crate::middleware::auth::Claims;

/// The signed-in operator, handed explicitly to every admin handler.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSession {
    pub email: String,
    pub session_id: String,
    pub issued_at: Option<DateTime<Utc>>,
    pub expires_at: Option<DateTime<Utc>>,
}

impl From<&Claims> for AdminSession {
    fn from(claims: &Claims) -> Self {
        Self {
            email: claims.sub.clone(),
            session_id: claims.sid.clone(),
            issued_at: DateTime::from_timestamp(claims.iat as i64, 0),
            expires_at: DateTime::from_timestamp(claims.exp as i64, 0),
        }
    }
}

impl FromRequest for AdminSession {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        if let Some(claims) = req.extensions().get::<Claims>() {
            ready(Ok(AdminSession::from(claims)))
        } else {
            ready(Err(ApiError::Unauthorized("Admin not authenticated".to_string()).into()))
        }
    }
}
