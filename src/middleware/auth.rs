use actix_web::{
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    web, Error, HttpMessage,
};
use chrono::{Duration, Utc};
use futures::future::{ready, LocalBoxFuture, Ready};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::config::AppConfig;
use crate::error::ApiError;

pub const ADMIN_ROLE: &str = "admin";
const SESSION_HOURS: i64 = 24;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    pub sub: String, // admin email
    pub exp: usize,
    pub iat: usize,
    pub sid: String, // session id
    pub role: String,
}

pub fn generate_token(secret: &str, email: &str) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now();

    let claims = Claims {
        sub: email.to_string(),
        iat: now.timestamp() as usize,
        exp: (now + Duration::hours(SESSION_HOURS)).timestamp() as usize,
        sid: Uuid::new_v4().to_string(),
        role: ADMIN_ROLE.to_string(),
    };

    let header = Header::new(Algorithm::HS256);
    encode(&header, &claims, &EncodingKey::from_secret(secret.as_bytes()))
}

pub fn decode_token(secret: &str, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;
    validation.set_required_spec_claims(&["exp", "iat", "sub"]);

    decode::<Claims>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation)
        .map(|data| data.claims)
}

fn unauthorized(message: &str) -> Error {
    ApiError::Unauthorized(message.to_string()).into()
}

/// Rejects requests without a valid admin bearer token and stores the claims
/// in the request extensions for `AdminSession`.
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService { service }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let token = req
            .headers()
            .get("Authorization")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.strip_prefix("Bearer "))
            .map(str::to_string);

        let Some(token) = token else {
            return Box::pin(ready(Err(unauthorized("No authorization header"))));
        };

        let secret = match req.app_data::<web::Data<AppConfig>>() {
            Some(config) => config.jwt_secret.clone(),
            None => {
                log::error!("AppConfig missing from app data, cannot validate session");
                return Box::pin(ready(Err(unauthorized("Session unavailable"))));
            }
        };

        match decode_token(&secret, &token) {
            Ok(claims) if claims.role == ADMIN_ROLE => {
                req.extensions_mut().insert(claims);
                Box::pin(self.service.call(req))
            }
            Ok(claims) => {
                log::warn!("Token for {} lacks the admin role", claims.sub);
                Box::pin(ready(Err(unauthorized("Insufficient permissions"))))
            }
            Err(err) => {
                log::debug!("Error decoding token: {:?}", err);
                Box::pin(ready(Err(unauthorized("Invalid token"))))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_round_trip_carries_session() {
        let token = generate_token("secret", "admin@example.com").unwrap();
        let claims = decode_token("secret", &token).unwrap();
        assert_eq!(claims.sub, "admin@example.com");
        assert_eq!(claims.role, ADMIN_ROLE);
        assert!(Uuid::parse_str(&claims.sid).is_ok());
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = generate_token("secret", "admin@example.com").unwrap();
        assert!(decode_token("other", &token).is_err());
        assert!(decode_token("secret", "not-a-token").is_err());
    }
}
