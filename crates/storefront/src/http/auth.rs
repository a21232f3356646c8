//! Bearer-token authentication.
//!
//! Tokens are opaque strings looked up in the configured table; issuance
//! happens elsewhere. Handlers that name a [`Caller`] argument require a
//! valid token; handlers that name [`Admin`] additionally require the
//! admin capability. Public routes simply take neither.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;

use super::api::AppState;
use super::error::ApiError;
use crate::model::Caller;

#[axum::async_trait]
impl FromRequestParts<AppState> for Caller {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(ApiError::unauthorized)?;
        let token = header
            .strip_prefix("Bearer ")
            .ok_or_else(ApiError::unauthorized)?;
        state
            .tokens
            .get(token)
            .cloned()
            .ok_or_else(ApiError::unauthorized)
    }
}

/// An authenticated caller holding the admin capability.
///
/// Used by the `/admin` routes; everyone else gets 403.
pub struct Admin(pub Caller);

#[axum::async_trait]
impl FromRequestParts<AppState> for Admin {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let caller = Caller::from_request_parts(parts, state).await?;
        if !caller.admin {
            return Err(ApiError::forbidden(
                "this route requires the admin capability",
            ));
        }
        Ok(Admin(caller))
    }
}
