// src/presentation/http/extractors.rs
use crate::{
    application::{dto::AuthenticatedUser, error::ApplicationError},
    domain::user::UserId,
};
use axum::{extract::FromRequestParts, http::request::Parts};

use super::error::HttpError;

/// Identity forwarded by the authenticating proxy in front of the service.
pub const USER_ID_HEADER: &str = "x-user-id";

#[derive(Debug, Clone, Copy)]
pub struct Authenticated(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let unauthorized =
            || HttpError::from_error(ApplicationError::unauthorized("missing or invalid x-user-id header"));

        let raw = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(unauthorized)?;

        let id = raw
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(|id| UserId::new(id).ok())
            .ok_or_else(unauthorized)?;

        Ok(Self(AuthenticatedUser::new(id)))
    }
}
