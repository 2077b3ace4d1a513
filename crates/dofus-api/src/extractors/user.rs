//! Acting user extractor
//!
//! Authentication lives in front of this service; the caller's user id is
//! forwarded in the `x-user-id` header.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use dofus_core::UserId;

use crate::response::{ApiError, USER_ID_HEADER};

/// User on whose behalf the request is made
#[derive(Debug, Clone, Copy)]
pub struct ActingUser {
    pub user_id: UserId,
}

#[async_trait]
impl<S> FromRequestParts<S> for ActingUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let raw = parts
            .headers
            .get(USER_ID_HEADER)
            .ok_or(ApiError::MissingUser)?;

        let user_id = raw
            .to_str()
            .ok()
            .and_then(|s| s.trim().parse::<UserId>().ok())
            .ok_or_else(|| {
                tracing::warn!("Unparseable {} header", USER_ID_HEADER);
                ApiError::InvalidUser
            })?;

        Ok(ActingUser { user_id })
    }
}
