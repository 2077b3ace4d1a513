//! Path parameter extractors
//!
//! Typed id extraction from path parameters. Ids arrive as decimal strings.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use dofus_core::{CharacterId, EventId};
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::response::ApiError;

/// Path parameters that map path rejections onto [`ApiError`]
#[derive(Debug, Clone)]
pub struct IdPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for IdPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(inner) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_path(e.body_text()))?;

        Ok(IdPath(inner))
    }
}

/// Path parameters with event_id
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct EventPath {
    pub event_id: EventId,
}

/// Path parameters with event_id and character_id
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct EventCharacterPath {
    pub event_id: EventId,
    pub character_id: CharacterId,
}
