//! Roster handlers
//!
//! Endpoints for reading and changing an event's team.

use axum::{extract::State, Json};
use dofus_service::{AddCharactersRequest, CharacterResponse, EventDetailsResponse, RosterService};

use crate::extractors::{EventCharacterPath, EventPath, IdPath, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// List the team of an event
///
/// GET /events/{event_id}/characters
pub async fn list_team(
    State(state): State<AppState>,
    IdPath(path): IdPath<EventPath>,
) -> ApiResult<Json<Vec<CharacterResponse>>> {
    let service = RosterService::new(state.service_context());
    let team = service.list_team(path.event_id).await?;
    Ok(Json(team.iter().map(CharacterResponse::from).collect()))
}

/// Add characters to the team
///
/// POST /events/{event_id}/characters
pub async fn add_characters(
    State(state): State<AppState>,
    IdPath(path): IdPath<EventPath>,
    ValidatedJson(request): ValidatedJson<AddCharactersRequest>,
) -> ApiResult<Json<EventDetailsResponse>> {
    let service = RosterService::new(state.service_context());
    let details = service
        .add_characters(path.event_id, &request.character_ids)
        .await?;
    Ok(Json(details.into()))
}

/// Remove a character from the team
///
/// DELETE /events/{event_id}/characters/{character_id}
pub async fn remove_character(
    State(state): State<AppState>,
    IdPath(path): IdPath<EventCharacterPath>,
) -> ApiResult<Json<EventDetailsResponse>> {
    let service = RosterService::new(state.service_context());
    let details = service
        .remove_character(path.event_id, path.character_id)
        .await?;
    Ok(Json(details.into()))
}
