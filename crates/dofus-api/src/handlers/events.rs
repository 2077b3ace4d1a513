//! Event handlers
//!
//! Endpoints for listing, reading, creating, and deleting events.

use axum::{extract::State, Json};
use dofus_core::DomainError;
use dofus_service::{
    CreateEventRequest, EventDetailsResponse, EventResponse, EventService, EventSummaryResponse,
};

use crate::extractors::{ActingUser, EventPath, IdPath, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List events without relations
///
/// GET /events
pub async fn list_events(State(state): State<AppState>) -> ApiResult<Json<Vec<EventResponse>>> {
    let service = EventService::new(state.service_context());
    let events = service.get_all_thin().await?;
    Ok(Json(events.into_iter().map(EventResponse::from).collect()))
}

/// List events with their team sizes
///
/// GET /events/summaries
pub async fn list_event_summaries(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<EventSummaryResponse>>> {
    let service = EventService::new(state.service_context());
    let summaries = service.list_summaries().await?;
    Ok(Json(
        summaries.into_iter().map(EventSummaryResponse::from).collect(),
    ))
}

/// List events with every relation loaded
///
/// GET /events/details
pub async fn list_event_details(
    State(state): State<AppState>,
) -> ApiResult<Json<Vec<EventDetailsResponse>>> {
    let service = EventService::new(state.service_context());
    let events = service.get_all_enriched().await?;
    Ok(Json(
        events.into_iter().map(EventDetailsResponse::from).collect(),
    ))
}

/// Create an event with its initial team
///
/// POST /events
pub async fn create_event(
    State(state): State<AppState>,
    user: ActingUser,
    ValidatedJson(request): ValidatedJson<CreateEventRequest>,
) -> ApiResult<Created<Json<EventDetailsResponse>>> {
    let service = EventService::new(state.service_context());
    let details = service.create_event(user.user_id, request).await?;
    Ok(Created(Json(details.into())))
}

/// Get event by ID
///
/// GET /events/{event_id}
pub async fn get_event(
    State(state): State<AppState>,
    IdPath(path): IdPath<EventPath>,
) -> ApiResult<Json<EventResponse>> {
    let service = EventService::new(state.service_context());
    let event = service
        .get_thin(path.event_id)
        .await?
        .ok_or(DomainError::EventNotFound(path.event_id))?;
    Ok(Json(event.into()))
}

/// Get event with tag, server, organizer, team, and comments
///
/// GET /events/{event_id}/details
pub async fn get_event_details(
    State(state): State<AppState>,
    IdPath(path): IdPath<EventPath>,
) -> ApiResult<Json<EventDetailsResponse>> {
    let service = EventService::new(state.service_context());
    let details = service
        .get_enriched(path.event_id)
        .await?
        .ok_or(DomainError::EventNotFound(path.event_id))?;
    Ok(Json(details.into()))
}

/// Delete event
///
/// DELETE /events/{event_id}
pub async fn delete_event(
    State(state): State<AppState>,
    IdPath(path): IdPath<EventPath>,
) -> ApiResult<NoContent> {
    let service = EventService::new(state.service_context());
    service.delete_event(path.event_id).await?;
    Ok(NoContent)
}
