//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{
    routing::{delete, get},
    Router,
};

use crate::handlers::{events, health, roster};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new().merge(event_routes()).merge(roster_routes())
}

/// Event routes
fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(events::list_events).post(events::create_event))
        .route("/events/summaries", get(events::list_event_summaries))
        .route("/events/details", get(events::list_event_details))
        .route(
            "/events/:event_id",
            get(events::get_event).delete(events::delete_event),
        )
        .route("/events/:event_id/details", get(events::get_event_details))
}

/// Event team routes
fn roster_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/events/:event_id/characters",
            get(roster::list_team).post(roster::add_characters),
        )
        .route(
            "/events/:event_id/characters/:character_id",
            delete(roster::remove_character),
        )
}
