//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Identifiers are serialized as strings.

use chrono::{DateTime, Utc};
use serde::Serialize;

use dofus_core::entities::Sex;

// ============================================================================
// Reference Data Responses
// ============================================================================

/// Game server
#[derive(Debug, Clone, Serialize)]
pub struct ServerResponse {
    pub id: String,
    pub name: String,
    pub mono_account: bool,
}

/// Event tag
#[derive(Debug, Clone, Serialize)]
pub struct TagResponse {
    pub id: String,
    pub name: String,
    pub color: String,
}

/// Character breed
#[derive(Debug, Clone, Serialize)]
pub struct BreedResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Public user profile (no email or credentials)
#[derive(Debug, Clone, Serialize)]
pub struct UserProfileResponse {
    pub id: String,
    pub username: String,
    pub avatar: Option<String>,
}

// ============================================================================
// Character Responses
// ============================================================================

/// Character response
#[derive(Debug, Clone, Serialize)]
pub struct CharacterResponse {
    pub id: String,
    pub name: String,
    pub sex: Sex,
    pub level: i32,
    pub alignment: Option<String>,
    pub stuff: Option<String>,
    pub default_character: bool,
    pub user_id: String,
    pub server_id: String,
    pub breed_id: String,
}

/// Team member with its server, breed, and owner
#[derive(Debug, Clone, Serialize)]
pub struct TeamMemberResponse {
    #[serde(flatten)]
    pub character: CharacterResponse,
    pub server: ServerResponse,
    pub breed: BreedResponse,
    pub owner: UserProfileResponse,
}

// ============================================================================
// Event Responses
// ============================================================================

/// Event response (no relations)
#[derive(Debug, Clone, Serialize)]
pub struct EventResponse {
    pub id: String,
    pub title: String,
    pub date: DateTime<Utc>,
    pub duration: Option<i32>,
    pub area: Option<String>,
    pub sub_area: Option<String>,
    pub donjon_name: Option<String>,
    pub description: Option<String>,
    pub max_players: i32,
    pub status: String,
    pub user_id: String,
    pub server_id: String,
    pub tag_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Event list entry with its current team size
#[derive(Debug, Clone, Serialize)]
pub struct EventSummaryResponse {
    #[serde(flatten)]
    pub event: EventResponse,
    pub team_size: usize,
}

/// Comment with its author
#[derive(Debug, Clone, Serialize)]
pub struct CommentResponse {
    pub id: String,
    pub message: String,
    pub author: UserProfileResponse,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Event with tag, server, organizer, team, and comments
#[derive(Debug, Clone, Serialize)]
pub struct EventDetailsResponse {
    #[serde(flatten)]
    pub event: EventResponse,
    pub tag: TagResponse,
    pub server: ServerResponse,
    pub organizer: UserProfileResponse,
    pub team_size: usize,
    pub team: Vec<TeamMemberResponse>,
    pub comments: Vec<CommentResponse>,
}

// ============================================================================
// Health Check Responses
// ============================================================================

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each dependency
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }

    /// Check if every dependency is healthy
    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
