//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Identifiers are accepted as JSON strings or numbers.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use dofus_core::value_objects::{CharacterId, ServerId, TagId};

// ============================================================================
// Event Requests
// ============================================================================

/// Create event request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEventRequest {
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: String,

    pub date: DateTime<Utc>,

    /// Expected length in minutes
    #[validate(range(min = 1, max = 1440, message = "Duration must be 1-1440 minutes"))]
    pub duration: Option<i32>,

    #[validate(length(max = 100, message = "Area must be at most 100 characters"))]
    pub area: Option<String>,

    #[validate(length(max = 100, message = "Sub-area must be at most 100 characters"))]
    pub sub_area: Option<String>,

    #[validate(length(max = 100, message = "Dungeon name must be at most 100 characters"))]
    pub donjon_name: Option<String>,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,

    /// Upper bound comes from the roster configuration
    #[validate(range(min = 1, message = "Max players must be at least 1"))]
    pub max_players: i32,

    #[validate(length(min = 1, max = 32, message = "Status must be 1-32 characters"))]
    pub status: Option<String>,

    pub server_id: ServerId,

    pub tag_id: TagId,

    /// Initial team; must not be empty
    #[validate(length(min = 1, max = 100, message = "An event starts with 1-100 character ids"))]
    pub character_ids: Vec<CharacterId>,
}

// ============================================================================
// Roster Requests
// ============================================================================

/// Add characters to an event team
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddCharactersRequest {
    /// Upper bound only; the configured batch size applies in the service
    #[validate(length(max = 100, message = "At most 100 character ids per request"))]
    pub character_ids: Vec<CharacterId>,
}
