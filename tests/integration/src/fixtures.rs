//! Test fixtures and data generators
//!
//! Seeds the in-memory store and mirrors the JSON bodies the API exchanges.

use std::sync::Arc;

use chrono::{Duration, Utc};
use dofus_core::{BreedId, CharacterId, ServerId, TagId, UserId};
use dofus_db::InMemoryStore;
use serde::{Deserialize, Serialize};

/// Reference data every test server starts with
pub struct World {
    pub store: Arc<InMemoryStore>,
    pub organizer: UserId,
    pub server: ServerId,
    pub other_server: ServerId,
    pub tag: TagId,
    pub breed: BreedId,
}

impl World {
    pub fn seed(store: Arc<InMemoryStore>) -> Self {
        let organizer = store.insert_user("organizer").id;
        let server = store.insert_server("Draconiros", true).id;
        let other_server = store.insert_server("Hell Mina", false).id;
        let tag = store.insert_tag("Dungeon", "#8b0000").id;
        let breed = store.insert_breed("Sacrieur").id;
        Self {
            store,
            organizer,
            server,
            other_server,
            tag,
            breed,
        }
    }

    /// A character on the main server
    pub fn character(&self, name: &str) -> CharacterId {
        self.store
            .insert_character(name, self.organizer, self.server, self.breed)
            .id
    }

    /// A character on the other server
    pub fn foreign_character(&self, name: &str) -> CharacterId {
        self.store
            .insert_character(name, self.organizer, self.other_server, self.breed)
            .id
    }

    /// Event creation body on the main server
    pub fn create_event(&self, max_players: i32, team: &[CharacterId]) -> CreateEventBody {
        CreateEventBody {
            title: "Kolosso run".to_string(),
            date: (Utc::now() + Duration::days(2)).to_rfc3339(),
            duration: Some(90),
            area: Some("Frigost".to_string()),
            donjon_name: Some("Kolosso's cavern".to_string()),
            description: None,
            max_players,
            server_id: self.server.to_string(),
            tag_id: self.tag.to_string(),
            character_ids: ids(team),
        }
    }
}

/// Ids as the strings the API emits
pub fn ids(ids: &[CharacterId]) -> Vec<String> {
    ids.iter().map(ToString::to_string).collect()
}

/// Create event request
#[derive(Debug, Serialize)]
pub struct CreateEventBody {
    pub title: String,
    pub date: String,
    pub duration: Option<i32>,
    pub area: Option<String>,
    pub donjon_name: Option<String>,
    pub description: Option<String>,
    pub max_players: i32,
    pub server_id: String,
    pub tag_id: String,
    pub character_ids: Vec<String>,
}

/// Add characters request
#[derive(Debug, Serialize)]
pub struct AddCharactersBody {
    pub character_ids: Vec<String>,
}

impl AddCharactersBody {
    pub fn new(character_ids: &[CharacterId]) -> Self {
        Self {
            character_ids: ids(character_ids),
        }
    }
}

/// Event response (no relations)
#[derive(Debug, Deserialize)]
pub struct EventBody {
    pub id: String,
    pub title: String,
    pub max_players: i32,
    pub status: String,
    pub server_id: String,
    pub user_id: String,
}

/// Team member as embedded in event details
#[derive(Debug, Deserialize)]
pub struct MemberBody {
    pub id: String,
    pub name: String,
    pub server: NamedBody,
    pub owner: OwnerBody,
}

#[derive(Debug, Deserialize)]
pub struct NamedBody {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct OwnerBody {
    pub id: String,
    pub username: String,
}

/// Event with its relations
#[derive(Debug, Deserialize)]
pub struct EventDetailsBody {
    pub id: String,
    pub title: String,
    pub max_players: i32,
    pub team_size: usize,
    pub team: Vec<MemberBody>,
    pub server: NamedBody,
    pub tag: NamedBody,
    pub organizer: OwnerBody,
    pub comments: Vec<serde_json::Value>,
}

impl EventDetailsBody {
    pub fn member_ids(&self) -> Vec<String> {
        self.team.iter().map(|m| m.id.clone()).collect()
    }
}

/// Event list entry
#[derive(Debug, Deserialize)]
pub struct EventSummaryBody {
    pub id: String,
    pub team_size: usize,
}

/// Character response
#[derive(Debug, Deserialize)]
pub struct CharacterBody {
    pub id: String,
    pub name: String,
}

/// Error envelope
#[derive(Debug, Deserialize)]
pub struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    pub details: Option<serde_json::Value>,
}
