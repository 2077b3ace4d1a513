//! Shared fixtures for service tests

use std::sync::Arc;

use chrono::{Duration, Utc};
use dofus_common::RosterConfig;
use dofus_core::entities::{Character, NewEvent, Server, Tag, UserProfile};
use dofus_core::traits::{EventRepository, RosterRepository};
use dofus_core::value_objects::{BreedId, CharacterId, EventId};
use dofus_db::InMemoryStore;

use crate::dto::CreateEventRequest;

use super::context::ServiceContext;

/// One in-memory store seeded with an organizer, two servers, a tag, and a breed
pub struct Fixture {
    pub store: Arc<InMemoryStore>,
    pub ctx: ServiceContext,
    pub owner: UserProfile,
    pub server: Server,
    pub other_server: Server,
    pub tag: Tag,
    pub breed: BreedId,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_config(RosterConfig::default())
    }

    pub fn with_config(config: RosterConfig) -> Self {
        let store = Arc::new(InMemoryStore::new());
        let owner = store.insert_user("organizer");
        let server = store.insert_server("Imagiro", false);
        let other_server = store.insert_server("Orukam", false);
        let tag = store.insert_tag("Quest", "#0000ff");
        let breed = store.insert_breed("Cra").id;
        let ctx = ServiceContext::in_memory(store.clone(), config);
        Self {
            store,
            ctx,
            owner,
            server,
            other_server,
            tag,
            breed,
        }
    }

    pub fn character(&self, name: &str) -> Character {
        self.store
            .insert_character(name, self.owner.id, self.server.id, self.breed)
    }

    /// A character on the other server
    pub fn foreign_character(&self, name: &str) -> Character {
        self.store
            .insert_character(name, self.owner.id, self.other_server.id, self.breed)
    }

    /// Store an event directly, bypassing the service checks
    pub async fn event(&self, max_players: i32, team: &[CharacterId]) -> EventId {
        let event = NewEvent::new(
            "Kolosso".to_string(),
            Utc::now(),
            max_players,
            self.owner.id,
            self.server.id,
            self.tag.id,
        );
        self.store.create(&event, team).await.unwrap().id
    }

    /// Current team of an event, in join order
    pub async fn team(&self, event_id: EventId) -> Vec<CharacterId> {
        self.store
            .find_members(event_id)
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.id)
            .collect()
    }

    pub fn request(
        &self,
        max_players: i32,
        character_ids: Vec<CharacterId>,
    ) -> CreateEventRequest {
        CreateEventRequest {
            title: "Frigost dungeons".to_string(),
            date: Utc::now() + Duration::days(1),
            duration: Some(120),
            area: Some("Frigost".to_string()),
            sub_area: None,
            donjon_name: Some("Sakai".to_string()),
            description: None,
            max_players,
            status: None,
            server_id: self.server.id,
            tag_id: self.tag.id,
            character_ids,
        }
    }
}
