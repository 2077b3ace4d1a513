//! Event entity <-> model mapper

use chrono::{DateTime, Utc};
use dofus_core::entities::{
    Event, EventComment, EventDetails, NewEvent, Server, Tag, TeamMember, UserProfile,
};
use dofus_core::value_objects::{EventId, ServerId, TagId, UserId};

use crate::models::{EventModel, EventWithRelationsModel};

/// Convert EventModel to Event entity
impl From<EventModel> for Event {
    fn from(model: EventModel) -> Self {
        Event {
            id: EventId::new(model.id),
            title: model.title,
            date: model.date,
            duration: model.duration,
            area: model.area,
            sub_area: model.sub_area,
            donjon_name: model.donjon_name,
            description: model.description,
            max_players: model.max_players,
            status: model.status,
            user_id: UserId::new(model.user_id),
            server_id: ServerId::new(model.server_id),
            tag_id: TagId::new(model.tag_id),
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Assemble the enriched aggregate from the event row and its loaded children
pub fn event_details(
    model: EventWithRelationsModel,
    team: Vec<TeamMember>,
    comments: Vec<EventComment>,
) -> EventDetails {
    let tag = Tag {
        id: TagId::new(model.event.tag_id),
        name: model.tag_name,
        color: model.tag_color,
    };
    let server = Server {
        id: ServerId::new(model.event.server_id),
        name: model.server_name,
        mono_account: model.server_mono_account,
    };
    let organizer = UserProfile {
        id: UserId::new(model.event.user_id),
        username: model.organizer_username,
        avatar: model.organizer_avatar,
    };

    EventDetails {
        event: Event::from(model.event),
        tag,
        server,
        organizer,
        team,
        comments,
    }
}

/// Event values prepared for database insertion
pub struct EventInsert<'a> {
    pub title: &'a str,
    pub date: DateTime<Utc>,
    pub duration: Option<i32>,
    pub area: Option<&'a str>,
    pub sub_area: Option<&'a str>,
    pub donjon_name: Option<&'a str>,
    pub description: Option<&'a str>,
    pub max_players: i32,
    pub status: &'a str,
    pub user_id: i64,
    pub server_id: i64,
    pub tag_id: i64,
}

impl<'a> EventInsert<'a> {
    pub fn new(event: &'a NewEvent) -> Self {
        Self {
            title: &event.title,
            date: event.date,
            duration: event.duration,
            area: event.area.as_deref(),
            sub_area: event.sub_area.as_deref(),
            donjon_name: event.donjon_name.as_deref(),
            description: event.description.as_deref(),
            max_players: event.max_players,
            status: &event.status,
            user_id: event.user_id.into_inner(),
            server_id: event.server_id.into_inner(),
            tag_id: event.tag_id.into_inner(),
        }
    }
}
