//! Event entity - a scheduled in-game meetup hosted on one game server

use chrono::{DateTime, Utc};

use crate::value_objects::{EventId, ServerId, TagId, UserId};

/// Status given to events created without an explicit one
pub const DEFAULT_EVENT_STATUS: &str = "public";

/// Event entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub date: DateTime<Utc>,
    /// Duration in minutes
    pub duration: Option<i32>,
    pub area: Option<String>,
    pub sub_area: Option<String>,
    pub donjon_name: Option<String>,
    pub description: Option<String>,
    /// Upper bound on the roster size
    pub max_players: i32,
    pub status: String,
    /// Organizer
    pub user_id: UserId,
    pub server_id: ServerId,
    pub tag_id: TagId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Roster capacity as a count
    #[inline]
    pub fn capacity(&self) -> usize {
        usize::try_from(self.max_players).unwrap_or(0)
    }

    /// Number of free slots left for a roster of the given size
    #[inline]
    pub fn remaining_slots(&self, roster_size: usize) -> usize {
        self.capacity().saturating_sub(roster_size)
    }

    /// Check if a roster of the given size fills the event
    #[inline]
    pub fn is_full(&self, roster_size: usize) -> bool {
        roster_size >= self.capacity()
    }

    /// Check if the event is hosted on the given game server
    #[inline]
    pub fn is_hosted_on(&self, server_id: ServerId) -> bool {
        self.server_id == server_id
    }

    /// Check if a user organizes this event
    #[inline]
    pub fn is_organizer(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }
}

/// Event data before it is persisted and assigned an id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    pub title: String,
    pub date: DateTime<Utc>,
    pub duration: Option<i32>,
    pub area: Option<String>,
    pub sub_area: Option<String>,
    pub donjon_name: Option<String>,
    pub description: Option<String>,
    pub max_players: i32,
    pub status: String,
    pub user_id: UserId,
    pub server_id: ServerId,
    pub tag_id: TagId,
}

impl NewEvent {
    /// Create event data with the required fields and default status
    pub fn new(
        title: String,
        date: DateTime<Utc>,
        max_players: i32,
        user_id: UserId,
        server_id: ServerId,
        tag_id: TagId,
    ) -> Self {
        Self {
            title,
            date,
            duration: None,
            area: None,
            sub_area: None,
            donjon_name: None,
            description: None,
            max_players,
            status: DEFAULT_EVENT_STATUS.to_string(),
            user_id,
            server_id,
            tag_id,
        }
    }

    /// Materialize into an [`Event`] with the given id
    pub fn into_event(self, id: EventId) -> Event {
        let now = Utc::now();
        Event {
            id,
            title: self.title,
            date: self.date,
            duration: self.duration,
            area: self.area,
            sub_area: self.sub_area,
            donjon_name: self.donjon_name,
            description: self.description,
            max_players: self.max_players,
            status: self.status,
            user_id: self.user_id,
            server_id: self.server_id,
            tag_id: self.tag_id,
            created_at: now,
            updated_at: now,
        }
    }
}
