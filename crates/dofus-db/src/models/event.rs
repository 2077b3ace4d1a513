//! Event database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for events table
#[derive(Debug, Clone, FromRow)]
pub struct EventModel {
    pub id: i64,
    pub title: String,
    pub date: DateTime<Utc>,
    pub duration: Option<i32>,
    pub area: Option<String>,
    pub sub_area: Option<String>,
    pub donjon_name: Option<String>,
    pub description: Option<String>,
    pub max_players: i32,
    pub status: String,
    pub user_id: i64,
    pub server_id: i64,
    pub tag_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Event row joined with its tag, server, and organizer
#[derive(Debug, Clone, FromRow)]
pub struct EventWithRelationsModel {
    #[sqlx(flatten)]
    pub event: EventModel,
    pub tag_name: String,
    pub tag_color: String,
    pub server_name: String,
    pub server_mono_account: bool,
    pub organizer_username: String,
    pub organizer_avatar: Option<String>,
}
