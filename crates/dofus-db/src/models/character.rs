//! Character database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for characters table
#[derive(Debug, Clone, FromRow)]
pub struct CharacterModel {
    pub id: i64,
    pub name: String,
    pub sex: String,
    pub level: i32,
    pub alignment: Option<String>,
    pub stuff: Option<String>,
    pub default_character: bool,
    pub user_id: i64,
    pub server_id: i64,
    pub breed_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Team membership row: the character plus its server, breed, and owner
#[derive(Debug, Clone, FromRow)]
pub struct TeamMemberModel {
    pub event_id: i64,
    pub joined_at: DateTime<Utc>,
    #[sqlx(flatten)]
    pub character: CharacterModel,
    pub server_name: String,
    pub server_mono_account: bool,
    pub breed_name: String,
    pub breed_description: Option<String>,
    pub owner_username: String,
    pub owner_avatar: Option<String>,
}
