//! Character entity - a player's in-game persona on one game server

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{BreedId, CharacterId, ServerId, UserId};

/// Character sex, stored as a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Sex {
    #[default]
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Sex {
    /// Database representation
    #[inline]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }
}

impl From<&str> for Sex {
    fn from(value: &str) -> Self {
        match value {
            "F" | "f" => Self::Female,
            _ => Self::Male,
        }
    }
}

/// Character entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub sex: Sex,
    pub level: i32,
    pub alignment: Option<String>,
    /// Link to an external equipment ("stuff") page
    pub stuff: Option<String>,
    pub default_character: bool,
    pub user_id: UserId,
    pub server_id: ServerId,
    pub breed_id: BreedId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Character {
    /// Create a level 1 character
    pub fn new(
        id: CharacterId,
        name: String,
        user_id: UserId,
        server_id: ServerId,
        breed_id: BreedId,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            sex: Sex::default(),
            level: 1,
            alignment: None,
            stuff: None,
            default_character: false,
            user_id,
            server_id,
            breed_id,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if the character plays on the given game server
    #[inline]
    pub fn is_on_server(&self, server_id: ServerId) -> bool {
        self.server_id == server_id
    }

    /// Check if a user owns this character
    #[inline]
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }
}
