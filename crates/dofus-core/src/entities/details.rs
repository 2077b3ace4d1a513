//! Enriched event aggregate
//!
//! An event loaded together with its tag, server, organizer, roster, and
//! comments. Roster members carry their own server, breed, and owner so a
//! detail page can be rendered without further lookups.

use super::{Breed, Character, Comment, Event, Server, Tag, UserProfile};
use crate::value_objects::CharacterId;

/// A roster member with its related records
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamMember {
    pub character: Character,
    pub server: Server,
    pub breed: Breed,
    pub owner: UserProfile,
}

/// A comment with its author
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventComment {
    pub comment: Comment,
    pub author: UserProfile,
}

/// Event with all of its relations loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDetails {
    pub event: Event,
    pub tag: Tag,
    pub server: Server,
    pub organizer: UserProfile,
    pub team: Vec<TeamMember>,
    pub comments: Vec<EventComment>,
}

impl EventDetails {
    /// Current roster size
    #[inline]
    pub fn team_size(&self) -> usize {
        self.team.len()
    }

    /// Check if a character is on the roster
    pub fn has_member(&self, character_id: CharacterId) -> bool {
        self.team.iter().any(|m| m.character.id == character_id)
    }

    /// Roster characters in roster order
    pub fn roster(&self) -> impl Iterator<Item = &Character> {
        self.team.iter().map(|m| &m.character)
    }
}
