//! Reference data - game servers, event tags, and character breeds

use crate::value_objects::{BreedId, ServerId, TagId};

/// Game server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Server {
    pub id: ServerId,
    pub name: String,
    /// Servers that forbid multi-accounting
    pub mono_account: bool,
}

/// Event tag (dungeon, quest, koliseum, ...)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: TagId,
    pub name: String,
    pub color: String,
}

/// Character breed (class)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breed {
    pub id: BreedId,
    pub name: String,
    pub description: Option<String>,
}
