//! # dofus-core
//!
//! Domain layer containing entities, typed identifiers, repository traits,
//! and the roster rules. This crate has zero dependencies on infrastructure
//! (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod roster;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{
    Breed, Character, Comment, Event, EventComment, EventDetails, NewEvent, Server, Sex, Tag,
    TeamMember, UserProfile, DEFAULT_EVENT_STATUS,
};
pub use error::DomainError;
pub use traits::{CharacterRepository, EventRepository, RepoResult, RosterRepository};
pub use value_objects::{
    BreedId, CharacterId, CommentId, EventId, IdParseError, ServerId, TagId, UserId,
};
