//! Database models - SQLx-compatible structs for PostgreSQL tables

mod character;
mod comment;
mod event;

pub use character::{CharacterModel, TeamMemberModel};
pub use comment::{CommentModel, CommentWithAuthorModel};
pub use event::{EventModel, EventWithRelationsModel};
