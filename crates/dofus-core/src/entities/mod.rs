//! Domain entities - core business objects

mod catalog;
mod character;
mod comment;
mod details;
mod event;
mod user;

pub use catalog::{Breed, Server, Tag};
pub use character::{Character, Sex};
pub use comment::Comment;
pub use details::{EventComment, EventDetails, TeamMember};
pub use event::{Event, NewEvent, DEFAULT_EVENT_STATUS};
pub use user::UserProfile;
