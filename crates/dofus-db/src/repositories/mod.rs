//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in dofus-core.
//! Each repository handles database operations for a specific domain entity.

mod character;
mod error;
mod event;
mod roster;

pub(crate) use error::unknown_reference;

pub use character::PgCharacterRepository;
pub use event::PgEventRepository;
pub use roster::PgRosterRepository;
