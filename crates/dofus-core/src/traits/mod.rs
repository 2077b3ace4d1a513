//! Ports implemented by the infrastructure layer

mod repositories;

pub use repositories::{CharacterRepository, EventRepository, RepoResult, RosterRepository};
