//! Entity to model mappers
//!
//! This module provides conversions between domain entities (dofus-core) and database models.
//! - `From<Model> for Entity`: Convert database rows to domain objects
//! - `*Insert` structs: Prepare entity data for database operations

mod character;
mod comment;
mod event;

pub use event::{event_details, EventInsert};
