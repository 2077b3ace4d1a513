//! Business logic services
//!
//! This module contains the service layer: roster changes guarded by the
//! roster rules, and event loading, creation, and deletion.

pub mod context;
pub mod error;
pub mod event;
pub mod roster;

#[cfg(test)]
pub(crate) mod testing;

// Re-export all services for convenience
pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use event::EventService;
pub use roster::RosterService;
