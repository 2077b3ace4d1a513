//! Axum extractors for request handling
//!
//! Custom extractors for the acting user, typed path ids, and validation.

mod path;
mod user;
mod validated;

pub use path::{EventCharacterPath, EventPath, IdPath};
pub use user::ActingUser;
pub use validated::ValidatedJson;
