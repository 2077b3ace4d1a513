//! In-memory storage
//!
//! Used by the service and HTTP tests, and as a database-free backend for
//! local runs.

mod store;

pub use store::InMemoryStore;
