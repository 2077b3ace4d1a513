//! Integration test utilities for the event roster server
//!
//! This crate provides helpers for running end-to-end tests against
//! the REST API backed by an in-memory store.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
