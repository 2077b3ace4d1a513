//! Public user profile
//!
//! Only the fields that may be shown next to events and characters.
//! Credentials and contact details never leave the account flows.

use crate::value_objects::UserId;

/// Public view of a user account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: UserId,
    pub username: String,
    pub avatar: Option<String>,
}

impl UserProfile {
    pub fn new(id: UserId, username: String) -> Self {
        Self {
            id,
            username,
            avatar: None,
        }
    }
}
