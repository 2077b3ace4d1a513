//! Comment entity - a message posted on an event page

use chrono::{DateTime, Utc};

use crate::value_objects::{CommentId, EventId, UserId};

/// Comment entity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub event_id: EventId,
    pub user_id: UserId,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
