//! Comment entity <-> model mapper

use dofus_core::entities::{Comment, EventComment, UserProfile};
use dofus_core::value_objects::{CommentId, EventId, UserId};

use crate::models::{CommentModel, CommentWithAuthorModel};

/// Convert CommentModel to Comment entity
impl From<CommentModel> for Comment {
    fn from(model: CommentModel) -> Self {
        Comment {
            id: CommentId::new(model.id),
            event_id: EventId::new(model.event_id),
            user_id: UserId::new(model.user_id),
            message: model.message,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

/// Convert a joined comment row to an EventComment
impl From<CommentWithAuthorModel> for EventComment {
    fn from(model: CommentWithAuthorModel) -> Self {
        let author = UserProfile {
            id: UserId::new(model.comment.user_id),
            username: model.author_username,
            avatar: model.author_avatar,
        };

        EventComment {
            comment: Comment::from(model.comment),
            author,
        }
    }
}
