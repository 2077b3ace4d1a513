//! Value objects - immutable types that represent domain concepts

mod ids;

pub use ids::{
    BreedId, CharacterId, CommentId, EventId, IdParseError, ServerId, TagId, UserId,
};
