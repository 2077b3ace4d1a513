//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use dofus_core::entities::{
    Breed, Character, Event, EventComment, EventDetails, Server, Tag, TeamMember, UserProfile,
};

use super::responses::{
    BreedResponse, CharacterResponse, CommentResponse, EventDetailsResponse, EventResponse,
    EventSummaryResponse, ServerResponse, TagResponse, TeamMemberResponse, UserProfileResponse,
};

// ============================================================================
// Reference Data Mappers
// ============================================================================

impl From<&Server> for ServerResponse {
    fn from(server: &Server) -> Self {
        Self {
            id: server.id.to_string(),
            name: server.name.clone(),
            mono_account: server.mono_account,
        }
    }
}

impl From<&Tag> for TagResponse {
    fn from(tag: &Tag) -> Self {
        Self {
            id: tag.id.to_string(),
            name: tag.name.clone(),
            color: tag.color.clone(),
        }
    }
}

impl From<&Breed> for BreedResponse {
    fn from(breed: &Breed) -> Self {
        Self {
            id: breed.id.to_string(),
            name: breed.name.clone(),
            description: breed.description.clone(),
        }
    }
}

impl From<&UserProfile> for UserProfileResponse {
    fn from(user: &UserProfile) -> Self {
        Self {
            id: user.id.to_string(),
            username: user.username.clone(),
            avatar: user.avatar.clone(),
        }
    }
}

// ============================================================================
// Character Mappers
// ============================================================================

impl From<&Character> for CharacterResponse {
    fn from(character: &Character) -> Self {
        Self {
            id: character.id.to_string(),
            name: character.name.clone(),
            sex: character.sex,
            level: character.level,
            alignment: character.alignment.clone(),
            stuff: character.stuff.clone(),
            default_character: character.default_character,
            user_id: character.user_id.to_string(),
            server_id: character.server_id.to_string(),
            breed_id: character.breed_id.to_string(),
        }
    }
}

impl From<&TeamMember> for TeamMemberResponse {
    fn from(member: &TeamMember) -> Self {
        Self {
            character: CharacterResponse::from(&member.character),
            server: ServerResponse::from(&member.server),
            breed: BreedResponse::from(&member.breed),
            owner: UserProfileResponse::from(&member.owner),
        }
    }
}

// ============================================================================
// Event Mappers
// ============================================================================

impl From<&Event> for EventResponse {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id.to_string(),
            title: event.title.clone(),
            date: event.date,
            duration: event.duration,
            area: event.area.clone(),
            sub_area: event.sub_area.clone(),
            donjon_name: event.donjon_name.clone(),
            description: event.description.clone(),
            max_players: event.max_players,
            status: event.status.clone(),
            user_id: event.user_id.to_string(),
            server_id: event.server_id.to_string(),
            tag_id: event.tag_id.to_string(),
            created_at: event.created_at,
            updated_at: event.updated_at,
        }
    }
}

impl From<Event> for EventResponse {
    fn from(event: Event) -> Self {
        Self::from(&event)
    }
}

impl From<&EventComment> for CommentResponse {
    fn from(comment: &EventComment) -> Self {
        Self {
            id: comment.comment.id.to_string(),
            message: comment.comment.message.clone(),
            author: UserProfileResponse::from(&comment.author),
            created_at: comment.comment.created_at,
            updated_at: comment.comment.updated_at,
        }
    }
}

impl From<&EventDetails> for EventDetailsResponse {
    fn from(details: &EventDetails) -> Self {
        Self {
            event: EventResponse::from(&details.event),
            tag: TagResponse::from(&details.tag),
            server: ServerResponse::from(&details.server),
            organizer: UserProfileResponse::from(&details.organizer),
            team_size: details.team_size(),
            team: details.team.iter().map(TeamMemberResponse::from).collect(),
            comments: details.comments.iter().map(CommentResponse::from).collect(),
        }
    }
}

impl From<EventDetails> for EventDetailsResponse {
    fn from(details: EventDetails) -> Self {
        Self::from(&details)
    }
}

/// Event with its team size for list views
#[derive(Debug, Clone)]
pub struct EventWithTeamSize {
    pub event: Event,
    pub team_size: usize,
}

impl From<EventWithTeamSize> for EventSummaryResponse {
    fn from(data: EventWithTeamSize) -> Self {
        Self {
            event: EventResponse::from(&data.event),
            team_size: data.team_size,
        }
    }
}
