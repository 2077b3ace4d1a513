//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{CharacterId, EventId};

/// Domain layer errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Event not found: {0}")]
    EventNotFound(EventId),

    #[error("Character not found: {0}")]
    CharacterNotFound(CharacterId),

    #[error("None of the requested characters exist")]
    NoCharactersFound,

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    // =========================================================================
    // Roster Rule Violations
    // =========================================================================
    #[error("Team is full: {requested} players requested, max {max_players}")]
    CapacityExceeded { max_players: i32, requested: usize },

    #[error("Characters from another server cannot join this event: {}", .0.join(", "))]
    CrossServerCharacter(Vec<String>),

    #[error("Character is not in the event team")]
    NotInRoster,

    #[error("Cannot remove the last character of the team")]
    RosterWouldBeEmpty,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::EventNotFound(_) => "UNKNOWN_EVENT",
            Self::CharacterNotFound(_) => "UNKNOWN_CHARACTER",
            Self::NoCharactersFound => "NO_CHARACTERS_FOUND",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",

            // Roster rules
            Self::CapacityExceeded { .. } => "CAPACITY_EXCEEDED",
            Self::CrossServerCharacter(_) => "CROSS_SERVER_CHARACTER",
            Self::NotInRoster => "NOT_IN_TEAM",
            Self::RosterWouldBeEmpty => "TEAM_WOULD_BE_EMPTY",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::EventNotFound(_) | Self::CharacterNotFound(_) | Self::NoCharactersFound
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ValidationError(_))
    }

    /// Check if this error rejects a change because of the current roster state
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::CapacityExceeded { .. }
                | Self::CrossServerCharacter(_)
                | Self::NotInRoster
                | Self::RosterWouldBeEmpty
        )
    }
}
