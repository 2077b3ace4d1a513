//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation (PostgreSQL or in-memory).

use async_trait::async_trait;

use crate::entities::{Character, Event, EventDetails, NewEvent};
use crate::error::DomainError;
use crate::value_objects::{CharacterId, EventId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Event Repository
// ============================================================================

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Find event by ID (no relations)
    async fn find_by_id(&self, id: EventId) -> RepoResult<Option<Event>>;

    /// List all events ordered by date (no relations)
    async fn find_all(&self) -> RepoResult<Vec<Event>>;

    /// Find event by ID with tag, server, organizer, team, and comments
    async fn find_details(&self, id: EventId) -> RepoResult<Option<EventDetails>>;

    /// List all events with their relations, ordered by date
    async fn find_all_details(&self) -> RepoResult<Vec<EventDetails>>;

    /// Persist a new event together with its initial team
    ///
    /// The event row and the membership rows are written atomically.
    async fn create(&self, event: &NewEvent, team: &[CharacterId]) -> RepoResult<Event>;

    /// Delete an event; team memberships and comments go with it
    async fn delete(&self, id: EventId) -> RepoResult<()>;
}

// ============================================================================
// Character Repository
// ============================================================================

#[async_trait]
pub trait CharacterRepository: Send + Sync {
    /// Find character by ID
    async fn find_by_id(&self, id: CharacterId) -> RepoResult<Option<Character>>;

    /// Resolve a batch of IDs; unknown IDs are skipped
    async fn find_by_ids(&self, ids: &[CharacterId]) -> RepoResult<Vec<Character>>;
}

// ============================================================================
// Roster Repository
// ============================================================================

/// Event team membership (`event_id`, `character_id` pairs)
#[async_trait]
pub trait RosterRepository: Send + Sync {
    /// List the characters on an event's team, in join order
    async fn find_members(&self, event_id: EventId) -> RepoResult<Vec<Character>>;

    /// Count the characters on an event's team
    async fn count(&self, event_id: EventId) -> RepoResult<usize>;

    /// Add characters to a team unless the result would exceed `max_players`
    ///
    /// The roster is recounted under a lock on the event, so concurrent
    /// additions cannot jointly overshoot the capacity. Pairs that already
    /// exist are ignored. Returns the number of rows inserted.
    ///
    /// # Errors
    /// `EventNotFound` if the event vanished, `CapacityExceeded` if the
    /// recount leaves too few slots.
    async fn insert_within_capacity(
        &self,
        event_id: EventId,
        character_ids: &[CharacterId],
        max_players: i32,
    ) -> RepoResult<u64>;

    /// Remove a character from a team unless it is the last member
    ///
    /// Same locking as [`RosterRepository::insert_within_capacity`].
    ///
    /// # Errors
    /// `EventNotFound`, `NotInRoster`, or `RosterWouldBeEmpty`.
    async fn delete_keeping_one(
        &self,
        event_id: EventId,
        character_id: CharacterId,
    ) -> RepoResult<()>;
}
