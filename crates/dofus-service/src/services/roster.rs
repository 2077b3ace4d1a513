//! Roster service
//!
//! Adds characters to and removes them from event teams. Every change is
//! fully validated against the roster rules before anything is written, and
//! the write itself re-checks capacity and minimum size in storage.

use std::collections::HashSet;

use tracing::{info, instrument, warn};

use dofus_core::entities::{Character, Event, EventDetails};
use dofus_core::roster::{
    check_capacity, check_minimum_after_removal, filter_already_members, is_member,
    partition_by_same_server, MIN_ROSTER_SIZE,
};
use dofus_core::{CharacterId, DomainError, EventId};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};
use super::event::EventService;

/// Roster service
pub struct RosterService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> RosterService<'a> {
    /// Create a new RosterService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Load an event and its current team
    async fn load_event_with_team(
        &self,
        event_id: EventId,
    ) -> ServiceResult<(Event, Vec<Character>)> {
        let event = EventService::new(self.ctx)
            .get_thin(event_id)
            .await?
            .ok_or(DomainError::EventNotFound(event_id))?;
        let team = self.ctx.roster_repo().find_members(event_id).await?;
        Ok((event, team))
    }

    /// Reload the enriched event after a change
    async fn refreshed(&self, event_id: EventId) -> ServiceResult<EventDetails> {
        EventService::new(self.ctx)
            .get_enriched(event_id)
            .await?
            .ok_or_else(|| DomainError::EventNotFound(event_id).into())
    }

    /// List the characters on an event's team, in join order
    #[instrument(skip(self))]
    pub async fn list_team(&self, event_id: EventId) -> ServiceResult<Vec<Character>> {
        let (_, team) = self.load_event_with_team(event_id).await?;
        Ok(team)
    }

    /// Add characters to an event's team
    ///
    /// Ids that do not resolve are skipped and characters already on the team
    /// are ignored, so a request naming only current members changes nothing.
    /// The batch is all-or-nothing: one character from another server, or a
    /// batch that does not fit, rejects every character in it.
    #[instrument(skip(self, character_ids), fields(count = character_ids.len()))]
    pub async fn add_characters(
        &self,
        event_id: EventId,
        character_ids: &[CharacterId],
    ) -> ServiceResult<EventDetails> {
        let distinct: HashSet<CharacterId> = character_ids.iter().copied().collect();
        let max_batch = self.ctx.roster_config().max_batch_size;
        if distinct.len() > max_batch {
            return Err(ServiceError::validation(format!(
                "At most {max_batch} characters can be added at once"
            )));
        }

        let (event, team) = self.load_event_with_team(event_id).await?;

        let candidates = self.ctx.character_repo().find_by_ids(character_ids).await?;
        if candidates.is_empty() {
            return Err(DomainError::NoCharactersFound.into());
        }

        let candidates = filter_already_members(&team, candidates);
        if candidates.is_empty() {
            info!(event_id = %event_id, "Every character is already on the team");
            return self.refreshed(event_id).await;
        }

        let partition = partition_by_same_server(&event, candidates);
        if !partition.is_clean() {
            warn!(
                event_id = %event_id,
                rejected = ?partition.invalid_names,
                "Characters from another server refused"
            );
            return Err(DomainError::CrossServerCharacter(partition.invalid_names).into());
        }
        let accepted = partition.valid;

        check_capacity(&event, team.len(), accepted.len()).inspect_err(|e| {
            warn!(event_id = %event_id, error = %e, "Team capacity exceeded");
        })?;

        let ids: Vec<CharacterId> = accepted.iter().map(|c| c.id).collect();
        let inserted = self
            .ctx
            .roster_repo()
            .insert_within_capacity(event_id, &ids, event.max_players)
            .await?;

        info!(event_id = %event_id, added = inserted, "Characters joined the team");

        self.refreshed(event_id).await
    }

    /// Remove one character from an event's team
    ///
    /// The last member can never be removed.
    #[instrument(skip(self))]
    pub async fn remove_character(
        &self,
        event_id: EventId,
        character_id: CharacterId,
    ) -> ServiceResult<EventDetails> {
        let (_, team) = self.load_event_with_team(event_id).await?;

        self.ctx
            .character_repo()
            .find_by_id(character_id)
            .await?
            .ok_or(DomainError::CharacterNotFound(character_id))?;

        if !is_member(&team, character_id) {
            return Err(DomainError::NotInRoster.into());
        }

        if check_minimum_after_removal(&team) < MIN_ROSTER_SIZE {
            warn!(event_id = %event_id, character_id = %character_id, "Refusing to empty the team");
            return Err(DomainError::RosterWouldBeEmpty.into());
        }

        self.ctx
            .roster_repo()
            .delete_keeping_one(event_id, character_id)
            .await?;

        info!(event_id = %event_id, character_id = %character_id, "Character left the team");

        self.refreshed(event_id).await
    }
}
