//! Event service
//!
//! Loads events in their thin and enriched shapes, and handles event
//! creation and deletion. Lookups report absence as `None`; callers decide
//! whether that is an error.

use tracing::{info, instrument, warn};
use validator::Validate;

use dofus_core::entities::{Event, EventDetails, NewEvent};
use dofus_core::roster::{check_capacity, ensure_same_server, filter_already_members};
use dofus_core::{DomainError, EventId, UserId, DEFAULT_EVENT_STATUS};

use crate::dto::{CreateEventRequest, EventWithTeamSize};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Event service
pub struct EventService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EventService<'a> {
    /// Create a new EventService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get an event without its relations
    #[instrument(skip(self))]
    pub async fn get_thin(&self, event_id: EventId) -> ServiceResult<Option<Event>> {
        Ok(self.ctx.event_repo().find_by_id(event_id).await?)
    }

    /// Get an event with tag, server, organizer, team, and comments
    #[instrument(skip(self))]
    pub async fn get_enriched(&self, event_id: EventId) -> ServiceResult<Option<EventDetails>> {
        Ok(self.ctx.event_repo().find_details(event_id).await?)
    }

    /// List all events without relations, soonest first
    #[instrument(skip(self))]
    pub async fn get_all_thin(&self) -> ServiceResult<Vec<Event>> {
        Ok(self.ctx.event_repo().find_all().await?)
    }

    /// List all events with their relations, soonest first
    #[instrument(skip(self))]
    pub async fn get_all_enriched(&self) -> ServiceResult<Vec<EventDetails>> {
        Ok(self.ctx.event_repo().find_all_details().await?)
    }

    /// List all events with their current team sizes
    #[instrument(skip(self))]
    pub async fn list_summaries(&self) -> ServiceResult<Vec<EventWithTeamSize>> {
        let events = self.get_all_thin().await?;

        let mut summaries = Vec::with_capacity(events.len());
        for event in events {
            let team_size = self.ctx.roster_repo().count(event.id).await?;
            summaries.push(EventWithTeamSize { event, team_size });
        }

        Ok(summaries)
    }

    /// Create an event together with its initial team
    ///
    /// The team obeys the same rules as later additions: repeated ids
    /// collapse, every character must play on the event's server, and the
    /// team must fit in `max_players`. Unknown ids are skipped, but at least
    /// one must resolve.
    #[instrument(skip(self, request), fields(title = %request.title))]
    pub async fn create_event(
        &self,
        owner_id: UserId,
        request: CreateEventRequest,
    ) -> ServiceResult<EventDetails> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let limit = self.ctx.roster_config().max_players_limit;
        if request.max_players > limit {
            return Err(ServiceError::validation(format!(
                "Max players must be at most {limit}"
            )));
        }

        let new_event = NewEvent {
            title: request.title,
            date: request.date,
            duration: request.duration,
            area: request.area,
            sub_area: request.sub_area,
            donjon_name: request.donjon_name,
            description: request.description,
            max_players: request.max_players,
            status: request
                .status
                .unwrap_or_else(|| DEFAULT_EVENT_STATUS.to_string()),
            user_id: owner_id,
            server_id: request.server_id,
            tag_id: request.tag_id,
        };

        let candidates = self
            .ctx
            .character_repo()
            .find_by_ids(&request.character_ids)
            .await?;
        if candidates.is_empty() {
            return Err(DomainError::NoCharactersFound.into());
        }

        // Not persisted yet; the checks only read its server and capacity
        let draft = new_event.clone().into_event(EventId::default());
        let team = filter_already_members(&[], candidates);
        let team = ensure_same_server(&draft, team).inspect_err(|e| {
            warn!(error = %e, "Initial team rejected");
        })?;
        check_capacity(&draft, 0, team.len())?;

        let team_ids: Vec<_> = team.iter().map(|c| c.id).collect();
        let event = self.ctx.event_repo().create(&new_event, &team_ids).await?;

        info!(
            event_id = %event.id,
            owner_id = %owner_id,
            team_size = team_ids.len(),
            "Event created successfully"
        );

        self.get_enriched(event.id)
            .await?
            .ok_or_else(|| DomainError::EventNotFound(event.id).into())
    }

    /// Delete an event; its team and comments go with it
    #[instrument(skip(self))]
    pub async fn delete_event(&self, event_id: EventId) -> ServiceResult<()> {
        self.ctx.event_repo().delete(event_id).await?;
        info!(event_id = %event_id, "Event deleted");
        Ok(())
    }
}
