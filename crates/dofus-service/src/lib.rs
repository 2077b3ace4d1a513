//! # dofus-service
//!
//! Application layer: event and roster services, request validation, and
//! response DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    AddCharactersRequest, CharacterResponse, CreateEventRequest, EventDetailsResponse,
    EventResponse, EventSummaryResponse, EventWithTeamSize, HealthResponse, ReadinessResponse,
};
pub use services::{
    EventService, RosterService, ServiceContext, ServiceError,
    ServiceResult,
};
