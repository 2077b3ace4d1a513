//! Service context - dependency container for services
//!
//! Holds the repositories and roster limits needed by services.

use std::sync::Arc;

use dofus_common::RosterConfig;
use dofus_core::traits::{CharacterRepository, EventRepository, RosterRepository};
use dofus_db::{InMemoryStore, PgCharacterRepository, PgEventRepository, PgPool, PgRosterRepository};

/// Service context containing all dependencies
///
/// This is the dependency container that gets passed to all services.
/// It provides access to:
/// - Event, character, and roster repositories
/// - Roster limits from configuration
/// - The PostgreSQL pool, when the repositories are database backed
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: Option<PgPool>,

    // Repositories
    event_repo: Arc<dyn EventRepository>,
    character_repo: Arc<dyn CharacterRepository>,
    roster_repo: Arc<dyn RosterRepository>,

    // Configuration
    roster_config: RosterConfig,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: Option<PgPool>,
        event_repo: Arc<dyn EventRepository>,
        character_repo: Arc<dyn CharacterRepository>,
        roster_repo: Arc<dyn RosterRepository>,
        roster_config: RosterConfig,
    ) -> Self {
        Self {
            pool,
            event_repo,
            character_repo,
            roster_repo,
            roster_config,
        }
    }

    /// Context backed by PostgreSQL repositories sharing `pool`
    pub fn postgres(pool: PgPool, roster_config: RosterConfig) -> Self {
        Self::new(
            Some(pool.clone()),
            Arc::new(PgEventRepository::new(pool.clone())),
            Arc::new(PgCharacterRepository::new(pool.clone())),
            Arc::new(PgRosterRepository::new(pool)),
            roster_config,
        )
    }

    /// Context backed by one in-memory store
    pub fn in_memory(store: Arc<InMemoryStore>, roster_config: RosterConfig) -> Self {
        Self::new(
            None,
            store.clone(),
            store.clone(),
            store,
            roster_config,
        )
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool, if any
    pub fn pool(&self) -> Option<&PgPool> {
        self.pool.as_ref()
    }

    // === Repositories ===

    /// Get the event repository
    pub fn event_repo(&self) -> &dyn EventRepository {
        self.event_repo.as_ref()
    }

    /// Get the character repository
    pub fn character_repo(&self) -> &dyn CharacterRepository {
        self.character_repo.as_ref()
    }

    /// Get the roster repository
    pub fn roster_repo(&self) -> &dyn RosterRepository {
        self.roster_repo.as_ref()
    }

    // === Configuration ===

    /// Get the roster limits
    pub fn roster_config(&self) -> &RosterConfig {
        &self.roster_config
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &self.pool.as_ref().map(|_| "PgPool"))
            .field("repositories", &"...")
            .field("roster_config", &self.roster_config)
            .finish()
    }
}
