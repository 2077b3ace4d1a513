//! PostgreSQL implementation of RosterRepository
//!
//! Mutations lock the event row for the length of a transaction and recount
//! the team before writing, so concurrent requests on the same event are
//! serialized and cannot push the team past its capacity or below one member.

use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use tracing::{info, instrument, warn};

use dofus_core::entities::Character;
use dofus_core::error::DomainError;
use dofus_core::roster::MIN_ROSTER_SIZE;
use dofus_core::traits::{RepoResult, RosterRepository};
use dofus_core::value_objects::{CharacterId, EventId};

use crate::models::CharacterModel;

use super::error::{event_not_found, map_db_error, map_foreign_key_violation, unknown_reference};

/// Adds a batch of members. `joined_at` steps one microsecond per position
/// so the batch reads back in the order it was requested.
pub(super) const INSERT_MEMBERS_SQL: &str = r#"
    INSERT INTO event_characters (event_id, character_id, joined_at)
    SELECT $1, t.character_id, NOW() + t.position * INTERVAL '1 microsecond'
    FROM UNNEST($2::BIGINT[]) WITH ORDINALITY AS t(character_id, position)
    ON CONFLICT DO NOTHING
"#;

/// PostgreSQL implementation of RosterRepository
#[derive(Clone)]
pub struct PgRosterRepository {
    pool: PgPool,
}

impl PgRosterRepository {
    /// Create a new PgRosterRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Take a row lock on the event for the rest of the transaction
async fn lock_event(conn: &mut PgConnection, event_id: EventId) -> RepoResult<()> {
    let locked = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT id FROM events WHERE id = $1 FOR UPDATE
        "#,
    )
    .bind(event_id.into_inner())
    .fetch_optional(&mut *conn)
    .await
    .map_err(map_db_error)?;

    match locked {
        Some(_) => Ok(()),
        None => Err(event_not_found(event_id)),
    }
}

async fn team_size(conn: &mut PgConnection, event_id: EventId) -> RepoResult<usize> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM event_characters WHERE event_id = $1
        "#,
    )
    .bind(event_id.into_inner())
    .fetch_one(&mut *conn)
    .await
    .map_err(map_db_error)?;

    Ok(count as usize)
}

#[async_trait]
impl RosterRepository for PgRosterRepository {
    #[instrument(skip(self))]
    async fn find_members(&self, event_id: EventId) -> RepoResult<Vec<Character>> {
        let results = sqlx::query_as::<_, CharacterModel>(
            r#"
            SELECT c.id, c.name, c.sex, c.level, c.alignment, c.stuff, c.default_character,
                   c.user_id, c.server_id, c.breed_id, c.created_at, c.updated_at
            FROM event_characters ec
            JOIN characters c ON c.id = ec.character_id
            WHERE ec.event_id = $1
            ORDER BY ec.joined_at, c.id
            "#,
        )
        .bind(event_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Character::from).collect())
    }

    #[instrument(skip(self))]
    async fn count(&self, event_id: EventId) -> RepoResult<usize> {
        let mut conn = self.pool.acquire().await.map_err(map_db_error)?;
        team_size(&mut conn, event_id).await
    }

    #[instrument(skip(self), fields(count = character_ids.len()))]
    async fn insert_within_capacity(
        &self,
        event_id: EventId,
        character_ids: &[CharacterId],
        max_players: i32,
    ) -> RepoResult<u64> {
        if character_ids.is_empty() {
            return Ok(0);
        }

        let ids: Vec<i64> = character_ids
            .iter()
            .copied()
            .map(CharacterId::into_inner)
            .collect();

        let mut tx = self.pool.begin().await.map_err(map_db_error)?;
        lock_event(&mut tx, event_id).await?;
        let current = team_size(&mut tx, event_id).await?;

        let inserted = sqlx::query(INSERT_MEMBERS_SQL)
        .bind(event_id.into_inner())
        .bind(&ids)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_foreign_key_violation(e, unknown_reference))?
        .rows_affected();

        let requested = current + inserted as usize;
        if requested > usize::try_from(max_players).unwrap_or(0) {
            // Dropping the transaction rolls the insert back
            warn!(%event_id, requested, max_players, "Team capacity re-check failed");
            return Err(DomainError::CapacityExceeded {
                max_players,
                requested,
            });
        }

        tx.commit().await.map_err(map_db_error)?;

        info!(%event_id, inserted, "Characters added to team");
        Ok(inserted)
    }

    #[instrument(skip(self))]
    async fn delete_keeping_one(
        &self,
        event_id: EventId,
        character_id: CharacterId,
    ) -> RepoResult<()> {
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;
        lock_event(&mut tx, event_id).await?;

        let is_member = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM event_characters WHERE event_id = $1 AND character_id = $2
            )
            "#,
        )
        .bind(event_id.into_inner())
        .bind(character_id.into_inner())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        if !is_member {
            return Err(DomainError::NotInRoster);
        }

        let current = team_size(&mut tx, event_id).await?;
        if current.saturating_sub(1) < MIN_ROSTER_SIZE {
            warn!(%event_id, %character_id, "Refusing to remove the last team member");
            return Err(DomainError::RosterWouldBeEmpty);
        }

        sqlx::query(
            r#"
            DELETE FROM event_characters WHERE event_id = $1 AND character_id = $2
            "#,
        )
        .bind(event_id.into_inner())
        .bind(character_id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        info!(%event_id, %character_id, "Character removed from team");
        Ok(())
    }
}
