//! PostgreSQL implementation of EventRepository

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{info, instrument};

use dofus_core::entities::{Event, EventComment, EventDetails, NewEvent, TeamMember};
use dofus_core::error::DomainError;
use dofus_core::traits::{EventRepository, RepoResult};
use dofus_core::value_objects::{CharacterId, EventId};

use crate::mappers::{event_details, EventInsert};
use crate::models::{
    CommentWithAuthorModel, EventModel, EventWithRelationsModel, TeamMemberModel,
};

use super::error::{event_not_found, map_db_error, map_foreign_key_violation, unknown_reference};
use super::roster::INSERT_MEMBERS_SQL;

/// PostgreSQL implementation of EventRepository
#[derive(Clone)]
pub struct PgEventRepository {
    pool: PgPool,
}

impl PgEventRepository {
    /// Create a new PgEventRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load the teams of the given events, grouped by event id
    async fn load_teams(
        &self,
        event_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<TeamMember>>, DomainError> {
        let rows = sqlx::query_as::<_, TeamMemberModel>(
            r#"
            SELECT ec.event_id, ec.joined_at,
                   c.id, c.name, c.sex, c.level, c.alignment, c.stuff, c.default_character,
                   c.user_id, c.server_id, c.breed_id, c.created_at, c.updated_at,
                   s.name AS server_name, s.mono_account AS server_mono_account,
                   b.name AS breed_name, b.description AS breed_description,
                   u.username AS owner_username, u.avatar AS owner_avatar
            FROM event_characters ec
            JOIN characters c ON c.id = ec.character_id
            JOIN servers s ON s.id = c.server_id
            JOIN breeds b ON b.id = c.breed_id
            JOIN users u ON u.id = c.user_id
            WHERE ec.event_id = ANY($1)
            ORDER BY ec.event_id, ec.joined_at, c.id
            "#,
        )
        .bind(event_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let mut teams: HashMap<i64, Vec<TeamMember>> = HashMap::new();
        for row in rows {
            teams.entry(row.event_id).or_default().push(row.into());
        }
        Ok(teams)
    }

    /// Load the comments of the given events, grouped by event id
    async fn load_comments(
        &self,
        event_ids: &[i64],
    ) -> Result<HashMap<i64, Vec<EventComment>>, DomainError> {
        let rows = sqlx::query_as::<_, CommentWithAuthorModel>(
            r#"
            SELECT cm.id, cm.event_id, cm.user_id, cm.message, cm.created_at, cm.updated_at,
                   u.username AS author_username, u.avatar AS author_avatar
            FROM comments cm
            JOIN users u ON u.id = cm.user_id
            WHERE cm.event_id = ANY($1)
            ORDER BY cm.event_id, cm.created_at, cm.id
            "#,
        )
        .bind(event_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        let mut comments: HashMap<i64, Vec<EventComment>> = HashMap::new();
        for row in rows {
            comments
                .entry(row.comment.event_id)
                .or_default()
                .push(row.into());
        }
        Ok(comments)
    }

    /// Attach teams and comments to already loaded event rows
    async fn assemble(
        &self,
        rows: Vec<EventWithRelationsModel>,
    ) -> RepoResult<Vec<EventDetails>> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = rows.iter().map(|row| row.event.id).collect();
        let mut teams = self.load_teams(&ids).await?;
        let mut comments = self.load_comments(&ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let id = row.event.id;
                event_details(
                    row,
                    teams.remove(&id).unwrap_or_default(),
                    comments.remove(&id).unwrap_or_default(),
                )
            })
            .collect())
    }
}

#[async_trait]
impl EventRepository for PgEventRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: EventId) -> RepoResult<Option<Event>> {
        let result = sqlx::query_as::<_, EventModel>(
            r#"
            SELECT id, title, date, duration, area, sub_area, donjon_name, description,
                   max_players, status, user_id, server_id, tag_id, created_at, updated_at
            FROM events
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Event::from))
    }

    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Event>> {
        let results = sqlx::query_as::<_, EventModel>(
            r#"
            SELECT id, title, date, duration, area, sub_area, donjon_name, description,
                   max_players, status, user_id, server_id, tag_id, created_at, updated_at
            FROM events
            ORDER BY date, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Event::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_details(&self, id: EventId) -> RepoResult<Option<EventDetails>> {
        let result = sqlx::query_as::<_, EventWithRelationsModel>(
            r#"
            SELECT e.id, e.title, e.date, e.duration, e.area, e.sub_area, e.donjon_name,
                   e.description, e.max_players, e.status, e.user_id, e.server_id, e.tag_id,
                   e.created_at, e.updated_at,
                   t.name AS tag_name, t.color AS tag_color,
                   s.name AS server_name, s.mono_account AS server_mono_account,
                   u.username AS organizer_username, u.avatar AS organizer_avatar
            FROM events e
            JOIN tags t ON t.id = e.tag_id
            JOIN servers s ON s.id = e.server_id
            JOIN users u ON u.id = e.user_id
            WHERE e.id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        match result {
            Some(row) => Ok(self.assemble(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    #[instrument(skip(self))]
    async fn find_all_details(&self) -> RepoResult<Vec<EventDetails>> {
        let rows = sqlx::query_as::<_, EventWithRelationsModel>(
            r#"
            SELECT e.id, e.title, e.date, e.duration, e.area, e.sub_area, e.donjon_name,
                   e.description, e.max_players, e.status, e.user_id, e.server_id, e.tag_id,
                   e.created_at, e.updated_at,
                   t.name AS tag_name, t.color AS tag_color,
                   s.name AS server_name, s.mono_account AS server_mono_account,
                   u.username AS organizer_username, u.avatar AS organizer_avatar
            FROM events e
            JOIN tags t ON t.id = e.tag_id
            JOIN servers s ON s.id = e.server_id
            JOIN users u ON u.id = e.user_id
            ORDER BY e.date, e.id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        self.assemble(rows).await
    }

    #[instrument(skip(self, event), fields(title = %event.title))]
    async fn create(&self, event: &NewEvent, team: &[CharacterId]) -> RepoResult<Event> {
        let insert = EventInsert::new(event);
        let team_ids: Vec<i64> = team.iter().copied().map(CharacterId::into_inner).collect();

        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let model = sqlx::query_as::<_, EventModel>(
            r#"
            INSERT INTO events (title, date, duration, area, sub_area, donjon_name, description,
                                max_players, status, user_id, server_id, tag_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING id, title, date, duration, area, sub_area, donjon_name, description,
                      max_players, status, user_id, server_id, tag_id, created_at, updated_at
            "#,
        )
        .bind(insert.title)
        .bind(insert.date)
        .bind(insert.duration)
        .bind(insert.area)
        .bind(insert.sub_area)
        .bind(insert.donjon_name)
        .bind(insert.description)
        .bind(insert.max_players)
        .bind(insert.status)
        .bind(insert.user_id)
        .bind(insert.server_id)
        .bind(insert.tag_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_foreign_key_violation(e, unknown_reference))?;

        sqlx::query(INSERT_MEMBERS_SQL)
        .bind(model.id)
        .bind(&team_ids)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_foreign_key_violation(e, unknown_reference))?;

        tx.commit().await.map_err(map_db_error)?;

        info!(event_id = model.id, team_size = team_ids.len(), "Event created");
        Ok(Event::from(model))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: EventId) -> RepoResult<()> {
        let result = sqlx::query(
            r#"
            DELETE FROM events WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(event_not_found(id));
        }

        Ok(())
    }
}
