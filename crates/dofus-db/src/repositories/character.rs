//! PostgreSQL implementation of CharacterRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use dofus_core::entities::Character;
use dofus_core::traits::{CharacterRepository, RepoResult};
use dofus_core::value_objects::CharacterId;

use crate::models::CharacterModel;

use super::error::map_db_error;

/// PostgreSQL implementation of CharacterRepository
#[derive(Clone)]
pub struct PgCharacterRepository {
    pool: PgPool,
}

impl PgCharacterRepository {
    /// Create a new PgCharacterRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CharacterRepository for PgCharacterRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: CharacterId) -> RepoResult<Option<Character>> {
        let result = sqlx::query_as::<_, CharacterModel>(
            r#"
            SELECT id, name, sex, level, alignment, stuff, default_character,
                   user_id, server_id, breed_id, created_at, updated_at
            FROM characters
            WHERE id = $1
            "#,
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Character::from))
    }

    #[instrument(skip(self), fields(count = ids.len()))]
    async fn find_by_ids(&self, ids: &[CharacterId]) -> RepoResult<Vec<Character>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = ids.iter().copied().map(CharacterId::into_inner).collect();

        // Keep the order in which the ids were requested
        let results = sqlx::query_as::<_, CharacterModel>(
            r#"
            SELECT id, name, sex, level, alignment, stuff, default_character,
                   user_id, server_id, breed_id, created_at, updated_at
            FROM characters
            WHERE id = ANY($1)
            ORDER BY array_position($1, id)
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(results.into_iter().map(Character::from).collect())
    }
}
