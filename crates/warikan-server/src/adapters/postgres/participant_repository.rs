//! PostgreSQL implementation of ParticipantRepository

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use warikan::{DomainError, Participant, ParticipantRepository};

use super::{is_foreign_key_violation, is_unique_violation, repository_error};

/// PostgreSQL implementation of ParticipantRepository
pub struct PgParticipantRepository {
    pool: PgPool,
}

impl PgParticipantRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for sqlx mapping
#[derive(sqlx::FromRow)]
struct ParticipantRow {
    id: Uuid,
    name: String,
    created_at: chrono::DateTime<chrono::Utc>,
}

impl From<ParticipantRow> for Participant {
    fn from(row: ParticipantRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl ParticipantRepository for PgParticipantRepository {
    async fn find_all(&self) -> Result<Vec<Participant>, DomainError> {
        let rows = sqlx::query_as::<_, ParticipantRow>(
            "SELECT id, name, created_at FROM participants ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(repository_error)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn create(&self, participant: &Participant) -> Result<Participant, DomainError> {
        let row = sqlx::query_as::<_, ParticipantRow>(
            r#"
            INSERT INTO participants (id, name, created_at)
            VALUES ($1, $2, $3)
            RETURNING id, name, created_at
            "#,
        )
        .bind(participant.id)
        .bind(&participant.name)
        .bind(participant.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                DomainError::Conflict(format!(
                    "A participant named '{}' already exists",
                    participant.name
                ))
            } else {
                repository_error(e)
            }
        })?;

        Ok(row.into())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        // ON DELETE RESTRICT on expenses.paid_by and expense_participants.participant_id
        let result = sqlx::query("DELETE FROM participants WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if is_foreign_key_violation(&e) {
                    DomainError::referenced("Participant", id, "existing expenses")
                } else {
                    repository_error(e)
                }
            })?;

        Ok(result.rows_affected() > 0)
    }
}
