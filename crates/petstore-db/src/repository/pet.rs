//! # SQLite Pet Repository
//!
//! Persists pets to the `pets` table.
//!
//! ## Statement per Operation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Operation     SQL                                        No rows →     │
//! │  ──────────    ──────────────────────────────────────     ───────────   │
//! │  add           INSERT ... RETURNING id, name, status      (n/a)         │
//! │  get_by_id     SELECT ... WHERE id = ?                    NotFound      │
//! │  update        UPDATE ... WHERE id = ?                    NotFound      │
//! │  delete        DELETE ... WHERE id = ?                    NotFound      │
//! │  list          SELECT ... [WHERE status = ?] ORDER BY id  empty Vec     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every statement auto-commits. Concurrency control is left to SQLite.

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::debug;

use super::PetRepository;
use crate::error::{DbError, DbResult};
use petstore_core::{NewPet, Pet, PetStatus, PetUpdate};

/// Repository for pet database operations.
#[derive(Debug, Clone)]
pub struct SqlitePetRepository {
    pool: SqlitePool,
}

impl SqlitePetRepository {
    /// Creates a new SqlitePetRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SqlitePetRepository { pool }
    }
}

#[async_trait]
impl PetRepository for SqlitePetRepository {
    async fn add(&self, pet: NewPet) -> DbResult<Pet> {
        debug!(name = %pet.name, "Inserting pet");

        let created = sqlx::query_as::<_, Pet>(
            r#"
            INSERT INTO pets (name, status)
            VALUES (?1, ?2)
            RETURNING id, name, status
            "#,
        )
        .bind(&pet.name)
        .bind(pet.status_or_default())
        .fetch_one(&self.pool)
        .await?;

        debug!(id = created.id, "Pet inserted");
        Ok(created)
    }

    async fn delete(&self, id: i64) -> DbResult<()> {
        debug!(id, "Deleting pet");

        let result = sqlx::query("DELETE FROM pets WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Pet", id));
        }

        Ok(())
    }

    async fn get_by_id(&self, id: i64) -> DbResult<Pet> {
        sqlx::query_as::<_, Pet>(
            r#"
            SELECT id, name, status
            FROM pets
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| DbError::not_found("Pet", id))
    }

    async fn update(&self, update: &PetUpdate) -> DbResult<()> {
        debug!(id = update.id, "Updating pet");

        // COALESCE keeps the stored status when none is given
        let result = sqlx::query(
            r#"
            UPDATE pets SET
                name = ?2,
                status = COALESCE(?3, status)
            WHERE id = ?1
            "#,
        )
        .bind(update.id)
        .bind(&update.name)
        .bind(update.status)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Pet", update.id));
        }

        Ok(())
    }

    async fn list(&self, status: Option<PetStatus>) -> DbResult<Vec<Pet>> {
        let pets = match status {
            Some(status) => {
                sqlx::query_as::<_, Pet>(
                    r#"
                    SELECT id, name, status
                    FROM pets
                    WHERE status = ?1
                    ORDER BY id
                    "#,
                )
                .bind(status)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Pet>("SELECT id, name, status FROM pets ORDER BY id")
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        debug!(count = pets.len(), ?status, "Listed pets");
        Ok(pets)
    }

    async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pets")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1").execute(&self.pool).await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Database, DbConfig};

    #[tokio::test]
    async fn test_status_is_stored_as_lowercase_text() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.pets();

        repo.add(NewPet::new("Rex").with_status(PetStatus::Sold))
            .await
            .unwrap();

        let raw: String = sqlx::query_scalar("SELECT status FROM pets WHERE id = 1")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(raw, "sold");
    }

    #[tokio::test]
    async fn test_closed_pool_surfaces_storage_error() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let repo = db.pets();
        db.close().await;

        let err = repo.get_by_id(1).await.unwrap_err();
        assert!(!err.is_not_found());
        assert!(!repo.health_check().await);
    }
}
