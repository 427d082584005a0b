//! Repository for the `dogs` table.

use dogs_core::dog::NewDog;
use dogs_core::types::DbId;
use sqlx::PgPool;

use crate::models::dog::DogRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, breed, age, weight";

/// Provides CRUD operations for dogs.
pub struct DogRepo;

impl DogRepo {
    /// Insert a new dog, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewDog) -> Result<DogRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO dogs (name, breed, age, weight)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DogRow>(&query)
            .bind(&input.name)
            .bind(&input.breed)
            .bind(input.age)
            .bind(input.weight)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<DogRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM dogs WHERE id = $1");
        sqlx::query_as::<_, DogRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all dogs in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<DogRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM dogs ORDER BY id");
        sqlx::query_as::<_, DogRow>(&query).fetch_all(pool).await
    }

    /// Overwrite all mutable columns.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &NewDog,
    ) -> Result<Option<DogRow>, sqlx::Error> {
        let query = format!(
            "UPDATE dogs SET name = $2, breed = $3, age = $4, weight = $5
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DogRow>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.breed)
            .bind(input.age)
            .bind(input.weight)
            .fetch_optional(pool)
            .await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM dogs WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Permanently delete a dog by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM dogs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM dogs")
            .fetch_one(pool)
            .await
    }
}
