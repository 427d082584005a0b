//! [`DogStore`] backed by PostgreSQL.

use async_trait::async_trait;
use dogs_core::dog::{Dog, NewDog};
use dogs_core::error::StoreError;
use dogs_core::store::{DogStore, StoreResult};
use dogs_core::types::DbId;

use crate::repositories::DogRepo;
use crate::DbPool;

#[derive(Clone)]
pub struct PgDogStore {
    pool: DbPool,
}

impl PgDogStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DogStore for PgDogStore {
    async fn insert(&self, dog: &NewDog) -> StoreResult<Dog> {
        let row = DogRepo::create(&self.pool, dog)
            .await
            .map_err(StoreError::backend)?;
        Ok(row.into())
    }

    async fn find(&self, id: DbId) -> StoreResult<Option<Dog>> {
        let row = DogRepo::find_by_id(&self.pool, id)
            .await
            .map_err(StoreError::backend)?;
        Ok(row.map(Into::into))
    }

    async fn find_all(&self) -> StoreResult<Vec<Dog>> {
        let rows = DogRepo::list(&self.pool)
            .await
            .map_err(StoreError::backend)?;
        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn update(&self, id: DbId, dog: &NewDog) -> StoreResult<Option<Dog>> {
        let row = DogRepo::update(&self.pool, id, dog)
            .await
            .map_err(StoreError::backend)?;
        Ok(row.map(Into::into))
    }

    async fn exists(&self, id: DbId) -> StoreResult<bool> {
        DogRepo::exists(&self.pool, id)
            .await
            .map_err(StoreError::backend)
    }

    async fn delete(&self, id: DbId) -> StoreResult<()> {
        let removed = DogRepo::delete(&self.pool, id)
            .await
            .map_err(StoreError::backend)?;
        if !removed {
            tracing::debug!(id, "Delete matched no row");
        }
        Ok(())
    }

    async fn count(&self) -> StoreResult<i64> {
        DogRepo::count(&self.pool)
            .await
            .map_err(StoreError::backend)
    }

    async fn ping(&self) -> StoreResult<()> {
        crate::health_check(&self.pool)
            .await
            .map_err(StoreError::backend)
    }
}
