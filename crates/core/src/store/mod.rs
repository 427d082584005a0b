//! The persistence seam.
//!
//! [`DogStore`] is everything the service and seeder need from storage.
//! `dogs-db` provides the PostgreSQL implementation; [`MemoryDogStore`] backs
//! tests and database-less development runs.

mod memory;

use std::sync::Arc;

use async_trait::async_trait;

use crate::dog::{Dog, NewDog};
use crate::error::StoreError;
use crate::types::DbId;

pub use memory::MemoryDogStore;

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait DogStore: Send + Sync {
    /// Persist a new record and return it with its assigned id.
    async fn insert(&self, dog: &NewDog) -> StoreResult<Dog>;

    async fn find(&self, id: DbId) -> StoreResult<Option<Dog>>;

    /// All records, ascending by id.
    async fn find_all(&self) -> StoreResult<Vec<Dog>>;

    /// Overwrite every mutable field. Returns `None` if no row has `id`.
    async fn update(&self, id: DbId, dog: &NewDog) -> StoreResult<Option<Dog>>;

    async fn exists(&self, id: DbId) -> StoreResult<bool>;

    async fn delete(&self, id: DbId) -> StoreResult<()>;

    async fn count(&self) -> StoreResult<i64>;

    /// Cheap connectivity probe for health reporting.
    async fn ping(&self) -> StoreResult<()> {
        self.count().await.map(|_| ())
    }
}

#[async_trait]
impl<T: DogStore + ?Sized> DogStore for Arc<T> {
    async fn insert(&self, dog: &NewDog) -> StoreResult<Dog> {
        (**self).insert(dog).await
    }

    async fn find(&self, id: DbId) -> StoreResult<Option<Dog>> {
        (**self).find(id).await
    }

    async fn find_all(&self) -> StoreResult<Vec<Dog>> {
        (**self).find_all().await
    }

    async fn update(&self, id: DbId, dog: &NewDog) -> StoreResult<Option<Dog>> {
        (**self).update(id, dog).await
    }

    async fn exists(&self, id: DbId) -> StoreResult<bool> {
        (**self).exists(id).await
    }

    async fn delete(&self, id: DbId) -> StoreResult<()> {
        (**self).delete(id).await
    }

    async fn count(&self) -> StoreResult<i64> {
        (**self).count().await
    }

    async fn ping(&self) -> StoreResult<()> {
        (**self).ping().await
    }
}
