use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{DogStore, StoreResult};
use crate::dog::{Dog, NewDog};
use crate::types::DbId;

#[derive(Debug)]
struct Inner {
    next_id: DbId,
    rows: BTreeMap<DbId, Dog>,
}

/// In-process [`DogStore`] with BIGSERIAL-like ids starting at 1.
///
/// Ids are never reused after a delete.
#[derive(Debug)]
pub struct MemoryDogStore {
    inner: RwLock<Inner>,
}

impl MemoryDogStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }
}

impl Default for MemoryDogStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DogStore for MemoryDogStore {
    async fn insert(&self, dog: &NewDog) -> StoreResult<Dog> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;
        let row = Dog::with_id(id, dog.clone());
        inner.rows.insert(id, row.clone());
        Ok(row)
    }

    async fn find(&self, id: DbId) -> StoreResult<Option<Dog>> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn find_all(&self) -> StoreResult<Vec<Dog>> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn update(&self, id: DbId, dog: &NewDog) -> StoreResult<Option<Dog>> {
        let mut inner = self.inner.write().await;
        Ok(inner.rows.get_mut(&id).map(|row| {
            *row = Dog::with_id(id, dog.clone());
            row.clone()
        }))
    }

    async fn exists(&self, id: DbId) -> StoreResult<bool> {
        Ok(self.inner.read().await.rows.contains_key(&id))
    }

    async fn delete(&self, id: DbId) -> StoreResult<()> {
        self.inner.write().await.rows.remove(&id);
        Ok(())
    }

    async fn count(&self) -> StoreResult<i64> {
        Ok(self.inner.read().await.rows.len() as i64)
    }
}
