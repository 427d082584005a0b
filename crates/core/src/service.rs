//! CRUD operations on dogs.
//!
//! Every write is validated before the store is touched, and a missing id
//! becomes [`CoreError::NotFound`]. Store failures pass through unchanged.

use crate::dog::{Dog, DogPayload};
use crate::error::{CoreError, CoreResult};
use crate::store::DogStore;
use crate::types::DbId;
use crate::validation::validate_dog;

const ENTITY: &str = "Dog";

pub struct DogService<S> {
    store: S,
}

impl<S: DogStore> DogService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn create(&self, payload: &DogPayload) -> CoreResult<Dog> {
        let fields = validate_dog(payload).map_err(CoreError::Validation)?;
        let dog = self.store.insert(&fields).await?;
        tracing::debug!(id = dog.id, breed = %dog.breed, "Created dog");
        Ok(dog)
    }

    pub async fn list(&self) -> CoreResult<Vec<Dog>> {
        Ok(self.store.find_all().await?)
    }

    pub async fn get(&self, id: DbId) -> CoreResult<Dog> {
        self.store.find(id).await?.ok_or_else(|| not_found(id))
    }

    /// Replace all four mutable fields of an existing dog.
    pub async fn update(&self, id: DbId, payload: &DogPayload) -> CoreResult<Dog> {
        let fields = validate_dog(payload).map_err(CoreError::Validation)?;
        let dog = self.store.update(id, &fields).await?.ok_or_else(|| not_found(id))?;
        tracing::debug!(id, "Updated dog");
        Ok(dog)
    }

    pub async fn delete(&self, id: DbId) -> CoreResult<()> {
        if !self.store.exists(id).await? {
            return Err(not_found(id));
        }
        self.store.delete(id).await?;
        tracing::debug!(id, "Deleted dog");
        Ok(())
    }
}

fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound { entity: ENTITY, id }
}
