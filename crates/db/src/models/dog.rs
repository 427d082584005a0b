//! Dog row model.

use dogs_core::dog::Dog;
use dogs_core::types::DbId;
use sqlx::FromRow;

/// A row from the `dogs` table.
#[derive(Debug, Clone, FromRow)]
pub struct DogRow {
    pub id: DbId,
    pub name: String,
    pub breed: String,
    pub age: i32,
    pub weight: f64,
}

impl From<DogRow> for Dog {
    fn from(row: DogRow) -> Self {
        Dog {
            id: row.id,
            name: row.name,
            breed: row.breed,
            age: row.age,
            weight: row.weight,
        }
    }
}
