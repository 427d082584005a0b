//! Dog record types.
//!
//! - [`Dog`] is a persisted record; it always carries a store-assigned id.
//! - [`NewDog`] is a validated, id-less record used for inserts and updates.
//! - [`DogPayload`] is the raw, untyped request body before validation.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use validator::Validate;

use crate::types::DbId;
use crate::validation::{not_blank, MAX_TEXT_LEN};

/// A persisted dog record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dog {
    pub id: DbId,
    pub name: String,
    pub breed: String,
    pub age: i32,
    pub weight: f64,
}

impl Dog {
    /// Attach a store-assigned identity to validated fields.
    pub fn with_id(id: DbId, fields: NewDog) -> Self {
        Self {
            id,
            name: fields.name,
            breed: fields.breed,
            age: fields.age,
            weight: fields.weight,
        }
    }
}

/// The four mutable fields of a dog, checked against the structural limits.
///
/// Only [`crate::validation::validate_dog`] and the seeder construct these in
/// normal operation, so a `NewDog` reaching a store is already valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewDog {
    #[validate(
        custom(function = "not_blank"),
        length(max = MAX_TEXT_LEN, message = "size must be between 0 and 100")
    )]
    pub name: String,
    #[validate(
        custom(function = "not_blank"),
        length(max = MAX_TEXT_LEN, message = "size must be between 0 and 100")
    )]
    pub breed: String,
    #[validate(range(min = 0, message = "must be greater than or equal to 0"))]
    pub age: i32,
    #[validate(range(exclusive_min = 0.0, message = "must be greater than 0"))]
    pub weight: f64,
}

/// Raw create/update body.
///
/// Every field is optional and untyped so that missing or mistyped values
/// surface as field violations instead of a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DogPayload {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub breed: Option<Value>,
    #[serde(default)]
    pub age: Option<Value>,
    #[serde(default)]
    pub weight: Option<Value>,
}

impl DogPayload {
    pub fn new(name: &str, breed: &str, age: i64, weight: f64) -> Self {
        Self {
            name: Some(Value::from(name)),
            breed: Some(Value::from(breed)),
            age: Some(Value::from(age)),
            weight: Some(Value::from(weight)),
        }
    }
}
