//! Dog payload validation.
//!
//! Presence and type coercion are checked by hand; length and range limits
//! come from the `validator` derive on [`NewDog`]. Every field is checked
//! independently and the first failing rule per field is reported.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::Value;
use validator::{Validate, ValidationError};

use crate::dog::{DogPayload, NewDog};

/// Maximum length in characters of `name` and `breed`.
pub const MAX_TEXT_LEN: u64 = 100;

const MSG_NULL: &str = "must not be null";
const MSG_NOT_TEXT: &str = "must be a string";
const MSG_NOT_INTEGER: &str = "must be an integer";
const MSG_NOT_NUMBER: &str = "must be a number";
const MSG_INVALID: &str = "invalid";

/// Field name to human-readable violation message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation unless the field already has one.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}

/// Rejects strings that are empty after trimming.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("not_blank");
        err.message = Some(Cow::Borrowed("must not be blank"));
        return Err(err);
    }
    Ok(())
}

/// Validate a raw payload into a [`NewDog`], collecting every violation.
pub fn validate_dog(payload: &DogPayload) -> Result<NewDog, FieldErrors> {
    let mut errors = FieldErrors::new();

    let name = coerce_text(payload.name.as_ref(), "name", &mut errors);
    let breed = coerce_text(payload.breed.as_ref(), "breed", &mut errors);
    let age = coerce_integer(payload.age.as_ref(), "age", &mut errors);
    let weight = coerce_number(payload.weight.as_ref(), "weight", &mut errors);

    // Placeholders only stand in for fields that already carry an error, and
    // `FieldErrors::add` keeps the first message per field.
    let candidate = NewDog {
        name: name.unwrap_or_default(),
        breed: breed.unwrap_or_default(),
        age: age.unwrap_or_default(),
        weight: weight.unwrap_or(1.0),
    };

    if let Err(violations) = candidate.validate() {
        for (field, list) in violations.field_errors() {
            if let Some(first) = list.first() {
                let message = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| MSG_INVALID.to_string());
                errors.add(field.to_string(), message);
            }
        }
    }

    if errors.is_empty() {
        Ok(candidate)
    } else {
        Err(errors)
    }
}

fn coerce_text(value: Option<&Value>, field: &str, errors: &mut FieldErrors) -> Option<String> {
    match value {
        None | Some(Value::Null) => {
            errors.add(field, MSG_NULL);
            None
        }
        Some(Value::String(s)) => Some(s.clone()),
        Some(_) => {
            errors.add(field, MSG_NOT_TEXT);
            None
        }
    }
}

fn coerce_integer(value: Option<&Value>, field: &str, errors: &mut FieldErrors) -> Option<i32> {
    let parsed = match value {
        None | Some(Value::Null) => {
            errors.add(field, MSG_NULL);
            return None;
        }
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        Some(_) => None,
    };

    match parsed.and_then(|v| i32::try_from(v).ok()) {
        Some(v) => Some(v),
        None => {
            errors.add(field, MSG_NOT_INTEGER);
            None
        }
    }
}

fn coerce_number(value: Option<&Value>, field: &str, errors: &mut FieldErrors) -> Option<f64> {
    let parsed = match value {
        None | Some(Value::Null) => {
            errors.add(field, MSG_NULL);
            return None;
        }
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        Some(_) => None,
    };

    match parsed.filter(|v| v.is_finite()) {
        Some(v) => Some(v),
        None => {
            errors.add(field, MSG_NOT_NUMBER);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn payload(value: serde_json::Value) -> DogPayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn valid_payload_passes() {
        let dog = validate_dog(&DogPayload::new("Rex", "Labrador", 3, 25.5)).unwrap();
        assert_eq!(dog.name, "Rex");
        assert_eq!(dog.breed, "Labrador");
        assert_eq!(dog.age, 3);
        assert_eq!(dog.weight, 25.5);
    }

    #[test]
    fn missing_fields_are_all_reported() {
        let errors = validate_dog(&payload(json!({"name": "Rex", "breed": "Labrador"}))).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get("age"), Some("must not be null"));
        assert_eq!(errors.get("weight"), Some("must not be null"));
    }

    #[test]
    fn empty_body_reports_every_field() {
        let errors = validate_dog(&DogPayload::default()).unwrap_err();
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn blank_name_rejected() {
        let errors = validate_dog(&DogPayload::new("   ", "Labrador", 3, 25.5)).unwrap_err();
        assert_eq!(errors.get("name"), Some("must not be blank"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn invalid_values_collected_together() {
        let errors = validate_dog(&payload(
            json!({"name": "", "breed": "Labrador", "age": -1, "weight": 0}),
        ))
        .unwrap_err();
        assert_eq!(errors.get("name"), Some("must not be blank"));
        assert_eq!(errors.get("age"), Some("must be greater than or equal to 0"));
        assert_eq!(errors.get("weight"), Some("must be greater than 0"));
        assert!(!errors.contains("breed"));
    }

    #[test]
    fn name_length_limit() {
        let at_limit = "a".repeat(100);
        assert!(validate_dog(&DogPayload::new(&at_limit, "Labrador", 3, 25.5)).is_ok());

        let over = "a".repeat(101);
        let errors = validate_dog(&DogPayload::new(&over, "Labrador", 3, 25.5)).unwrap_err();
        assert_eq!(errors.get("name"), Some("size must be between 0 and 100"));
    }

    #[test]
    fn breed_length_limit() {
        let over = "b".repeat(101);
        let errors = validate_dog(&DogPayload::new("Rex", &over, 3, 25.5)).unwrap_err();
        assert!(errors.contains("breed"));
    }

    #[test]
    fn zero_age_is_allowed() {
        assert!(validate_dog(&DogPayload::new("Pup", "Pug", 0, 1.2)).is_ok());
    }

    #[test]
    fn numeric_strings_are_parsed() {
        let dog = validate_dog(&payload(
            json!({"name": "Rex", "breed": "Pug", "age": "4", "weight": "7.5"}),
        ))
        .unwrap();
        assert_eq!(dog.age, 4);
        assert_eq!(dog.weight, 7.5);
    }

    #[test]
    fn fractional_age_is_not_an_integer() {
        let errors = validate_dog(&payload(
            json!({"name": "Rex", "breed": "Pug", "age": 2.5, "weight": 7.0}),
        ))
        .unwrap_err();
        assert_eq!(errors.get("age"), Some("must be an integer"));
    }

    #[test]
    fn non_numeric_weight_rejected() {
        let errors = validate_dog(&payload(
            json!({"name": "Rex", "breed": "Pug", "age": 2, "weight": "heavy"}),
        ))
        .unwrap_err();
        assert_eq!(errors.get("weight"), Some("must be a number"));
    }

    #[test]
    fn nan_weight_rejected() {
        let errors = validate_dog(&payload(
            json!({"name": "Rex", "breed": "Pug", "age": 2, "weight": "NaN"}),
        ))
        .unwrap_err();
        assert_eq!(errors.get("weight"), Some("must be a number"));
    }

    #[test]
    fn wrong_type_for_name() {
        let errors = validate_dog(&payload(
            json!({"name": 12, "breed": "Pug", "age": 2, "weight": 7.0}),
        ))
        .unwrap_err();
        assert_eq!(errors.get("name"), Some("must be a string"));
    }

    #[test]
    fn validation_is_deterministic() {
        let p = payload(json!({"name": "", "breed": "", "age": -1, "weight": 0}));
        assert_eq!(validate_dog(&p).unwrap_err(), validate_dog(&p).unwrap_err());
    }

    #[test]
    fn display_lists_fields_in_order() {
        let mut errors = FieldErrors::new();
        errors.add("weight", "must be greater than 0");
        errors.add("age", "must not be null");
        errors.add("age", "ignored");
        assert_eq!(
            errors.to_string(),
            "age: must not be null; weight: must be greater than 0"
        );
    }
}
