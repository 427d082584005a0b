//! Domain layer for the dogs service.
//!
//! Holds the record types, payload validation, the [`store::DogStore`]
//! persistence seam, the CRUD service and the startup seeder. Nothing in
//! here knows about HTTP or SQL.

pub mod breeds;
pub mod dog;
pub mod error;
pub mod seeder;
pub mod service;
pub mod store;
pub mod types;
pub mod validation;
