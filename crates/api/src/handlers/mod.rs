//! Axum request handlers, one module per resource.

pub mod dog;
