//! Route definitions for the `/dogs` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::dog;
use crate::state::AppState;

/// Routes mounted at `/dogs`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(dog::list).post(dog::create))
        .route(
            "/{id}",
            get(dog::get_by_id).put(dog::update).delete(dog::delete),
        )
}
