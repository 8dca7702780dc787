pub mod health;
pub mod todos;

use axum::Router;

use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// GET    /health        -> health check
/// GET    /todos         -> list (sorted, paginated)
/// POST   /todos         -> create
/// GET    /todos/{id}    -> get by id
/// PUT    /todos/{id}    -> partial update
/// DELETE /todos/{id}    -> delete
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(todos::router())
}
