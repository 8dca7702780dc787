//! Query parameter types for API handlers.

use serde::Deserialize;

/// Raw query parameters for `GET /todos` (`?sort_by=&order=&limit=&offset=`).
///
/// Values are validated into a `todo_core::todo::ListQuery` in the
/// handler; unknown sort fields and out-of-range windows are rejected
/// before any SQL runs.
#[derive(Debug, Deserialize)]
pub struct ListTodosParams {
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
