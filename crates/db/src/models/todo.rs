//! Todo model and request DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use todo_core::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Entity struct (database row)
// ---------------------------------------------------------------------------

/// A row from the `todos` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Todo {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub deadline: Option<Timestamp>,
    pub completed: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// DTO for creating a new todo.
///
/// The title must already be trimmed and length-validated by the
/// caller (`todo_core::todo::validate_title`).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTodo {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub deadline: Option<Timestamp>,
}

/// DTO for partially updating a todo. Every field is optional.
///
/// `description` and `deadline` are nullable columns, so they use
/// `Option<Option<_>>` to distinguish "field omitted" (outer `None`,
/// keep the stored value) from "field explicitly null" (inner `None`,
/// clear the stored value).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTodo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<Option<String>>,
    #[serde(default)]
    pub deadline: Option<Option<Timestamp>>,
    #[serde(default)]
    pub completed: Option<bool>,
}
