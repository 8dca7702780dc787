//! Repository for the `todos` table.
//!
//! Provides todo CRUD plus the sorted, paginated list query. Sort and
//! pagination parameters arrive pre-validated as a
//! [`todo_core::todo::ListQuery`], so this module only turns them into
//! SQL.

use chrono::Utc;
use todo_core::todo::{ListQuery, SortBy};
use todo_core::types::DbId;

use crate::models::todo::{CreateTodo, Todo, UpdateTodo};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, deadline, completed, created_at, updated_at";

/// Provides CRUD operations for todos.
pub struct TodoRepo;

impl TodoRepo {
    /// Insert a new todo, returning the created row.
    ///
    /// `created_at` and `updated_at` are set to the same instant and
    /// `completed` starts false.
    pub async fn create(pool: &DbPool, input: &CreateTodo) -> Result<Todo, sqlx::Error> {
        let now = Utc::now().naive_utc();
        let query = format!(
            "INSERT INTO todos (title, description, deadline, completed, created_at, updated_at)
             VALUES (?, ?, ?, 0, ?, ?)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.deadline)
            .bind(now)
            .bind(now)
            .fetch_one(pool)
            .await
    }

    /// Find a todo by its ID.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM todos WHERE id = ?");
        sqlx::query_as::<_, Todo>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List todos sorted and paginated per `query`.
    ///
    /// Under the default deadline sort, rows without a deadline group
    /// separately from rows with one: the `deadline IS NULL` flag is
    /// itself sorted in the requested direction, so ascending puts
    /// null-deadline rows last and descending puts them first.
    pub async fn list(pool: &DbPool, query: &ListQuery) -> Result<Vec<Todo>, sqlx::Error> {
        let dir = query.order.as_sql();
        let order_by = match query.sort_by {
            SortBy::CreatedAt => format!("created_at {dir}, id {dir}"),
            SortBy::Title => format!("lower(title) {dir}, id {dir}"),
            SortBy::Deadline => format!("(deadline IS NULL) {dir}, deadline {dir}, id {dir}"),
        };
        let sql = format!("SELECT {COLUMNS} FROM todos ORDER BY {order_by} LIMIT ? OFFSET ?");
        sqlx::query_as::<_, Todo>(&sql)
            .bind(query.limit)
            .bind(query.offset)
            .fetch_all(pool)
            .await
    }

    /// Partially update a todo. Returns `None` if no row has `id`.
    ///
    /// `title` and `completed` use `COALESCE` so they only change when
    /// provided. The nullable columns use a provided-flag plus `CASE`
    /// so an explicit null clears the stored value while an omitted
    /// field leaves it untouched. `updated_at` is always refreshed
    /// when the row exists, whether or not any value changed.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &UpdateTodo,
    ) -> Result<Option<Todo>, sqlx::Error> {
        let now = Utc::now().naive_utc();

        let description_provided = input.description.is_some();
        let description_value = input.description.as_ref().and_then(|v| v.as_deref());
        let deadline_provided = input.deadline.is_some();
        let deadline_value = input.deadline.flatten();

        let query = format!(
            "UPDATE todos SET
                title       = COALESCE(?, title),
                description = CASE WHEN ? THEN ? ELSE description END,
                deadline    = CASE WHEN ? THEN ? ELSE deadline END,
                completed   = COALESCE(?, completed),
                updated_at  = ?
             WHERE id = ?
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Todo>(&query)
            .bind(&input.title)
            .bind(description_provided)
            .bind(description_value)
            .bind(deadline_provided)
            .bind(deadline_value)
            .bind(input.completed)
            .bind(now)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a todo by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &DbPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos WHERE id = ?")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
