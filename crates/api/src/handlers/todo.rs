//! Handlers for the `/todos` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use todo_core::error::CoreError;
use todo_core::todo::{validate_title, ListQuery};
use todo_core::types::DbId;
use todo_db::models::todo::{CreateTodo, Todo, UpdateTodo};
use todo_db::repositories::TodoRepo;

use crate::error::{AppError, AppResult};
use crate::query::ListTodosParams;
use crate::state::AppState;

/// POST /todos
pub async fn create(
    State(state): State<AppState>,
    Json(mut input): Json<CreateTodo>,
) -> AppResult<(StatusCode, Json<Todo>)> {
    input.title = validate_title(&input.title)?;
    let todo = TodoRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

/// GET /todos
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListTodosParams>,
) -> AppResult<Json<Vec<Todo>>> {
    let query = ListQuery::from_parts(
        params.sort_by.as_deref(),
        params.order.as_deref(),
        params.limit,
        params.offset,
    )?;
    let todos = TodoRepo::list(&state.pool, &query).await?;
    Ok(Json(todos))
}

/// GET /todos/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Todo>> {
    let todo = TodoRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Todo", id }))?;
    Ok(Json(todo))
}

/// PUT /todos/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateTodo>,
) -> AppResult<Json<Todo>> {
    if let Some(raw) = input.title.take() {
        input.title = Some(validate_title(&raw)?);
    }
    let todo = TodoRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Todo", id }))?;
    Ok(Json(todo))
}

/// DELETE /todos/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = TodoRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Todo", id }))
    }
}
