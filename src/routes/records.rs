//! Trajectory record endpoints.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde::Deserialize;
use trajectories::Trajectory;

use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub session_id: Option<i64>,
}

/// `GET /api/trajectories`: all records, or one session's with `?session_id=N`.
pub async fn list_trajectories(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<Trajectory>> {
    let records = match query.session_id {
        Some(session_id) => state.store.for_session(session_id),
        None => state.store.all().to_vec(),
    };
    Json(records)
}

/// `GET /api/trajectories/:id`: fetch one record.
pub async fn get_trajectory(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Trajectory>, StatusCode> {
    state
        .store
        .get(id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

#[cfg(test)]
#[path = "records_test.rs"]
mod tests;
