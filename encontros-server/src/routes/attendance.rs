//! Attendance (RSVP) endpoints

use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use chrono::Utc;
use serde::Deserialize;

use encontros_core::{Attendance, NewAttendance};

use crate::error::{ServerError, ServerResult};
use crate::routes::events::CreatedResponse;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/events/{id}/attendances", get(list_for_event).post(confirm))
}

#[derive(Deserialize)]
pub struct ConfirmRequest {
    pub name: String,
}

/// POST /events/:id/attendances - confirm attendance (public)
///
/// The referenced event's existence is not checked; the store keeps no
/// relation between collections.
async fn confirm(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<ConfirmRequest>,
) -> ServerResult<Json<CreatedResponse>> {
    let name = req.name.trim();
    if name.is_empty() {
        return Err(ServerError::Validation(
            "missing required field: name".to_string(),
        ));
    }

    let id = state.store.add_attendance(&NewAttendance {
        event_id: id,
        name: name.to_string(),
        confirmed_at: Utc::now(),
    })?;

    Ok(Json(CreatedResponse { id }))
}

/// GET /events/:id/attendances - list who confirmed (admin)
async fn list_for_event(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ServerResult<Json<Vec<Attendance>>> {
    state.require_admin()?;

    Ok(Json(state.store.attendances_for_event(id)?))
}
