//! Event endpoints

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use encontros_core::{Event, NewEvent, share};

use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/events", get(list_events).post(create_event))
        .route(
            "/events/{id}",
            get(get_event).put(update_event).delete(delete_event),
        )
        .route("/events/{id}/calendar-link", get(calendar_link))
}

#[derive(Deserialize)]
pub struct ListQuery {
    /// Restrict to events on this day (YYYY-MM-DD)
    date: Option<NaiveDate>,
}

/// Id of a freshly created record
#[derive(Serialize)]
pub struct CreatedResponse {
    pub id: u64,
}

/// GET /events[?date=YYYY-MM-DD] - list events, optionally for one day
async fn list_events(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> ServerResult<Json<Vec<Event>>> {
    let events = match query.date {
        Some(date) => state.store.events_on(date)?,
        None => state.store.events()?,
    };

    Ok(Json(events))
}

/// GET /events/:id - fetch one event
async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ServerResult<Json<Event>> {
    let event = state
        .store
        .event(id)?
        .ok_or_else(|| ServerError::NotFound(format!("event {id}")))?;

    Ok(Json(event))
}

/// POST /events - create an event (admin)
async fn create_event(
    State(state): State<AppState>,
    Json(req): Json<NewEvent>,
) -> ServerResult<Json<CreatedResponse>> {
    state.require_admin()?;

    if let Some(field) = req.missing_field() {
        return Err(ServerError::Validation(format!(
            "missing required field: {field}"
        )));
    }

    let id = state.store.add_event(&req)?;
    Ok(Json(CreatedResponse { id }))
}

/// PUT /events/:id - overwrite an event's fields (admin)
async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<u64>,
    Json(req): Json<NewEvent>,
) -> ServerResult<Json<Event>> {
    state.require_admin()?;

    if let Some(field) = req.missing_field() {
        return Err(ServerError::Validation(format!(
            "missing required field: {field}"
        )));
    }

    if state.store.event(id)?.is_none() {
        return Err(ServerError::NotFound(format!("event {id}")));
    }

    let event = Event {
        id,
        title: req.title,
        date: req.date,
        venue: req.venue,
        description: req.description,
    };
    state.store.update_event(&event)?;

    Ok(Json(event))
}

/// DELETE /events/:id - remove an event (admin)
async fn delete_event(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ServerResult<StatusCode> {
    state.require_admin()?;

    state.store.delete_event(id)?;
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Serialize)]
pub struct CalendarLink {
    pub url: String,
}

/// GET /events/:id/calendar-link - provider "add event" deep link
async fn calendar_link(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> ServerResult<Json<CalendarLink>> {
    let event = state
        .store
        .event(id)?
        .ok_or_else(|| ServerError::NotFound(format!("event {id}")))?;

    Ok(Json(CalendarLink {
        url: share::google_calendar_url(&event),
    }))
}
