//! CSV report download and dashboard stats

use axum::{
    Json, Router,
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    routing::get,
};
use chrono::Local;
use serde::Serialize;

use encontros_core::report;

use crate::error::ServerResult;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/report.csv", get(download_report))
        .route("/stats", get(stats))
}

/// GET /report.csv - attendance report download (admin)
async fn download_report(State(state): State<AppState>) -> ServerResult<Response> {
    state.require_admin()?;

    let events = state.store.events()?;
    let attendances = state.store.attendances()?;

    let csv = report::attendance_report(&events, &attendances);
    let filename = report::report_filename(Local::now().date_naive());

    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{filename}\""),
        ),
    ];

    Ok((headers, csv).into_response())
}

#[derive(Serialize)]
pub struct Stats {
    pub events: usize,
    pub attendances: usize,
    /// Events dated today or later
    pub upcoming: usize,
}

/// GET /stats - dashboard counters (admin)
async fn stats(State(state): State<AppState>) -> ServerResult<Json<Stats>> {
    state.require_admin()?;

    let events = state.store.events()?;
    let attendances = state.store.attendances()?;

    let today = Local::now().date_naive();
    let upcoming = events.iter().filter(|e| e.date >= today).count();

    Ok(Json(Stats {
        events: events.len(),
        attendances: attendances.len(),
        upcoming,
    }))
}
