//! Login/logout endpoints for the single admin session

use axum::{
    Json, Router,
    extract::State,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/auth/session", get(session))
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct SessionResponse {
    pub logged_in: bool,
}

/// POST /auth/login - check the credential and mark the session
async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ServerResult<Json<SessionResponse>> {
    if !state.store.validate_user(&req.username, &req.password)? {
        return Err(ServerError::InvalidCredentials);
    }

    state.log_in();
    Ok(Json(SessionResponse { logged_in: true }))
}

/// POST /auth/logout - clear the session flag
async fn logout(State(state): State<AppState>) -> Json<SessionResponse> {
    state.log_out();
    Json(SessionResponse { logged_in: false })
}

/// GET /auth/session - current session state
async fn session(State(state): State<AppState>) -> Json<SessionResponse> {
    Json(SessionResponse {
        logged_in: state.is_admin(),
    })
}
