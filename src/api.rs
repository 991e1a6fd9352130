//! HTTP API endpoints.
//!
//! Session status for the UI and the persisted theme preference.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::state::{AppState, SessionView};
use crate::theme::{Theme, ThemeError, ThemePreference};

/// Dataset health as reported to the UI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetStatus {
    pub degraded: bool,
    pub reason: Option<String>,
    pub words: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusResponse {
    pub view: SessionView,
    pub dataset: DatasetStatus,
    pub server_now: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ThemeUpdate {
    pub theme: String,
}

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/status", get(get_status))
        .route("/api/theme", get(get_theme).put(put_theme))
        .route("/api/theme/toggle", post(toggle_theme))
}

/// Current view plus dataset health.
///
/// GET /api/status
pub async fn get_status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let session = state.session.read().await;
    let words = session.words();

    Json(StatusResponse {
        view: session.view(),
        dataset: DatasetStatus {
            degraded: words.is_degraded(),
            reason: words.degraded_reason().map(str::to_string),
            words: words.len(),
        },
        server_now: chrono::Utc::now().to_rfc3339(),
    })
}

/// GET /api/theme
pub async fn get_theme(State(state): State<Arc<AppState>>) -> Json<ThemePreference> {
    Json(ThemePreference {
        theme: state.theme.read().await.get(),
    })
}

/// PUT /api/theme
pub async fn put_theme(
    State(state): State<Arc<AppState>>,
    Json(update): Json<ThemeUpdate>,
) -> Response {
    let theme = match update.theme.parse::<Theme>() {
        Ok(theme) => theme,
        Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    };

    match state.theme.write().await.set(theme).await {
        Ok(()) => Json(ThemePreference { theme }).into_response(),
        Err(e) => theme_failure(e),
    }
}

/// POST /api/theme/toggle
pub async fn toggle_theme(State(state): State<Arc<AppState>>) -> Response {
    match state.theme.write().await.toggle().await {
        Ok(theme) => Json(ThemePreference { theme }).into_response(),
        Err(e) => theme_failure(e),
    }
}

fn theme_failure(e: ThemeError) -> Response {
    tracing::error!("Theme update failed: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("Theme update failed: {}", e),
    )
        .into_response()
}
