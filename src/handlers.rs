use crate::errors::AppError;
use crate::models::{
    fallback_leaderboard, fallback_user, DataSources, HealthResponse, ReloadResponse,
};
use crate::state::AppState;
use crate::storage::{load_resource, LEADERBOARD_RESOURCE, USER_RESOURCE};
use crate::ui;
use axum::{
    extract::State,
    response::{Html, IntoResponse, Response},
    Json,
};
use chrono::{SecondsFormat, Utc};
use tracing::info;

pub async fn index() -> Html<&'static str> {
    Html(ui::INDEX_HTML)
}

pub async fn get_user(State(state): State<AppState>) -> Response {
    let slots = state.slots.lock().await;
    match &slots.user {
        Some(value) => Json(value.clone()).into_response(),
        None => Json(fallback_user()).into_response(),
    }
}

pub async fn get_leaderboard(State(state): State<AppState>) -> Response {
    let slots = state.slots.lock().await;
    match &slots.leaderboard {
        Some(value) => Json(value.clone()).into_response(),
        None => Json(fallback_leaderboard()).into_response(),
    }
}

/// Best-effort refresh: a resource that fails to load leaves its slot as it
/// was, whether that slot held fallback or previously loaded content.
pub async fn reload_data(
    State(state): State<AppState>,
) -> Result<Json<ReloadResponse>, AppError> {
    let user = load_resource(&state.data_dir, USER_RESOURCE).await;
    let leaderboard = load_resource(&state.data_dir, LEADERBOARD_RESOURCE).await;

    let user_loaded = user.is_some();
    let leaderboard_loaded = leaderboard.is_some();

    let mut slots = state.slots.lock().await;
    if let Some(value) = user {
        slots.user = Some(value);
    }
    if let Some(value) = leaderboard {
        slots.leaderboard = Some(value);
    }
    drop(slots);

    info!("reload: user={user_loaded} leaderboard={leaderboard_loaded}");

    Ok(Json(ReloadResponse {
        success: true,
        message: "Data reloaded successfully".to_string(),
        user_loaded,
        leaderboard_loaded,
    }))
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    let slots = state.slots.lock().await;
    Json(HealthResponse {
        status: "OK".to_string(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        data_sources: DataSources {
            user: slots.user.is_some(),
            leaderboard: slots.leaderboard.is_some(),
        },
    })
}
