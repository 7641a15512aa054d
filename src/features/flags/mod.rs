use crate::AppState;
use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Serialize)]
pub struct FlagResponse {
    pub key: String,
    pub enabled: bool,
}

pub fn flags_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_cached_flags_handler))
        .route("/{key}", get(evaluate_flag_handler))
}

// always answers; provider trouble degrades to the key's default
async fn evaluate_flag_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Json<FlagResponse> {
    let enabled = state.flags.evaluate_flag(&key).await;
    Json(FlagResponse { key, enabled })
}

// debugging surface: what the cache currently holds
async fn list_cached_flags_handler(State(state): State<AppState>) -> Json<HashMap<String, bool>> {
    Json(state.flags.cached_flags().await)
}
