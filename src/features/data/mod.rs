use crate::domain::{Education, Experience, Photo, PortfolioData, Project};
use crate::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

pub fn data_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_data_handler))
        .route("/projects/{id}", get(get_project_handler))
        .route("/photos/{id}", get(get_photo_handler))
        .route("/experiences", get(list_experiences_handler))
        .route("/education", get(list_education_handler))
}

// the whole validated document; sections that failed to load come back empty
async fn get_data_handler(State(state): State<AppState>) -> Json<PortfolioData> {
    Json(state.portfolio.load().await)
}

async fn get_project_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Project>, StatusCode> {
    match state.portfolio.get_project_by_id(id).await {
        Some(project) => Ok(Json(project)),
        None => Err(StatusCode::NOT_FOUND),
    }
}

async fn get_photo_handler(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Photo>, StatusCode> {
    match state.portfolio.get_photo_by_id(id).await {
        Some(photo) => Ok(Json(photo)),
        None => Err(StatusCode::NOT_FOUND),
    }
}

async fn list_experiences_handler(State(state): State<AppState>) -> Json<Vec<Experience>> {
    Json(state.portfolio.experiences_sorted().await)
}

async fn list_education_handler(State(state): State<AppState>) -> Json<Vec<Education>> {
    Json(state.portfolio.education_sorted().await)
}
