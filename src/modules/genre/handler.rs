use super::dto::{GenreRequest, GenreResponse};
use super::service::GenreService;
use crate::common::response::{ApiError, ApiResponse, ApiSuccess};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

/// Genres movies can be filed under, alphabetically
#[utoipa::path(
    get,
    path = "/api/v1/genres",
    responses(
        (status = 200, description = "Genres by name", body = ApiResponse<Vec<GenreResponse>>),
        (status = 500, description = "Catalog storage unavailable")
    ),
    tag = "Genres"
)]
pub async fn list_genres(State(state): State<AppState>) -> impl IntoResponse {
    match GenreService::find_all(&state).await {
        Ok(genres) => ApiSuccess(ApiResponse::success(genres, "Genres retrieved"), StatusCode::OK).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Add a genre
///
/// The name is trimmed and must not be blank.
#[utoipa::path(
    post,
    path = "/api/v1/genres",
    request_body = GenreRequest,
    responses(
        (status = 201, description = "Genre added", body = ApiResponse<GenreResponse>),
        (status = 400, description = "Blank genre name")
    ),
    tag = "Genres"
)]
pub async fn create_genre(
    State(state): State<AppState>,
    Json(payload): Json<GenreRequest>,
) -> impl IntoResponse {
    match GenreService::create(&state, payload).await {
        Ok(genre) => ApiSuccess(ApiResponse::success(genre, "Genre added"), StatusCode::CREATED).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/genres/{id}",
    params(("id" = i32, Path, description = "Genre id")),
    responses(
        (status = 200, description = "The genre", body = ApiResponse<GenreResponse>),
        (status = 404, description = "No genre with this id")
    ),
    tag = "Genres"
)]
pub async fn get_genre(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match GenreService::find_by_id(&state, id).await {
        Ok(genre) => ApiSuccess(ApiResponse::success(genre, "Genre retrieved"), StatusCode::OK).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Rename a genre; movies filed under it follow the new name
#[utoipa::path(
    put,
    path = "/api/v1/genres/{id}",
    params(("id" = i32, Path, description = "Genre id")),
    request_body = GenreRequest,
    responses(
        (status = 200, description = "Genre renamed", body = ApiResponse<GenreResponse>),
        (status = 400, description = "Blank genre name"),
        (status = 404, description = "No genre with this id")
    ),
    tag = "Genres"
)]
pub async fn update_genre(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<GenreRequest>,
) -> impl IntoResponse {
    match GenreService::update(&state, id, payload).await {
        Ok(genre) => ApiSuccess(ApiResponse::success(genre, "Genre renamed"), StatusCode::OK).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Remove a genre
///
/// Movies still filed under it keep their `genre_id` and are listed with
/// no genre name.
#[utoipa::path(
    delete,
    path = "/api/v1/genres/{id}",
    params(("id" = i32, Path, description = "Genre id")),
    responses(
        (status = 200, description = "Genre removed"),
        (status = 404, description = "No genre with this id")
    ),
    tag = "Genres"
)]
pub async fn delete_genre(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match GenreService::delete(&state, id).await {
        Ok(()) => ApiSuccess(ApiResponse::success((), "Genre removed"), StatusCode::OK).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}
