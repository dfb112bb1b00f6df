use super::dto::MovieListQuery;
use super::model::{Movie, MovieView};
use super::service::MovieService;
use crate::common::response::{ApiError, ApiResponse, ApiSuccess};
use crate::common::upload::read_movie_form;
use crate::state::AppState;
use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};

/// List movies, highest rated first
#[utoipa::path(
    get,
    path = "/api/v1/movies",
    params(MovieListQuery),
    responses(
        (status = 200, description = "List Movies", body = ApiResponse<Vec<MovieView>>),
        (status = 500, description = "Internal Server Error")
    ),
    tag = "Movies"
)]
pub async fn list_movies(
    State(state): State<AppState>,
    Query(query): Query<MovieListQuery>,
) -> impl IntoResponse {
    match MovieService::list(&state, query.genre).await {
        Ok(res) => ApiSuccess(ApiResponse::success(res, "Movies retrieved successfully"), StatusCode::OK).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/v1/movies/{id}",
    params(
        ("id" = i32, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Get Movie", body = ApiResponse<MovieView>),
        (status = 404, description = "Movie Not Found"),
        (status = 500, description = "Internal Server Error")
    ),
    tag = "Movies"
)]
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match MovieService::get(&state, id).await {
        Ok(res) => ApiSuccess(ApiResponse::success(res, "Movie retrieved successfully"), StatusCode::OK).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Create a movie
///
/// Form fields: `title`, `story_line`, `year`, `rate`, `genre_id` and the
/// `poster` file (.jpg or .png, at most 1 MiB by default).
#[utoipa::path(
    post,
    path = "/api/v1/movies",
    request_body(content = String, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Movie Created", body = ApiResponse<Movie>),
        (status = 400, description = "Invalid submission"),
        (status = 500, description = "Internal Server Error")
    ),
    tag = "Movies"
)]
pub async fn create_movie(
    State(state): State<AppState>,
    multipart: Multipart,
) -> impl IntoResponse {
    let input = match read_movie_form(multipart).await {
        Ok(input) => input,
        Err(e) => return ApiError::from(e).into_response(),
    };

    match MovieService::create(&state, input).await {
        Ok(res) => ApiSuccess(ApiResponse::success(res, "Movie created successfully"), StatusCode::CREATED).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

/// Replace a movie
///
/// Same form as create; every field is required except `poster`, which is
/// kept unchanged when omitted.
#[utoipa::path(
    put,
    path = "/api/v1/movies/{id}",
    params(("id" = i32, Path, description = "Movie ID")),
    request_body(content = String, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Movie Updated", body = ApiResponse<Movie>),
        (status = 400, description = "Invalid submission"),
        (status = 404, description = "Not Found")
    ),
    tag = "Movies"
)]
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    multipart: Multipart,
) -> impl IntoResponse {
    let input = match read_movie_form(multipart).await {
        Ok(input) => input,
        Err(e) => return ApiError::from(e).into_response(),
    };

    match MovieService::update(&state, id, input).await {
        Ok(res) => ApiSuccess(ApiResponse::success(res, "Movie updated"), StatusCode::OK).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/api/v1/movies/{id}",
    params(("id" = i32, Path, description = "Movie ID")),
    responses(
        (status = 200, description = "Movie Deleted", body = ApiResponse<Movie>),
        (status = 404, description = "Not Found")
    ),
    tag = "Movies"
)]
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match MovieService::delete(&state, id).await {
        Ok(res) => ApiSuccess(ApiResponse::success(res, "Movie deleted"), StatusCode::OK).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}
