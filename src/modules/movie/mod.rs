use crate::state::AppState;
use axum::routing::get;
use axum::Router;

pub mod dto;
pub mod handler;
pub mod model;
pub mod poster;
pub mod record;
pub mod repository;
pub mod service;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(handler::list_movies).post(handler::create_movie))
        .route(
            "/{id}",
            get(handler::get_movie)
                .put(handler::update_movie)
                .delete(handler::delete_movie),
        )
}
