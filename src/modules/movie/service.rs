use super::dto::MovieInput;
use super::model::{Movie, MovieView};
use super::record;
use crate::common::error::{AppError, AppResult};
use crate::modules::genre::service::GenreService;
use crate::state::AppState;
use tracing::{info, warn};
use validator::Validate;

/// Whether a submission must carry a poster.
#[derive(Debug, Clone, Copy, PartialEq)]
enum PosterRule {
    Required,
    Optional,
}

pub struct MovieService;

impl MovieService {
    pub async fn list(state: &AppState, genre_id: Option<i32>) -> AppResult<Vec<MovieView>> {
        Ok(state.movies.find_all(genre_id).await?)
    }

    pub async fn get(state: &AppState, id: i32) -> AppResult<MovieView> {
        state
            .movies
            .find_view_by_id(id)
            .await?
            .ok_or_else(|| AppError::movie_not_found(id))
    }

    pub async fn create(state: &AppState, input: MovieInput) -> AppResult<Movie> {
        Self::check_submission(state, &input, PosterRule::Required).await?;

        let MovieInput { fields, poster } = input;
        let poster = poster.ok_or(AppError::PosterRequired)?;
        let movie = state
            .movies
            .add(record::build_movie(fields, poster.bytes))
            .await?;

        info!(movie_id = movie.id, "Movie created");
        Ok(movie)
    }

    pub async fn update(state: &AppState, id: i32, input: MovieInput) -> AppResult<Movie> {
        let existing = state
            .movies
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::movie_not_found(id))?;

        Self::check_submission(state, &input, PosterRule::Optional).await?;

        let MovieInput { fields, poster } = input;
        let poster_replaced = poster.is_some();
        let movie = record::merge_update(existing, fields, poster.map(|p| p.bytes));
        state.movies.update(&movie).await?;

        info!(movie_id = movie.id, poster_replaced, "Movie updated");
        Ok(movie)
    }

    pub async fn delete(state: &AppState, id: i32) -> AppResult<Movie> {
        let movie = state
            .movies
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::movie_not_found(id))?;

        state.movies.delete(&movie).await?;

        info!(movie_id = movie.id, "Movie deleted");
        Ok(movie)
    }

    /// Runs every check a submission must pass before anything is written:
    /// form fields, poster presence, extension, size, then genre existence.
    /// Stops at the first failure.
    async fn check_submission(state: &AppState, input: &MovieInput, rule: PosterRule) -> AppResult<()> {
        let result = Self::run_checks(state, input, rule).await;
        if let Err(e) = &result {
            if !matches!(e, AppError::Storage(_)) {
                warn!(kind = e.kind(), error = %e, "Movie submission rejected");
            }
        }
        result
    }

    async fn run_checks(state: &AppState, input: &MovieInput, rule: PosterRule) -> AppResult<()> {
        input.validate()?;

        match (&input.poster, rule) {
            (None, PosterRule::Required) => return Err(AppError::PosterRequired),
            (None, PosterRule::Optional) => {}
            (Some(poster), _) => state.posters.validate(&poster.file_name, poster.bytes.len())?,
        }

        let genre_id = input.fields.genre_id;
        if !GenreService::is_valid_genre(state, genre_id).await? {
            return Err(AppError::InvalidGenre(genre_id));
        }

        Ok(())
    }
}
