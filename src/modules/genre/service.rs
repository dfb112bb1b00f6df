use super::dto::{GenreRequest, GenreResponse};
use crate::common::error::{AppError, AppResult};
use crate::state::AppState;
use validator::Validate;

pub struct GenreService;

impl GenreService {
    /// Whether a movie may reference `genre_id` right now.
    ///
    /// Storage errors propagate; they are not a "no".
    pub async fn is_valid_genre(state: &AppState, genre_id: i32) -> AppResult<bool> {
        Ok(state.genres.exists(genre_id).await?)
    }

    pub async fn create(state: &AppState, req: GenreRequest) -> AppResult<GenreResponse> {
        let req = req.normalized();
        req.validate()?;
        let genre = state.genres.create(&req.name).await?;

        Ok(GenreResponse::from(genre))
    }

    pub async fn find_all(state: &AppState) -> AppResult<Vec<GenreResponse>> {
        let genres = state.genres.find_all().await?;

        Ok(genres.into_iter().map(GenreResponse::from).collect())
    }

    pub async fn find_by_id(state: &AppState, id: i32) -> AppResult<GenreResponse> {
        let genre = state
            .genres
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::genre_not_found(id))?;

        Ok(GenreResponse::from(genre))
    }

    pub async fn update(state: &AppState, id: i32, req: GenreRequest) -> AppResult<GenreResponse> {
        let req = req.normalized();
        req.validate()?;
        let genre = state
            .genres
            .update(id, &req.name)
            .await?
            .ok_or_else(|| AppError::genre_not_found(id))?;

        Ok(GenreResponse::from(genre))
    }

    pub async fn delete(state: &AppState, id: i32) -> AppResult<()> {
        if !state.genres.delete(id).await? {
            return Err(AppError::genre_not_found(id));
        }
        Ok(())
    }
}
