use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

/// The scalar part of a movie submission. Every update carries all of them.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct MovieFields {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    pub story_line: String,
    pub year: i32,
    pub rate: f64,
    pub genre_id: i32,
}

/// An uploaded poster, fully read into memory.
#[derive(Debug, Clone, PartialEq)]
pub struct PosterUpload {
    /// Only used to derive the extension.
    pub file_name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq, Validate)]
pub struct MovieInput {
    #[validate(nested)]
    pub fields: MovieFields,
    pub poster: Option<PosterUpload>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct MovieListQuery {
    /// Only return movies of this genre.
    pub genre: Option<i32>,
}
