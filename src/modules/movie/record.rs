//! Turning accepted submissions into movie records.
//!
//! Both functions assume the submission already passed poster and genre
//! checks; they never fail and never touch storage.

use super::dto::MovieFields;
use super::model::{Movie, NewMovie};

/// Builds a new record from the submitted fields and the complete poster content.
pub fn build_movie(fields: MovieFields, poster: Vec<u8>) -> NewMovie {
    NewMovie {
        title: fields.title,
        year: fields.year,
        rate: fields.rate,
        story_line: fields.story_line,
        genre_id: fields.genre_id,
        poster,
    }
}

/// Applies an update onto an existing record.
///
/// All scalar fields are replaced, changed or not. The poster is replaced only
/// when a new one is given; otherwise the stored bytes stay as they are. The id
/// is never touched.
pub fn merge_update(mut existing: Movie, fields: MovieFields, poster: Option<Vec<u8>>) -> Movie {
    existing.title = fields.title;
    existing.genre_id = fields.genre_id;
    existing.rate = fields.rate;
    existing.story_line = fields.story_line;
    existing.year = fields.year;

    if let Some(poster) = poster {
        existing.poster = poster;
    }

    existing
}
