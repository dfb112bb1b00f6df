use crate::common::error::{AppError, AppResult};
use crate::modules::movie::dto::{MovieFields, MovieInput, PosterUpload};
use axum::extract::{multipart::Field, Multipart};
use futures_util::StreamExt;
use std::str::FromStr;
use tracing::debug;

/// Raw text values collected from a movie form before parsing.
#[derive(Debug, Default)]
struct MovieForm {
    title: Option<String>,
    story_line: Option<String>,
    year: Option<String>,
    rate: Option<String>,
    genre_id: Option<String>,
    poster: Option<PosterUpload>,
}

/// Reads a `multipart/form-data` movie submission.
///
/// Field names are matched ignoring case and underscores. The poster, when
/// present, is read completely into memory.
pub async fn read_movie_form(mut multipart: Multipart) -> AppResult<MovieInput> {
    let mut form = MovieForm::default();

    while let Some(field) = multipart.next_field().await? {
        let name = normalize_field_name(field.name().unwrap_or(""));

        match name.as_str() {
            "poster" => form.poster = read_poster(field).await?,
            "title" => form.title = Some(field.text().await?),
            "storyline" => form.story_line = Some(field.text().await?),
            "year" => form.year = Some(field.text().await?),
            "rate" => form.rate = Some(field.text().await?),
            "genreid" => form.genre_id = Some(field.text().await?),
            _ => debug!(field = %name, "Ignoring unknown form field"),
        }
    }

    form.into_input()
}

impl MovieForm {
    fn into_input(self) -> AppResult<MovieInput> {
        let title = self
            .title
            .ok_or_else(|| AppError::Validation("title is required".to_string()))?;
        let rate: f64 = parse_field("rate", self.rate)?;
        if !rate.is_finite() {
            return Err(AppError::Validation("rate must be a finite number".to_string()));
        }

        Ok(MovieInput {
            fields: MovieFields {
                title: title.trim().to_string(),
                story_line: self.story_line.unwrap_or_default(),
                year: parse_field("year", self.year)?,
                rate,
                genre_id: parse_field("genre_id", self.genre_id)?,
            },
            poster: self.poster,
        })
    }
}

async fn read_poster(mut field: Field<'_>) -> AppResult<Option<PosterUpload>> {
    let file_name = field.file_name().unwrap_or("").to_string();

    let mut bytes = Vec::new();
    while let Some(chunk) = field.next().await {
        bytes.extend_from_slice(&chunk?);
    }

    // An empty file input still sends a part; that means no poster.
    if file_name.is_empty() && bytes.is_empty() {
        return Ok(None);
    }

    debug!(file_name = %file_name, size = bytes.len(), "Poster received");
    Ok(Some(PosterUpload { file_name, bytes }))
}

fn normalize_field_name(name: &str) -> String {
    name.chars()
        .filter(|c| *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

fn parse_field<T: FromStr>(name: &str, raw: Option<String>) -> AppResult<T> {
    let raw = raw.ok_or_else(|| AppError::Validation(format!("{} is required", name)))?;
    raw.trim()
        .parse::<T>()
        .map_err(|_| AppError::Validation(format!("{} must be a number", name)))
}


#[cfg(test)]
mod tests {
    use super::test_form::{content_type, multipart_body, Part};
    use super::*;
    use axum::body::Body;
    use axum::extract::{FromRequest, Request};
    use axum::http::header::CONTENT_TYPE;

    async fn read(parts: &[Part<'_>]) -> AppResult<MovieInput> {
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .header(CONTENT_TYPE, content_type())
            .body(Body::from(multipart_body(parts)))
            .unwrap();
        let multipart = Multipart::from_request(request, &()).await.unwrap();
        read_movie_form(multipart).await
    }

    #[tokio::test]
    async fn reads_all_fields_and_poster() {
        let input = read(&[
            Part::Text("title", " Dune "),
            Part::Text("storyLine", "Spice must flow."),
            Part::Text("Year", "2021"),
            Part::Text("rate", "8.5"),
            Part::Text("genre_id", "3"),
            Part::File("poster", "dune.jpg", &[1, 2, 3, 4]),
        ])
        .await
        .unwrap();

        assert_eq!(
            input.fields,
            MovieFields {
                title: "Dune".into(),
                story_line: "Spice must flow.".into(),
                year: 2021,
                rate: 8.5,
                genre_id: 3,
            }
        );
        assert_eq!(
            input.poster,
            Some(PosterUpload { file_name: "dune.jpg".into(), bytes: vec![1, 2, 3, 4] })
        );
    }

    #[tokio::test]
    async fn missing_poster_and_story_line_are_allowed() {
        let input = read(&[
            Part::Text("title", "Dune"),
            Part::Text("year", "2021"),
            Part::Text("rate", "8"),
            Part::Text("GenreId", "3"),
        ])
        .await
        .unwrap();

        assert_eq!(input.fields.story_line, "");
        assert_eq!(input.poster, None);
    }

    #[tokio::test]
    async fn empty_file_input_counts_as_no_poster() {
        let input = read(&[
            Part::Text("title", "Dune"),
            Part::Text("year", "2021"),
            Part::Text("rate", "8"),
            Part::Text("genreId", "3"),
            Part::File("poster", "", &[]),
        ])
        .await
        .unwrap();

        assert_eq!(input.poster, None);
    }

    #[tokio::test]
    async fn unparsable_number_is_a_validation_error() {
        let result = read(&[
            Part::Text("title", "Dune"),
            Part::Text("year", "twenty"),
            Part::Text("rate", "8"),
            Part::Text("genreId", "3"),
        ])
        .await;

        assert!(matches!(result, Err(AppError::Validation(msg)) if msg == "year must be a number"));
    }

    #[tokio::test]
    async fn non_finite_rate_is_a_validation_error() {
        for raw in ["NaN", "inf", "-inf"] {
            let result = read(&[
                Part::Text("title", "Dune"),
                Part::Text("year", "2021"),
                Part::Text("rate", raw),
                Part::Text("genreId", "3"),
            ])
            .await;

            assert!(
                matches!(&result, Err(AppError::Validation(msg)) if msg == "rate must be a finite number"),
                "rate {raw} was accepted"
            );
        }
    }

    #[tokio::test]
    async fn missing_genre_is_a_validation_error() {
        let result = read(&[
            Part::Text("title", "Dune"),
            Part::Text("year", "2021"),
            Part::Text("rate", "8"),
        ])
        .await;

        assert!(matches!(result, Err(AppError::Validation(msg)) if msg == "genre_id is required"));
    }

    #[test]
    fn field_names_ignore_case_and_underscores() {
        assert_eq!(normalize_field_name("Story_Line"), "storyline");
        assert_eq!(normalize_field_name("genreId"), "genreid");
    }
}
