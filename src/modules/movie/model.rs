use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A stored movie. `id` is assigned by the database and never changes.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq, ToSchema)]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub year: i32,
    pub rate: f64,
    pub story_line: String,
    pub genre_id: i32,
    #[serde(with = "base64_bytes")]
    #[schema(value_type = String, format = Byte)]
    pub poster: Vec<u8>,
}

/// A movie ready to be inserted; storage assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMovie {
    pub title: String,
    pub year: i32,
    pub rate: f64,
    pub story_line: String,
    pub genre_id: i32,
    pub poster: Vec<u8>,
}

/// Read model: a movie joined with the name of its genre.
///
/// `genre_name` is `None` when the referenced genre was deleted after the
/// movie was written.
#[derive(Debug, Serialize, Deserialize, FromRow, Clone, PartialEq, ToSchema)]
pub struct MovieView {
    pub id: i32,
    pub title: String,
    pub year: i32,
    pub rate: f64,
    pub story_line: String,
    pub genre_id: i32,
    pub genre_name: Option<String>,
    #[serde(with = "base64_bytes")]
    #[schema(value_type = String, format = Byte)]
    pub poster: Vec<u8>,
}

mod base64_bytes {
    use base64::{engine::general_purpose::STANDARD, Engine as _};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&STANDARD.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        STANDARD.decode(encoded).map_err(serde::de::Error::custom)
    }
}
