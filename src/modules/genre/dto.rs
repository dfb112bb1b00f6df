use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::modules::genre::model::Genre;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct GenreRequest {
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: String,
}

impl GenreRequest {
    /// Trims the name so a blank one fails validation.
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct GenreResponse {
    pub id: i32,
    pub name: String,
}

impl From<Genre> for GenreResponse {
    fn from(g: Genre) -> Self {
        Self {
            id: g.id,
            name: g.name,
        }
    }
}
