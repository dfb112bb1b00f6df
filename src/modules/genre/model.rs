use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema, Clone, PartialEq)]
pub struct Genre {
    pub id: i32,
    pub name: String,
}
