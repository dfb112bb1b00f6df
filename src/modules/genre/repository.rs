use super::model::Genre;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use sqlx::PgPool;

/// Genre storage as seen by the catalog.
#[async_trait]
pub trait GenreRepository: Send + Sync {
    async fn exists(&self, id: i32) -> Result<bool>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Genre>>;
    async fn find_all(&self) -> Result<Vec<Genre>>;
    async fn create(&self, name: &str) -> Result<Genre>;
    /// Returns `None` when no genre has the given id.
    async fn update(&self, id: i32, name: &str) -> Result<Option<Genre>>;
    /// Returns `false` when no genre has the given id.
    async fn delete(&self, id: i32) -> Result<bool>;
}

pub struct PgGenreRepository {
    pool: PgPool,
}

impl PgGenreRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GenreRepository for PgGenreRepository {
    async fn exists(&self, id: i32) -> Result<bool> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM genres WHERE id = $1)")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| anyhow!("Failed to check genre: {}", e))?;

        Ok(exists)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Genre>> {
        let genre = sqlx::query_as::<_, Genre>("SELECT id, name FROM genres WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| anyhow!("Failed to fetch genre: {}", e))?;

        Ok(genre)
    }

    async fn find_all(&self) -> Result<Vec<Genre>> {
        let genres = sqlx::query_as::<_, Genre>("SELECT id, name FROM genres ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| anyhow!("Failed to fetch genres: {}", e))?;

        Ok(genres)
    }

    async fn create(&self, name: &str) -> Result<Genre> {
        let genre = sqlx::query_as::<_, Genre>(
            r#"
            INSERT INTO genres (name)
            VALUES ($1)
            RETURNING id, name
            "#,
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to create genre: {}", e))?;

        Ok(genre)
    }

    async fn update(&self, id: i32, name: &str) -> Result<Option<Genre>> {
        let genre = sqlx::query_as::<_, Genre>(
            r#"
            UPDATE genres
            SET name = $1
            WHERE id = $2
            RETURNING id, name
            "#,
        )
        .bind(name)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to update genre: {}", e))?;

        Ok(genre)
    }

    async fn delete(&self, id: i32) -> Result<bool> {
        let result = sqlx::query("DELETE FROM genres WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| anyhow!("Failed to delete genre: {}", e))?;

        Ok(result.rows_affected() > 0)
    }
}
