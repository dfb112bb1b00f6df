use super::model::{Movie, MovieView, NewMovie};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use sqlx::PgPool;

/// Durable movie storage.
#[async_trait]
pub trait MovieRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Movie>>;
    async fn find_view_by_id(&self, id: i32) -> Result<Option<MovieView>>;
    /// Highest rated first; restricted to one genre when `genre_id` is given.
    async fn find_all(&self, genre_id: Option<i32>) -> Result<Vec<MovieView>>;
    async fn add(&self, movie: NewMovie) -> Result<Movie>;
    async fn update(&self, movie: &Movie) -> Result<()>;
    async fn delete(&self, movie: &Movie) -> Result<()>;
}

pub struct PgMovieRepository {
    pool: PgPool,
}

impl PgMovieRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

const VIEW_SELECT: &str = r#"
    SELECT m.id, m.title, m.year, m.rate, m.story_line, m.genre_id,
           g.name AS genre_name, m.poster
    FROM movies m
    LEFT JOIN genres g ON g.id = m.genre_id
"#;

#[async_trait]
impl MovieRepository for PgMovieRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Movie>> {
        let movie = sqlx::query_as::<_, Movie>(
            "SELECT id, title, year, rate, story_line, genre_id, poster FROM movies WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to fetch movie: {}", e))?;

        Ok(movie)
    }

    async fn find_view_by_id(&self, id: i32) -> Result<Option<MovieView>> {
        let query = format!("{VIEW_SELECT} WHERE m.id = $1");
        let movie = sqlx::query_as::<_, MovieView>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| anyhow!("Failed to fetch movie: {}", e))?;

        Ok(movie)
    }

    async fn find_all(&self, genre_id: Option<i32>) -> Result<Vec<MovieView>> {
        let query = format!(
            "{VIEW_SELECT} WHERE ($1::INT IS NULL OR m.genre_id = $1) ORDER BY m.rate DESC, m.id ASC"
        );
        let movies = sqlx::query_as::<_, MovieView>(&query)
            .bind(genre_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| anyhow!("Failed to fetch movies: {}", e))?;

        Ok(movies)
    }

    async fn add(&self, movie: NewMovie) -> Result<Movie> {
        let movie = sqlx::query_as::<_, Movie>(
            r#"
            INSERT INTO movies (title, year, rate, story_line, genre_id, poster)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, title, year, rate, story_line, genre_id, poster
            "#,
        )
        .bind(movie.title)
        .bind(movie.year)
        .bind(movie.rate)
        .bind(movie.story_line)
        .bind(movie.genre_id)
        .bind(movie.poster)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to create movie: {}", e))?;

        Ok(movie)
    }

    async fn update(&self, movie: &Movie) -> Result<()> {
        sqlx::query(
            r#"
            UPDATE movies
            SET title = $1, year = $2, rate = $3, story_line = $4, genre_id = $5, poster = $6
            WHERE id = $7
            "#,
        )
        .bind(&movie.title)
        .bind(movie.year)
        .bind(movie.rate)
        .bind(&movie.story_line)
        .bind(movie.genre_id)
        .bind(&movie.poster)
        .bind(movie.id)
        .execute(&self.pool)
        .await
        .map_err(|e| anyhow!("Failed to update movie: {}", e))?;

        Ok(())
    }

    async fn delete(&self, movie: &Movie) -> Result<()> {
        sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(movie.id)
            .execute(&self.pool)
            .await
            .map_err(|e| anyhow!("Failed to delete movie: {}", e))?;

        Ok(())
    }
}

#[cfg(test)]
pub mod memory {
    use super::*;
    use crate::modules::genre::repository::memory::InMemoryGenreRepository;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    /// Movie storage backed by a `Vec`, joined against an in-memory genre store.
    pub struct InMemoryMovieRepository {
        movies: Mutex<Vec<Movie>>,
        next_id: AtomicUsize,
        genres: Arc<InMemoryGenreRepository>,
        pub updates: AtomicUsize,
        pub deletes: AtomicUsize,
        pub failing: AtomicBool,
    }

    impl InMemoryMovieRepository {
        pub fn new(genres: Arc<InMemoryGenreRepository>) -> Self {
            Self {
                movies: Mutex::new(Vec::new()),
                next_id: AtomicUsize::new(1),
                genres,
                updates: AtomicUsize::new(0),
                deletes: AtomicUsize::new(0),
                failing: AtomicBool::new(false),
            }
        }

        pub fn stored(&self, id: i32) -> Option<Movie> {
            self.movies.lock().unwrap().iter().find(|m| m.id == id).cloned()
        }

        fn check(&self) -> Result<()> {
            if self.failing.load(Ordering::SeqCst) {
                return Err(anyhow!("storage offline"));
            }
            Ok(())
        }

        fn view(&self, movie: Movie) -> MovieView {
            MovieView {
                genre_name: self.genres.name_of(movie.genre_id),
                id: movie.id,
                title: movie.title,
                year: movie.year,
                rate: movie.rate,
                story_line: movie.story_line,
                genre_id: movie.genre_id,
                poster: movie.poster,
            }
        }
    }

    #[async_trait]
    impl MovieRepository for InMemoryMovieRepository {
        async fn find_by_id(&self, id: i32) -> Result<Option<Movie>> {
            self.check()?;
            Ok(self.stored(id))
        }

        async fn find_view_by_id(&self, id: i32) -> Result<Option<MovieView>> {
            self.check()?;
            Ok(self.stored(id).map(|m| self.view(m)))
        }

        async fn find_all(&self, genre_id: Option<i32>) -> Result<Vec<MovieView>> {
            self.check()?;
            let mut movies: Vec<Movie> = self
                .movies
                .lock()
                .unwrap()
                .iter()
                .filter(|m| genre_id.is_none_or(|g| m.genre_id == g))
                .cloned()
                .collect();
            movies.sort_by(|a, b| b.rate.total_cmp(&a.rate).then(a.id.cmp(&b.id)));
            Ok(movies.into_iter().map(|m| self.view(m)).collect())
        }

        async fn add(&self, movie: NewMovie) -> Result<Movie> {
            self.check()?;
            let id = self.next_id.fetch_add(1, Ordering::SeqCst) as i32;
            let movie = Movie {
                id,
                title: movie.title,
                year: movie.year,
                rate: movie.rate,
                story_line: movie.story_line,
                genre_id: movie.genre_id,
                poster: movie.poster,
            };
            self.movies.lock().unwrap().push(movie.clone());
            Ok(movie)
        }

        async fn update(&self, movie: &Movie) -> Result<()> {
            self.check()?;
            self.updates.fetch_add(1, Ordering::SeqCst);
            let mut movies = self.movies.lock().unwrap();
            if let Some(slot) = movies.iter_mut().find(|m| m.id == movie.id) {
                *slot = movie.clone();
            }
            Ok(())
        }

        async fn delete(&self, movie: &Movie) -> Result<()> {
            self.check()?;
            self.deletes.fetch_add(1, Ordering::SeqCst);
            self.movies.lock().unwrap().retain(|m| m.id != movie.id);
            Ok(())
        }
    }
}
