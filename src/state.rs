use crate::config::settings::AppConfig;
use crate::modules::genre::repository::GenreRepository;
use crate::modules::movie::poster::PosterPolicy;
use crate::modules::movie::repository::MovieRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub movies: Arc<dyn MovieRepository>,
    pub genres: Arc<dyn GenreRepository>,
    pub posters: Arc<PosterPolicy>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        movies: Arc<dyn MovieRepository>,
        genres: Arc<dyn GenreRepository>,
    ) -> Self {
        let posters = Arc::new(PosterPolicy::from_config(&config));
        Self {
            config,
            movies,
            genres,
            posters,
        }
    }
}

#[cfg(test)]
pub mod test_support {
    use super::*;
    use crate::config::settings::{
        parse_extensions, DEFAULT_MAX_BODY_SIZE, DEFAULT_POSTER_EXTENSIONS, DEFAULT_POSTER_MAX_SIZE,
    };
    use crate::modules::genre::repository::memory::InMemoryGenreRepository;
    use crate::modules::movie::repository::memory::InMemoryMovieRepository;

    pub fn test_config() -> AppConfig {
        AppConfig {
            server_port: 0,
            database_url: "postgres://unused".into(),
            db_max_connections: 1,
            poster_allowed_extensions: parse_extensions(DEFAULT_POSTER_EXTENSIONS),
            poster_max_size_bytes: DEFAULT_POSTER_MAX_SIZE,
            max_request_body_bytes: DEFAULT_MAX_BODY_SIZE,
        }
    }

    /// State over in-memory stores, plus a handle on the movie store for
    /// inspecting what was written.
    pub fn test_state(genres: &[(i32, &str)]) -> (AppState, Arc<InMemoryMovieRepository>) {
        let genres = Arc::new(InMemoryGenreRepository::with_genres(genres));
        let movies = Arc::new(InMemoryMovieRepository::new(genres.clone()));
        let state = AppState::new(test_config(), movies.clone(), genres);
        (state, movies)
    }

    pub fn state_with_genres(genres: &[(i32, &str)]) -> AppState {
        test_state(genres).0
    }
}
