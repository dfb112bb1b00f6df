use crate::config::env::{self, EnvKey};
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_POSTER_EXTENSIONS: &str = ".jpg,.png";
pub const DEFAULT_POSTER_MAX_SIZE: usize = 1_048_576;
pub const DEFAULT_MAX_BODY_SIZE: usize = 8 * 1024 * 1024;

#[derive(Clone, Debug, Deserialize)]
pub struct AppConfig {
    pub server_port: u16,
    pub database_url: String,
    pub db_max_connections: u32,
    pub poster_allowed_extensions: Vec<String>,
    pub poster_max_size_bytes: usize,
    pub max_request_body_bytes: usize,
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("MAX_REQUEST_BODY_BYTES ({body_limit}) must exceed POSTER_MAX_SIZE_BYTES ({poster_limit})")]
    BodyLimitTooSmall { body_limit: usize, poster_limit: usize },
}

impl AppConfig {
    pub fn new() -> Result<Self, ConfigError> {
        let extensions = env::get_or(EnvKey::PosterAllowedExtensions, DEFAULT_POSTER_EXTENSIONS);
        let database_url =
            env::get(EnvKey::DatabaseUrl).map_err(|_| ConfigError::Missing(EnvKey::DatabaseUrl.as_str()))?;

        let config = Self {
            server_port: env::get_parsed(EnvKey::ServerPort, 3000),
            database_url,
            db_max_connections: env::get_parsed(EnvKey::DbMaxConnections, 20),
            poster_allowed_extensions: parse_extensions(&extensions),
            poster_max_size_bytes: env::get_parsed(EnvKey::PosterMaxSizeBytes, DEFAULT_POSTER_MAX_SIZE),
            max_request_body_bytes: env::get_parsed(EnvKey::MaxRequestBodyBytes, DEFAULT_MAX_BODY_SIZE),
        };
        config.check_limits()?;

        Ok(config)
    }

    /// A poster the policy accepts must fit in a request body, with room
    /// left for the other form fields.
    pub fn check_limits(&self) -> Result<(), ConfigError> {
        if self.max_request_body_bytes <= self.poster_max_size_bytes {
            return Err(ConfigError::BodyLimitTooSmall {
                body_limit: self.max_request_body_bytes,
                poster_limit: self.poster_max_size_bytes,
            });
        }
        Ok(())
    }
}

/// Splits a comma separated list into lowercase extensions with a leading dot.
pub fn parse_extensions(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|ext| !ext.is_empty() && *ext != ".")
        .map(|ext| {
            let ext = ext.to_lowercase();
            if ext.starts_with('.') { ext } else { format!(".{}", ext) }
        })
        .collect()
}
