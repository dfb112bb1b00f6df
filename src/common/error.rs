use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;

/// Every way a catalog request can fail.
///
/// The poster and genre variants are submission rejections: they are raised
/// before anything is written and reported as-is to the client.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Poster is required")]
    PosterRequired,

    #[error("Only {allowed} images are allowed")]
    UnsupportedImageType { allowed: String },

    #[error("Max allowed size for poster is {max_bytes} bytes")]
    ImageTooLarge { max_bytes: usize },

    #[error("Invalid genre id {0}")]
    InvalidGenre(i32),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Multipart(#[from] MultipartError),

    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    pub fn movie_not_found(id: i32) -> Self {
        AppError::NotFound(format!("No movie was found with id {}", id))
    }

    pub fn genre_not_found(id: i32) -> Self {
        AppError::NotFound(format!("No genre was found with id {}", id))
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::PosterRequired
            | AppError::UnsupportedImageType { .. }
            | AppError::ImageTooLarge { .. }
            | AppError::InvalidGenre(_)
            | AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Multipart(e) => e.status(),
            AppError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Short stable name of the error kind, used in logs.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::PosterRequired => "PosterRequired",
            AppError::UnsupportedImageType { .. } => "UnsupportedImageType",
            AppError::ImageTooLarge { .. } => "ImageTooLarge",
            AppError::InvalidGenre(_) => "InvalidGenre",
            AppError::NotFound(_) => "NotFound",
            AppError::Validation(_) => "Validation",
            AppError::Multipart(_) => "Multipart",
            AppError::Storage(_) => "StorageFailure",
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}
