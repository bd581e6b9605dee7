use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Secure random source unavailable: {0}")]
    EntropySourceUnavailable(String),
}

// Convenience type alias
pub type Result<T> = std::result::Result<T, AppError>;

impl From<rand::Error> for AppError {
    fn from(err: rand::Error) -> Self {
        AppError::EntropySourceUnavailable(err.to_string())
    }
}
