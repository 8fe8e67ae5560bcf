//! Error type shared by every fallible operation in the crate.

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum Error {
    /// No locations were supplied; the caller has to provide some first.
    #[error("no delivery locations: generate or supply locations first")]
    EmptyLocations,
    #[error("invalid location count {count}: expected 1..={max}")]
    InvalidCount { count: usize, max: usize },
    #[error("invalid bounds: {0}")]
    InvalidBounds(String),
    #[error("invalid average speed {0} km/h: must be finite and positive")]
    InvalidSpeed(f64),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("invalid route: {0}")]
    InvalidRoute(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn invalid_route(message: impl Into<String>) -> Self {
        Self::InvalidRoute(message.into())
    }

    pub fn invalid_bounds(message: impl Into<String>) -> Self {
        Self::InvalidBounds(message.into())
    }
}
