use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContentError {
    #[error("No content identifier supplied")]
    MissingIdentifier,

    #[error("Network failure: {0}")]
    NetworkFailure(String),

    #[error("Invalid response shape: {0}")]
    InvalidResponseShape(String),
}

/// Discriminant of a [`ContentError`], safe to hand to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchErrorKind {
    MissingIdentifier,
    NetworkFailure,
    InvalidResponseShape,
}

impl ContentError {
    pub fn kind(&self) -> FetchErrorKind {
        match self {
            ContentError::MissingIdentifier => FetchErrorKind::MissingIdentifier,
            ContentError::NetworkFailure(_) => FetchErrorKind::NetworkFailure,
            ContentError::InvalidResponseShape(_) => FetchErrorKind::InvalidResponseShape,
        }
    }

    /// Whether the error view should offer a retry button.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, ContentError::MissingIdentifier)
    }
}
