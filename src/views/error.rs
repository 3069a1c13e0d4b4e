use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewError {
    #[error("View not found")]
    NotFound,

    #[error("Invalid view id: {0}")]
    InvalidId(String),
}

impl IntoResponse for ViewError {
    fn into_response(self) -> Response {
        let status = match self {
            ViewError::NotFound => StatusCode::NOT_FOUND,
            ViewError::InvalidId(_) => StatusCode::BAD_REQUEST,
        };
        (status, self.to_string()).into_response()
    }
}
