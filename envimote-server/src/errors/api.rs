use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::configs::storage::StorageError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("access denied")]
    Unauthorized,
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                [(
                    header::WWW_AUTHENTICATE,
                    "Basic realm=\"Envimote Dashboard\"",
                )],
                "access denied",
            )
                .into_response(),
            ApiError::Storage(e) => {
                tracing::error!("storage failure: {e}");
                (StatusCode::INTERNAL_SERVER_ERROR, "storage failure").into_response()
            }
        }
    }
}
