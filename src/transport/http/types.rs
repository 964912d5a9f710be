use crate::domain::validate::{join_violations, Violation};
use crate::storage::articles::ArticleStore;
use crate::storage::products::ProductStore;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub articles: Arc<dyn ArticleStore>,
    pub products: Arc<dyn ProductStore>,
    /// Kept alongside the stores so the healthcheck can ping the database.
    pub pool: crate::storage::Pool,
}

/// The uniform failure envelope: every error response body is `{"error": ...}`.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

/// Error taxonomy mapped deterministically to status codes: 404 for absent ids,
/// 400 for client-caused conditions, 500 for store failures. Internal detail is
/// logged server-side and never echoed to the client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(&'static str),
    #[error("Invalid JSON")]
    InvalidJson,
    #[error("{}", join_violations(.0))]
    Validation(Vec<Violation>),
    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidJson | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let ApiError::Internal(err) = &self {
            tracing::error!(error = %err, "request failed");
        }
        (
            status,
            Json(ErrorBody {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
