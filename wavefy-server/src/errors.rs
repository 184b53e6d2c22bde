use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use log::error;
use thiserror::Error;
use wavefy_catalog::CatalogError;

use crate::serialized::ErrorMessage;

pub type ServerResult<T> = Result<T, ServerError>;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("{resource} not found")]
    NotFound { resource: &'static str },
    #[error("Failed to fetch {resource}")]
    Fetch {
        resource: &'static str,
        #[source]
        source: CatalogError,
    },
}

impl ServerError {
    fn as_status_code(&self) -> StatusCode {
        match self {
            Self::NotFound { resource: _ } => StatusCode::NOT_FOUND,
            Self::Fetch {
                resource: _,
                source: _,
            } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        if let Self::Fetch { resource, source } = &self {
            error!("Failed to fetch {}: {}", resource, source);
        }

        let body = ErrorMessage::new(self.to_string());

        (self.as_status_code(), Json(body)).into_response()
    }
}

/// Helper trait to reduce boilerplate in handlers
pub trait FetchResult<T> {
    /// Turns a catalog error into a [ServerError::Fetch] for the given resource
    fn or_fetch_error(self, resource: &'static str) -> ServerResult<T>;
}

impl<T> FetchResult<T> for Result<T, CatalogError> {
    fn or_fetch_error(self, resource: &'static str) -> ServerResult<T> {
        self.map_err(|source| ServerError::Fetch { resource, source })
    }
}

/// Helper trait to reduce boilerplate in handlers
pub trait FoundOr<T> {
    /// Turns a missing value into a [ServerError::NotFound]
    fn found_or(self, resource: &'static str) -> ServerResult<T>;
}

impl<T> FoundOr<T> for Option<T> {
    fn found_or(self, resource: &'static str) -> ServerResult<T> {
        self.ok_or(ServerError::NotFound { resource })
    }
}
