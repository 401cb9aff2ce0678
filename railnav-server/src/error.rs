use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use railnav_core::{Error, UnresolvedStations};
use serde::Serialize;

/// Error returned by request handlers
#[derive(Debug)]
pub enum AppError {
    BadRequest {
        message: String,
    },
    NotFound {
        message: String,
        unresolved: Option<UnresolvedStations>,
    },
    Internal {
        message: String,
    },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        AppError::BadRequest {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        AppError::NotFound {
            message: message.into(),
            unresolved: None,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    /// Names that failed to resolve, with the side of the route they named
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unresolved: Option<UnresolvedStations>,
}

impl From<Error> for AppError {
    fn from(e: Error) -> Self {
        match e {
            Error::StationNotFound(unresolved) => AppError::NotFound {
                message: unresolved.to_string(),
                unresolved: Some(unresolved),
            },
            Error::InvalidData(message) => AppError::BadRequest { message },
            other => AppError::Internal {
                message: other.to_string(),
            },
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest {
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, unresolved) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message, None),
            AppError::NotFound {
                message,
                unresolved,
            } => (StatusCode::NOT_FOUND, message, unresolved),
            AppError::Internal { message } => {
                (StatusCode::INTERNAL_SERVER_ERROR, message, None)
            }
        };

        if status.is_server_error() {
            tracing::error!(%status, "{message}");
        } else {
            tracing::debug!(%status, "{message}");
        }

        let body = Json(ErrorResponse {
            error: message,
            unresolved,
        });
        (status, body).into_response()
    }
}
