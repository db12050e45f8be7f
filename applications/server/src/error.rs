/// Server error types
use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use melodia_core::MelodiaError;
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;

pub type Result<T> = std::result::Result<T, ServerError>;

/// Media type for problem responses
pub const PROBLEM_CONTENT_TYPE: &str = "application/problem+json";

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Route not found: {0}")]
    RouteNotFound(String),

    #[error(transparent)]
    Core(#[from] MelodiaError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<melodia_storage::StorageError> for ServerError {
    fn from(err: melodia_storage::StorageError) -> Self {
        // Convert StorageError -> MelodiaError -> ServerError
        ServerError::Core(err.into())
    }
}

/// RFC 7807 problem details
///
/// `instance` is filled in by the `problem_instance` middleware, which knows
/// the request path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Problem {
    #[serde(rename = "type")]
    #[schema(example = "about:blank")]
    pub problem_type: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

impl Problem {
    pub fn new(status: StatusCode, title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            problem_type: "about:blank".to_string(),
            title: title.into(),
            status: status.as_u16(),
            detail: detail.into(),
            instance: None,
        }
    }

    pub fn with_instance(mut self, instance: impl Into<String>) -> Self {
        self.instance = Some(instance.into());
        self
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let mut response = (status, Json(&self)).into_response();
        response.headers_mut().insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static(PROBLEM_CONTENT_TYPE),
        );
        response.extensions_mut().insert(self);
        response
    }
}

impl ServerError {
    /// Map the error onto a problem, logging anything that is our fault
    pub fn to_problem(&self) -> Problem {
        match self {
            ServerError::BadRequest(msg) => {
                Problem::new(StatusCode::BAD_REQUEST, "Bad Request", msg.clone())
            }
            ServerError::RouteNotFound(path) => Problem::new(
                StatusCode::NOT_FOUND,
                "Not Found",
                format!("No route matches {path}"),
            ),
            ServerError::Core(MelodiaError::Validation(msg)) => {
                Problem::new(StatusCode::BAD_REQUEST, "Bad Request", msg.clone())
            }
            ServerError::Core(MelodiaError::NotFound { entity, id }) => Problem::new(
                StatusCode::NOT_FOUND,
                format!("{} Not Found", entity.display_name()),
                format!("The {entity} with ID {id} was not found."),
            ),
            ServerError::Core(MelodiaError::Conflict(msg)) => {
                Problem::new(StatusCode::CONFLICT, "Conflict", msg.clone())
            }
            ServerError::Core(MelodiaError::Storage(msg)) => {
                tracing::error!("Storage error: {}", msg);
                internal_problem()
            }
            ServerError::Config(msg) => {
                tracing::error!("Config error: {}", msg);
                internal_problem()
            }
            ServerError::Io(e) => {
                tracing::error!("IO error: {:?}", e);
                internal_problem()
            }
        }
    }
}

fn internal_problem() -> Problem {
    Problem::new(
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal Server Error",
        "An unexpected error occurred",
    )
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        self.to_problem().into_response()
    }
}
