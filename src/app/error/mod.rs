use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

mod schema;

///
pub type AppResult<T, E = AppError> = std::result::Result<T, E>;

/// A common error type that can be used throughout the API.
///
/// Can be returned in a `Result` from an API handler function.
///
/// Maps each failure to the HTTP status and the `{success, message}` JSON
/// shape the contact form's client script expects.
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    ValidationError(String),
    #[error("{0}")]
    DeliveryError(String),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::ValidationError(_) => StatusCode::BAD_REQUEST,
            Self::DeliveryError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Axum allows you to return `Result` from handler functions, but the error type
/// also must be some sort of response type.
///
/// Validation and delivery failures surface their own message; anything else
/// gets a fixed fallback so internals never reach the client.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::ValidationError(ref s) | Self::DeliveryError(ref s) => {
                tracing::error!("{:?}", s);
                (
                    self.status_code(),
                    Json(schema::Error {
                        success: false,
                        message: s.to_owned(),
                    }),
                )
                    .into_response()
            }
            Self::UnexpectedError(ref e) => {
                tracing::error!("{:?}", e);
                (
                    self.status_code(),
                    Json(schema::Error {
                        success: false,
                        message: "An error occurred while sending the email".to_owned(),
                    }),
                )
                    .into_response()
            }
        }
    }
}
