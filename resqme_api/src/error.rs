use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use resqme_core::hazards::HazardSourceError;
use resqme_ors::OrsError;
use serde::Serialize;

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    InternalServerError(String),
    BadGateway(String),
    ServiceUnavailable(String),
    GatewayTimeout(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl From<OrsError> for ApiError {
    fn from(error: OrsError) -> Self {
        match error {
            OrsError::InvalidApiKey | OrsError::Client(_) => {
                ApiError::InternalServerError(error.to_string())
            }
            OrsError::Network(_) if error.is_timeout() => {
                ApiError::GatewayTimeout(error.to_string())
            }
            OrsError::Network(_) => ApiError::ServiceUnavailable(error.to_string()),
            OrsError::Auth { .. }
            | OrsError::Provider { .. }
            | OrsError::MalformedResponse(_)
            | OrsError::Decode(_) => ApiError::BadGateway(error.to_string()),
        }
    }
}

impl From<HazardSourceError> for ApiError {
    fn from(error: HazardSourceError) -> Self {
        ApiError::InternalServerError(format!("Server processing error: {error}"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::InternalServerError(message) => (StatusCode::INTERNAL_SERVER_ERROR, message),
            ApiError::BadGateway(message) => (StatusCode::BAD_GATEWAY, message),
            ApiError::ServiceUnavailable(message) => (StatusCode::SERVICE_UNAVAILABLE, message),
            ApiError::GatewayTimeout(message) => (StatusCode::GATEWAY_TIMEOUT, message),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
