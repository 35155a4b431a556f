use actix_web::{HttpResponse, ResponseError, http::StatusCode};

use crate::structs::qr_request::{ErrorResponse, InvalidBody};
use crate::utils::qr_encoder::EncodeError;
use crate::utils::validation::ValidationError;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    InvalidBody(#[from] InvalidBody),
    #[error("Invalid query string")]
    InvalidQuery,
    // The cause is logged by the handler, never sent to the client
    #[error("Failed to generate QR code")]
    Encoding,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::InvalidBody(_) | ApiError::InvalidQuery => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Encoding => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}
