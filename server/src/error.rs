use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("{kind} with id {id} not found")]
    NotFound { kind: &'static str, id: u64 },

    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),
}

impl ApiError {
    pub fn gym_not_found(id: u64) -> Self {
        ApiError::NotFound { kind: "gym", id }
    }

    pub fn person_not_found(id: u64) -> Self {
        ApiError::NotFound { kind: "person", id }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).body(self.to_string())
    }
}
