use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum WordcloudsApiError {
    InvalidApiKey,
    EmptyComments,
    EmptyText,
}

impl WordcloudsApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::InvalidApiKey => ApiError {
                code: StatusCode::UNAUTHORIZED,
                message: "Unauthorized: Invalid or missing API key".to_string(),
            },
            Self::EmptyComments => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "Comments list cannot be empty".to_string(),
            },
            Self::EmptyText => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "All comments are empty".to_string(),
            },
        }
    }
}
