//! HTTP error mapping.
//!
//! Every resource error converts into an [`ApiError`], which picks the status code and renders
//! `{"error": "<message>"}`. Missing records are 404, rejected input and blocked deletes are
//! 400, anything else is a 500.

use crate::brand_actor::BrandError;
use crate::category_actor::CategoryError;
use crate::movie_actor::MovieError;
use crate::product_actor::ProductError;
use crate::user_actor::UserError;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<BrandError> for ApiError {
    fn from(e: BrandError) -> Self {
        match e {
            BrandError::NotFound(_) => ApiError::NotFound(e.to_string()),
            BrandError::ValidationError(_) | BrandError::HasProducts(_) => {
                ApiError::BadRequest(e.to_string())
            }
            BrandError::ActorCommunicationError(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<CategoryError> for ApiError {
    fn from(e: CategoryError) -> Self {
        match e {
            CategoryError::NotFound(_) => ApiError::NotFound(e.to_string()),
            CategoryError::ValidationError(_) | CategoryError::HasProducts(_) => {
                ApiError::BadRequest(e.to_string())
            }
            CategoryError::ActorCommunicationError(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<ProductError> for ApiError {
    fn from(e: ProductError) -> Self {
        match e {
            ProductError::NotFound(_) => ApiError::NotFound(e.to_string()),
            // a dangling reference is bad input, not a missing product
            ProductError::ValidationError(_)
            | ProductError::CategoryNotFound(_)
            | ProductError::BrandNotFound(_) => ApiError::BadRequest(e.to_string()),
            ProductError::ActorCommunicationError(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<UserError> for ApiError {
    fn from(e: UserError) -> Self {
        match e {
            UserError::NotFound(_) => ApiError::NotFound(e.to_string()),
            UserError::ValidationError(_) | UserError::EmailInUse(_) => {
                ApiError::BadRequest(e.to_string())
            }
            UserError::ActorCommunicationError(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<MovieError> for ApiError {
    fn from(e: MovieError) -> Self {
        match e {
            MovieError::NotFound(_) => ApiError::NotFound(e.to_string()),
            MovieError::ValidationError(_) => ApiError::BadRequest(e.to_string()),
            MovieError::ActorCommunicationError(_) => ApiError::Internal(e.to_string()),
        }
    }
}
