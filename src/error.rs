use actix_web::error::BlockingError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error as ThisError;

use crate::actix_multipart::MultipartError;
use crate::dotenv::Error as DotError;
use crate::jsonwebtoken::errors::Error as JsonWebTokenError;

static UNIQUE_VIOLATION: &str = "23505";

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("migration error: {0}")]
    MigrateError(#[from] sqlx::migrate::MigrateError),

    #[error("dotenv error: {0}")]
    DotEnvError(#[from] DotError),

    #[error("jwt error: {0}")]
    JWTError(#[from] JsonWebTokenError),

    #[error("io error: {0}")]
    IOError(#[from] std::io::Error),

    #[error("multipart error: {0}")]
    MultipartError(#[from] MultipartError),

    #[error("blocking error: {0}")]
    BlockingError(#[from] BlockingError),

    #[error("payload exceeds {0} bytes")]
    PayloadTooLarge(usize),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("unauthorized")]
    Unauthorized,

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("bussiness error: {0}")]
    BusinessError(String),

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("server error: {0}")]
    ServerError(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::InvalidInput(_) | Error::MultipartError(_) => StatusCode::BAD_REQUEST,
            Error::Unauthorized | Error::JWTError(_) => StatusCode::UNAUTHORIZED,
            Error::NotFound(_) | Error::DatabaseError(sqlx::Error::RowNotFound) => StatusCode::NOT_FOUND,
            Error::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Error::Conflict(_) => StatusCode::CONFLICT,
            Error::DatabaseError(sqlx::Error::Database(e)) if e.code().as_deref() == Some(UNIQUE_VIOLATION) => StatusCode::CONFLICT,
            Error::BusinessError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let error = if status.is_server_error() {
            log::error!("{}", self);
            "internal server error".to_owned()
        } else {
            self.to_string()
        };
        HttpResponse::build(status).json(ErrorBody { error })
    }
}
