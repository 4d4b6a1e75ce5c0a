use rocket::http::Status;
use rocket::request::Request;
use rocket::response::{ self, Responder };
use rocket::serde::json::Json;
use thiserror::Error;
use crate::api::models::ErrorBody;
use crate::api::DataError;

/// Everything a handler can answer with besides success. Each variant maps
/// to one status code and a `{"error": ...}` body.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid request payload")]
    InvalidPayload,
    #[error("Invalid {0} ID")]
    NotFoundOrInvalidId(&'static str),
    // Same message whether the email or the password was wrong
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("{0}")]
    Storage(String),
    #[error("Error encrypting password")]
    Hashing(String)
}

impl ApiError {
    /// Maps a data access failure on a lookup of `subject` ("beer", "user").
    pub fn from_data(error: DataError, subject: &'static str) -> ApiError {
        match error {
            DataError::NotFoundOrInvalidId | DataError::NotFound | DataError::MissingId => ApiError::NotFoundOrInvalidId(subject),
            other => ApiError::Storage(other.to_string())
        }
    }

    pub fn status(&self) -> Status {
        match self {
            ApiError::InvalidPayload
            | ApiError::NotFoundOrInvalidId(_)
            | ApiError::InvalidCredentials => Status::BadRequest,
            ApiError::Storage(_) | ApiError::Hashing(_) => Status::InternalServerError
        }
    }
}

impl From<DataError> for ApiError {
    fn from(error: DataError) -> Self {
        ApiError::Storage(error.to_string())
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let status = self.status();
        match &self {
            ApiError::Hashing(cause) => log::error!("{} {}: password hashing failed: {}", request.method(), request.uri(), cause),
            ApiError::Storage(cause) => log::error!("{} {}: {}", request.method(), request.uri(), cause),
            _ => log::debug!("{} {}: {}", request.method(), request.uri(), self)
        }
        (status, Json(ErrorBody { error: self.to_string() })).respond_to(request)
    }
}
