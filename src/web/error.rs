
use std::sync::Arc;

use crate::{model, web};
use axum::{
    response::{IntoResponse, Response},
    http::StatusCode
};
use serde::Serialize;
use tracing::debug;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Serialize, strum_macros::AsRefStr)]
#[serde(tag = "type", content = "data")]
pub enum Error {
    InvalidStudentId(String),
    InvalidPayload(String),

    Model(model::Error),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        debug!("{:<12} - web::Error {self:?}", "INTO_RES");
        let mut response = StatusCode::INTERNAL_SERVER_ERROR.into_response();
        response.extensions_mut().insert(Arc::new(self));
        response
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{self:?}")
    }
}

impl From<model::Error> for Error {
    fn from(value: model::Error) -> Self {
        Self::Model(value)
    }
}

impl std::error::Error for Error {}

impl Error {
    pub fn client_status_and_error(&self) -> (StatusCode, ClientError) {
        use web::Error::*;

        match self {
            InvalidStudentId(..) => (StatusCode::BAD_REQUEST, ClientError::INVALID_STUDENT_ID),
            InvalidPayload(..) => (StatusCode::BAD_REQUEST, ClientError::INVALID_REQUEST_BODY),
            Model(model::Error::EntityNotFound { .. }) => {
                (StatusCode::NOT_FOUND, ClientError::STUDENT_NOT_FOUND)
            }
            Model(model::Error::NoStudentQueried) => {
                (StatusCode::NOT_FOUND, ClientError::NO_STUDENT_QUERIED)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, strum_macros::AsRefStr)]
#[allow(non_camel_case_types)]
pub enum ClientError {
    INVALID_STUDENT_ID,
    INVALID_REQUEST_BODY,
    STUDENT_NOT_FOUND,
    NO_STUDENT_QUERIED,
}

impl ClientError {
    /// Plain-text body sent back to the client.
    pub fn message(&self) -> &'static str {
        match self {
            ClientError::INVALID_STUDENT_ID => "Invalid student ID",
            ClientError::INVALID_REQUEST_BODY => "Invalid request body",
            ClientError::STUDENT_NOT_FOUND => "Student not found",
            ClientError::NO_STUDENT_QUERIED => "No student has been queried yet",
        }
    }
}
