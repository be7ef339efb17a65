use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};

use crate::model::error::{ErrorKind, TreeError};

pub mod file_responses;
pub mod folder_responses;

/// represents a basic json message
#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct BasicMessage {
    pub message: String,
}

impl BasicMessage {
    pub fn new(message: &str) -> Json<BasicMessage> {
        Json::from(BasicMessage {
            message: message.to_string(),
        })
    }
}

/// the body of every failed request, e.g. `{"kind":"Cycle","message":"..."}`
#[derive(Serialize, Deserialize, Debug, PartialEq)]
#[serde(crate = "rocket::serde")]
pub struct ErrorMessage {
    pub kind: ErrorKind,
    pub message: String,
}

impl ErrorMessage {
    pub fn new(kind: ErrorKind, message: &str) -> Json<ErrorMessage> {
        Json::from(ErrorMessage {
            kind,
            message: message.to_string(),
        })
    }
}

/// the http-facing shape of an operation failure, shared by every response enum
pub(crate) enum Failure {
    BadRequest(Json<ErrorMessage>),
    NotFound(Json<ErrorMessage>),
    DbError(Json<ErrorMessage>),
}

impl Failure {
    pub(crate) fn from(error: &dyn TreeError) -> Failure {
        let kind = error.kind();
        let body = ErrorMessage::new(kind, error.message());
        match kind {
            ErrorKind::NotFound => Failure::NotFound(body),
            ErrorKind::Storage => Failure::DbError(body),
            // operations never report Unauthorized, the auth guard rejects the request first
            ErrorKind::Validation | ErrorKind::Cycle | ErrorKind::NoChange | ErrorKind::Unauthorized => {
                Failure::BadRequest(body)
            }
        }
    }
}

/// implements `failure` for a response enum that has `BadRequest`, `NotFound` and `DbError` variants
macro_rules! failure_responses {
    ($($response:ty),+) => {
        $(impl $response {
            pub fn failure(error: &dyn $crate::model::error::TreeError) -> Self {
                match $crate::model::response::Failure::from(error) {
                    $crate::model::response::Failure::BadRequest(body) => Self::BadRequest(body),
                    $crate::model::response::Failure::NotFound(body) => Self::NotFound(body),
                    $crate::model::response::Failure::DbError(body) => Self::DbError(body),
                }
            }
        })+
    };
}

pub(crate) use failure_responses;
