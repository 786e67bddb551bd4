use log::{debug, error};
use rocket::http::Status;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use rocket::{catch, catchers, Catcher, Request};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use std::io;

use crate::todo::data::TodoID;

#[derive(Debug, Error)]
pub enum InternalError {
    #[error("At least one priority must be True.")]
    NoPriority,

    #[error("Todo not found")]
    NotFound(TodoID),

    #[error("todo file does not hold a valid todo list: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl InternalError {
    pub fn status(&self) -> Status {
        match self {
            InternalError::NoPriority => Status::BadRequest,
            InternalError::NotFound(_) => Status::NotFound,
            InternalError::Parse(_) | InternalError::Io(_) => Status::InternalServerError,
        }
    }
}

/// Body of every error response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ErrorDetail {
    pub detail: String,
}

impl ErrorDetail {
    pub fn new(detail: impl Into<String>) -> ErrorDetail {
        ErrorDetail {
            detail: detail.into(),
        }
    }

    pub fn for_status(status: Status) -> ErrorDetail {
        ErrorDetail::new(status.reason().unwrap_or("Unknown Error"))
    }
}

impl<'r> Responder<'r, 'static> for InternalError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        let status = self.status();
        let detail = if status.class().is_server_error() {
            error!("{} {} failed: {}", request.method(), request.uri(), self);
            ErrorDetail::for_status(status)
        } else {
            if let InternalError::NotFound(todo_id) = &self {
                debug!("todo {} not found", todo_id);
            }
            ErrorDetail::new(self.to_string())
        };

        (status, Json(detail)).respond_to(request)
    }
}

pub type InternalResult<T> = Result<T, InternalError>;

#[catch(default)]
fn default_catcher(status: Status, _request: &Request) -> (Status, Json<ErrorDetail>) {
    (status, Json(ErrorDetail::for_status(status)))
}

pub fn error_catchers() -> Vec<Catcher> {
    catchers![default_catcher]
}
