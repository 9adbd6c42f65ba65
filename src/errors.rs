// errors.rs
use std::fmt;

use crate::crm::CrmError;
use crate::pdf::PdfError;

/// Errors originating from either the server logic
/// (routing, bad parameters, etc.) or downstream layers (CRM, PDF).
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    Remote(String),
    Pdf(String),
    InternalError,
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::Remote(msg) => write!(f, "Remote API Error: {msg}"),
            ServerError::Pdf(msg) => write!(f, "PDF Error: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}

impl From<CrmError> for ServerError {
    fn from(err: CrmError) -> Self {
        match err {
            CrmError::NotFound => ServerError::NotFound,
            other => ServerError::Remote(other.to_string()),
        }
    }
}

impl From<PdfError> for ServerError {
    fn from(err: PdfError) -> Self {
        ServerError::Pdf(err.to_string())
    }
}
