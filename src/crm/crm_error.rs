use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum CrmError {
    Network(String),
    Status(String),
    JsonParse(String),
    UnexpectedShape(String),
    NotFound,
}

impl fmt::Display for CrmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrmError::Network(msg) => write!(f, "Network error: {msg}"),
            CrmError::Status(msg) => write!(f, "CRM returned error status: {msg}"),
            CrmError::JsonParse(msg) => write!(f, "JSON parse error: {msg}"),
            CrmError::UnexpectedShape(msg) => write!(f, "Unexpected data shape: {msg}"),
            CrmError::NotFound => write!(f, "Item not found"),
        }
    }
}

impl Error for CrmError {}
