pub mod brochure;
pub mod images;
pub mod sheet;
pub mod wrap;

use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum PdfError {
    Http(String),
}

impl fmt::Display for PdfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PdfError::Http(msg) => write!(f, "Image fetch failed: {msg}"),
        }
    }
}

impl Error for PdfError {}
