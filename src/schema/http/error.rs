use crate::schema::communication::error::ResponseWriteError;

use http::header::{ InvalidHeaderName, InvalidHeaderValue, };
use thiserror::Error;

use std::string::String;


#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("The HTTP status code must be exactly 3 digits, with an optional single-line reason phrase, got {input:?}")]
pub struct InvalidStatusError {
    pub input: String,
}

impl InvalidStatusError {
    pub fn new(input: &str) -> InvalidStatusError {
        InvalidStatusError {
            input: input.to_string(),
        }
    }
}

#[derive(Error, Debug)]
pub enum SendError {
    /// Only here for the fallible signature of `serde_json::to_vec`; a body
    /// held as a `serde_json::Value` always serializes.
    #[error("Could not serialize the response body as JSON")]
    Serialization(#[from] serde_json::Error),
    #[error("Header name {name:?} is not a valid HTTP header name")]
    InvalidHeaderName {
        name: String,
        source: InvalidHeaderName,
    },
    #[error("Value for header {name:?} is not a valid HTTP header value")]
    InvalidHeaderValue {
        name: String,
        source: InvalidHeaderValue,
    },
    #[error("A structured body can only be sent as JSON")]
    StructuredBody,
    #[error("Failed to write the response")]
    Write(#[from] ResponseWriteError),
}
