use crate::interface::communication::HttpResponseWriter;
use crate::schema::communication::error::ResponseWriteError;

use http::header::{ CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, };
use http::status::StatusCode;
use log::trace;
use mime::Mime;

use std::borrow::Cow;
use std::option::Option;
use std::result::Result;
use std::string::String;
use std::vec::Vec;


#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderEmission {
    pub name: HeaderName,
    pub value: HeaderValue,
    pub replace: bool,
}

/// Keeps everything a response emits in memory, in emission order.
#[derive(Debug, Default)]
pub struct BufferedResponseWriter {
    pub status_line: Option<String>,
    pub status_code: Option<StatusCode>,
    pub emissions: Vec<HeaderEmission>,
    pub http_headers: HeaderMap,
    pub body: Vec<u8>,
    pub flush_count: usize,
}

impl BufferedResponseWriter {
    pub fn new() -> BufferedResponseWriter {
        BufferedResponseWriter::default()
    }

    pub fn content_type(&self) -> Option<Mime> {
        self.http_headers
            .get(CONTENT_TYPE)?
            .to_str()
            .ok()?
            .parse::<Mime>()
            .ok()
    }

    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

impl HttpResponseWriter for BufferedResponseWriter {
    fn emit_status_line(
        &mut self,
        line: &str,
    ) -> Result<(), ResponseWriteError> {
        trace!("BufferedResponseWriter::emit_status_line - {}", line);
        self.status_line = Some(line.to_string());
        Ok(())
    }

    fn set_status_code(
        &mut self,
        code: &StatusCode,
    ) -> () {
        self.status_code = Some(*code);
    }

    fn append_http_header(
        &mut self,
        key: &HeaderName,
        value: &HeaderValue,
    ) -> Result<(), ResponseWriteError> {
        self.emissions.push(HeaderEmission { name: key.clone(), value: value.clone(), replace: false });
        self.http_headers.append(key.clone(), value.clone());
        Ok(())
    }

    fn set_http_header(
        &mut self,
        key: &HeaderName,
        value: &HeaderValue,
    ) -> Result<(), ResponseWriteError> {
        self.emissions.push(HeaderEmission { name: key.clone(), value: value.clone(), replace: true });
        self.http_headers.insert(key.clone(), value.clone());
        Ok(())
    }

    fn write(
        &mut self,
        buffer: &[u8],
    ) -> Result<usize, ResponseWriteError> {
        self.body.extend_from_slice(buffer);
        Ok(buffer.len())
    }

    fn flush_response(&mut self) -> Result<(), ResponseWriteError> {
        self.flush_count += 1;
        Ok(())
    }
}
