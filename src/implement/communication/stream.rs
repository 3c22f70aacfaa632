use crate::interface::communication::HttpResponseWriter;
use crate::schema::communication::error::ResponseWriteError;
use crate::schema::http::status::{ lookup_status_text, UNKNOWN_STATUS_TEXT, };
use crate::schema::response::config::version_label;

use http::header::{ HeaderMap, HeaderName, HeaderValue, };
use http::status::StatusCode;
use http::version::Version;
use log::{ debug, warn, };

use std::io::Write;
use std::option::Option;
use std::result::Result;
use std::string::String;
use std::vec::Vec;


/// Renders an HTTP/1.x response onto a byte stream such as stdout of a CGI
/// process. Headers are held back until the first body write or flush.
pub struct StreamResponseWriter<W: Write> {
    stream: W,
    version: Version,
    status_line: Option<String>,
    status_code: StatusCode,
    http_headers: HeaderMap,
    head_sent: bool,
}

impl<W: Write> StreamResponseWriter<W> {
    pub fn new(
        stream: W,
        version: Version,
    ) -> StreamResponseWriter<W> {
        StreamResponseWriter {
            stream,
            version,
            status_line: None,
            status_code: StatusCode::OK,
            http_headers: HeaderMap::new(),
            head_sent: false,
        }
    }

    pub fn is_head_sent(&self) -> bool {
        self.head_sent
    }

    pub fn into_inner(self) -> W {
        self.stream
    }

    fn ensure_head_pending(&self) -> Result<(), ResponseWriteError> {
        if self.head_sent {
            warn!("StreamResponseWriter - head already sent, rejecting header change");
            return Err(ResponseWriteError::HeadersAlreadySent);
        }
        Ok(())
    }

    fn send_head(&mut self) -> Result<(), ResponseWriteError> {
        if self.head_sent {
            return Ok(());
        }
        let mut head: Vec<u8> = Vec::new();
        match &self.status_line {
            Some(line) => head.extend_from_slice(line.as_bytes()),
            None => {
                let text = lookup_status_text(self.status_code.as_u16()).unwrap_or(UNKNOWN_STATUS_TEXT);
                write!(head, "HTTP/{} {} {}", version_label(self.version), self.status_code.as_u16(), text)?;
            },
        }
        head.extend_from_slice(b"\r\n");
        for (key, value) in self.http_headers.iter() {
            head.extend_from_slice(key.as_str().as_bytes());
            head.extend_from_slice(b": ");
            head.extend_from_slice(value.as_bytes());
            head.extend_from_slice(b"\r\n");
        }
        head.extend_from_slice(b"\r\n");
        self.stream.write_all(&head)?;
        self.head_sent = true;
        debug!("StreamResponseWriter::send_head - sent {} header lines", self.http_headers.len());
        Ok(())
    }
}

impl<W: Write> HttpResponseWriter for StreamResponseWriter<W> {
    fn emit_status_line(
        &mut self,
        line: &str,
    ) -> Result<(), ResponseWriteError> {
        self.ensure_head_pending()?;
        self.status_line = Some(line.to_string());
        Ok(())
    }

    fn set_status_code(
        &mut self,
        code: &StatusCode,
    ) -> () {
        if self.head_sent {
            warn!("StreamResponseWriter::set_status_code - head already sent, ignoring {}", code);
            return;
        }
        self.status_code = *code;
    }

    fn append_http_header(
        &mut self,
        key: &HeaderName,
        value: &HeaderValue,
    ) -> Result<(), ResponseWriteError> {
        self.ensure_head_pending()?;
        self.http_headers.append(key.clone(), value.clone());
        Ok(())
    }

    fn set_http_header(
        &mut self,
        key: &HeaderName,
        value: &HeaderValue,
    ) -> Result<(), ResponseWriteError> {
        self.ensure_head_pending()?;
        self.http_headers.insert(key.clone(), value.clone());
        Ok(())
    }

    fn write(
        &mut self,
        buffer: &[u8],
    ) -> Result<usize, ResponseWriteError> {
        self.send_head()?;
        self.stream.write_all(buffer)?;
        Ok(buffer.len())
    }

    fn flush_response(&mut self) -> Result<(), ResponseWriteError> {
        self.send_head()?;
        self.stream.flush()?;
        Ok(())
    }
}
