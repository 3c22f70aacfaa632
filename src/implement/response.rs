use crate::interface::communication::HttpResponseWriter;
use crate::interface::response::ResponseInterface;
use crate::schema::http::body::ResponseBody;
use crate::schema::http::error::{ InvalidStatusError, SendError, };
use crate::schema::http::header::{ HeaderEntry, ResponseHeaders, };
use crate::schema::http::response::SentResponse;
use crate::schema::http::status::{ ResponseStatus, StatusInput, };
use crate::schema::response::config::{ ResponseConfig, version_label, };

use http::header::{ CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, };
use http::status::StatusCode;
use http::version::Version;
use log::{ debug, warn, };

use std::option::Option;
use std::result::Result;
use std::string::String;
use std::vec::Vec;


pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Independently optional construction arguments; an absent field keeps the
/// default.
#[derive(Clone, Debug, Default)]
pub struct ResponseOptions {
    pub status: Option<StatusInput>,
    pub headers: Option<ResponseHeaders>,
    pub body: Option<ResponseBody>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Response {
    http_version: Version,
    status: ResponseStatus,
    headers: ResponseHeaders,
    body: ResponseBody,
}

impl Response {
    pub fn new() -> Response {
        Response::from_config(&ResponseConfig::new())
    }

    pub fn create(options: ResponseOptions) -> Result<Response, InvalidStatusError> {
        Response::create_with_config(&ResponseConfig::new(), options)
    }

    pub fn create_with_config(
        config: &ResponseConfig,
        options: ResponseOptions,
    ) -> Result<Response, InvalidStatusError> {
        let mut response = Response::from_config(config);
        if let Some(status) = options.status {
            response.set_status(status)?;
        }
        if let Some(headers) = options.headers {
            response.set_headers(headers);
        }
        if let Some(body) = options.body {
            response.set_body(body);
        }
        Ok(response)
    }

    fn from_config(config: &ResponseConfig) -> Response {
        Response {
            http_version: config.http_version,
            status: ResponseStatus::from(config.default_status),
            headers: ResponseHeaders::new(),
            body: ResponseBody::Empty,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        self.status.code
    }

    pub fn http_version(&self) -> Version {
        self.http_version
    }

    pub fn headers(&self) -> &ResponseHeaders {
        &self.headers
    }

    pub fn body(&self) -> &ResponseBody {
        &self.body
    }

    pub fn status_line(&self) -> String {
        format!(
            "HTTP/{} {} {}",
            version_label(self.http_version),
            self.status.code.as_u16(),
            self.status.text
        )
    }

    /// Emits the status line, every header and the body as-is.
    ///
    /// The body must be empty or text; a structured body is refused before
    /// anything reaches the writer, as are header names or values that are not
    /// valid HTTP.
    pub fn send(
        &self,
        writer: &mut dyn HttpResponseWriter,
    ) -> Result<SentResponse, SendError> {
        debug!("Response::send - start");
        let payload: &[u8] = match &self.body {
            ResponseBody::Empty => &[],
            ResponseBody::Text(text) => text.as_bytes(),
            ResponseBody::Structured(_) => {
                warn!("Response::send - refusing structured body without JSON encoding");
                return Err(SendError::StructuredBody);
            },
        };
        let prepared_headers = prepare_headers(&self.headers)?;

        writer.emit_status_line(self.status_line().as_str())?;
        writer.set_status_code(&self.status.code);
        let mut http_headers = HeaderMap::new();
        for (key, values) in prepared_headers {
            for (index, value) in values.into_iter().enumerate() {
                if index == 0 {
                    debug!("Response::send - setting {} - {:?}", key, value);
                    writer.set_http_header(&key, &value)?;
                    http_headers.insert(key.clone(), value);
                } else {
                    debug!("Response::send - appending {} - {:?}", key, value);
                    writer.append_http_header(&key, &value)?;
                    http_headers.append(key.clone(), value);
                }
            }
        }
        let bytes_written = writer.write_content(payload)?;
        writer.flush_response()?;
        debug!("Response::send - finish");
        Ok(
            SentResponse {
                status_code: self.status.code,
                bytes_written,
                http_headers,
            }
        )
    }

    /// Emits the body as JSON with only a JSON content type header and the
    /// status code. Headers set on the response and the reason phrase are not
    /// sent in this mode.
    pub fn send_with_json(
        &self,
        writer: &mut dyn HttpResponseWriter,
    ) -> Result<SentResponse, SendError> {
        debug!("Response::send_with_json - start");
        let payload = serde_json::to_vec(&self.body)?;

        let content_type = HeaderValue::from_static(JSON_CONTENT_TYPE);
        writer.set_http_header(&CONTENT_TYPE, &content_type)?;
        writer.set_status_code(&self.status.code);
        let bytes_written = writer.write_content(&payload)?;
        writer.flush_response()?;

        let mut http_headers = HeaderMap::new();
        http_headers.insert(CONTENT_TYPE, content_type);
        debug!("Response::send_with_json - finish");
        Ok(
            SentResponse {
                status_code: self.status.code,
                bytes_written,
                http_headers,
            }
        )
    }
}

impl Default for Response {
    fn default() -> Self {
        Response::new()
    }
}

impl ResponseInterface for Response {
    fn set_headers(&mut self, headers: ResponseHeaders) -> () {
        self.headers = headers;
    }

    fn get_status(&self) -> u16 {
        self.status.code.as_u16()
    }

    fn get_status_text(&self) -> &str {
        self.status.text.as_str()
    }

    fn set_status(&mut self, status: StatusInput) -> Result<(), InvalidStatusError> {
        self.status = ResponseStatus::resolve(status)?;
        debug!("Response::set_status - {} {}", self.status.code.as_u16(), self.status.text);
        Ok(())
    }

    fn set_body(&mut self, content: ResponseBody) -> () {
        self.body = content;
    }
}

fn prepare_headers(
    headers: &ResponseHeaders,
) -> Result<Vec<(HeaderName, Vec<HeaderValue>)>, SendError> {
    headers.iter().map(|(name, entry)| -> Result<(HeaderName, Vec<HeaderValue>), SendError> {
        let key = HeaderName::from_bytes(name.as_bytes()).map_err(|source| {
            SendError::InvalidHeaderName { name: name.clone(), source }
        })?;
        let raw_values: Vec<&str> = match entry {
            HeaderEntry::Single(value) => vec![value.as_str()],
            HeaderEntry::Multiple(values) => values.iter().map(String::as_str).collect(),
        };
        let values = raw_values.into_iter().map(|value| {
            HeaderValue::from_str(value).map_err(|source| {
                SendError::InvalidHeaderValue { name: name.clone(), source }
            })
        }).collect::<Result<Vec<HeaderValue>, SendError>>()?;
        Ok((key, values))
    }).collect()
}
