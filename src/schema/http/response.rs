use http::header::HeaderMap;
use http::status::StatusCode;


/// What a send put on the wire, as reported back to the caller.
#[derive(Debug)]
pub struct SentResponse {
    pub status_code: StatusCode,
    pub bytes_written: usize,
    pub http_headers: HeaderMap,
}
