use crate::schema::http::body::ResponseBody;
use crate::schema::http::error::InvalidStatusError;
use crate::schema::http::header::ResponseHeaders;
use crate::schema::http::status::StatusInput;

use std::result::Result;


pub trait ResponseInterface {
    /// Replaces every header previously set. An entry is either a single value
    /// or a list of values emitted as repeated header lines.
    fn set_headers(&mut self, headers: ResponseHeaders) -> ();

    fn get_status(&self) -> u16;

    /// Human readable reason phrase, e.g. `OK` for 200.
    fn get_status_text(&self) -> &str;

    /// Sets the status code together with its reason phrase. A bare code takes
    /// its phrase from the registered status table, or `Unknown` if it has none.
    fn set_status(&mut self, status: StatusInput) -> Result<(), InvalidStatusError>;

    /// Accepts `"404"` or a code with its own phrase such as
    /// `"403 I can't let you do that, Dave"`.
    fn set_status_from_str(&mut self, status: &str) -> Result<(), InvalidStatusError> {
        self.set_status(status.parse::<StatusInput>()?)
    }

    fn set_body(&mut self, content: ResponseBody) -> ();
}
