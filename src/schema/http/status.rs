use crate::schema::http::error::InvalidStatusError;

use http::status::StatusCode;

use std::convert::From;
use std::result::Result;
use std::str::FromStr;
use std::string::String;


pub const UNKNOWN_STATUS_TEXT: &str = "Unknown";

/// Registered status codes and their reason phrases, sorted by code.
pub static STATUS_TEXTS: &[(u16, &str)] = &[
    (100, "Continue"),
    (101, "Switching Protocols"),
    (102, "Processing"),
    (200, "OK"),
    (201, "Created"),
    (202, "Accepted"),
    (203, "Non-Authoritative Information"),
    (204, "No Content"),
    (205, "Reset Content"),
    (206, "Partial Content"),
    (207, "Multi-Status"), // RFC 4918
    (208, "Already Reported"), // RFC 5842
    (226, "IM Used"), // RFC 3229
    (300, "Multiple Choices"),
    (301, "Moved Permanently"),
    (302, "Found"),
    (303, "See Other"),
    (304, "Not Modified"),
    (305, "Use Proxy"),
    (307, "Temporary Redirect"),
    (308, "Permanent Redirect"),
    (400, "Bad Request"),
    (401, "Unauthorized"),
    (402, "Payment Required"),
    (403, "Forbidden"),
    (404, "Not Found"),
    (405, "Method Not Allowed"),
    (406, "Not Acceptable"),
    (407, "Proxy Authentication Required"),
    (408, "Request Timeout"),
    (409, "Conflict"),
    (410, "Gone"),
    (411, "Length Required"),
    (412, "Precondition failed"),
    (413, "Request Entity Too Large"),
    (414, "Request-URI Too Long"),
    (415, "Unsupported Media Type"),
    (416, "Requested Range Not Satisfiable"),
    (417, "Expectation Failed"),
    (418, "I'm a teapot"), // RFC 2324
    (421, "Misdirected Request"), // RFC 7540
    (422, "Unprocessable Entity"), // RFC 4918
    (423, "Locked"), // RFC 4918
    (424, "Failed Dependency"), // RFC 4918
    (426, "Upgrade Required"),
    (428, "Precondition Required"), // RFC 6585
    (429, "Too Many Requests"), // RFC 6585
    (431, "Request Header Fields Too Large"), // RFC 6585
    (451, "Unavailable For Legal Reasons"),
    (500, "Internal Server Error"),
    (501, "Not Implemented"),
    (502, "Bad Gateway"),
    (503, "Service Unavailable"),
    (504, "Gateway Timeout"),
    (505, "HTTP Version not supported"),
    (506, "Variant Also Negotiates"),
    (507, "Insufficient Storage"), // RFC 4918
    (508, "Loop Detected"), // RFC 5842
    (509, "Bandwidth Limit Exceeded"), // non-standard
    (510, "Not extended"),
    (511, "Network Authentication Required"), // RFC 6585
];

pub fn lookup_status_text(code: u16) -> Option<&'static str> {
    STATUS_TEXTS
        .binary_search_by_key(&code, |(key, _)| *key)
        .ok()
        .map(|index| STATUS_TEXTS[index].1)
}

/// Raw status as supplied by a caller, before range validation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusInput {
    NumericCode(u16),
    CodeWithText(u16, String),
}

impl From<u16> for StatusInput {
    fn from(code: u16) -> Self {
        StatusInput::NumericCode(code)
    }
}

impl From<StatusCode> for StatusInput {
    fn from(code: StatusCode) -> Self {
        StatusInput::NumericCode(code.as_u16())
    }
}

impl FromStr for StatusInput {
    type Err = InvalidStatusError;

    /// Accepts either a bare code such as `"404"` or a code followed by its own
    /// reason phrase such as `"403 I can't let you do that, Dave"`.
    ///
    /// A bare code is read as a number, so `"0200"` is 200 and takes the text
    /// registered for 200.
    fn from_str(input: &str) -> Result<Self, Self::Err> {
        if !input.is_empty() && input.bytes().all(|byte| byte.is_ascii_digit()) {
            let code = input.parse::<u16>().map_err(|_| InvalidStatusError::new(input))?;
            return Ok(StatusInput::NumericCode(code));
        }
        // Only a strict decimal code is accepted before the space; "200x Foo" fails.
        match input.split_once(' ') {
            Some((code_part, text)) => {
                let code = code_part.parse::<u16>().map_err(|_| InvalidStatusError::new(input))?;
                Ok(StatusInput::CodeWithText(code, text.to_string()))
            },
            None => Err(InvalidStatusError::new(input)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResponseStatus {
    pub code: StatusCode,
    pub text: String,
}

impl ResponseStatus {
    pub fn resolve(input: StatusInput) -> Result<ResponseStatus, InvalidStatusError> {
        let (raw_code, explicit_text) = match input {
            StatusInput::NumericCode(code) => (code, None),
            StatusInput::CodeWithText(code, text) => (code, Some(text)),
        };
        let code = StatusCode::from_u16(raw_code)
            .map_err(|_| InvalidStatusError::new(&raw_code.to_string()))?;
        match explicit_text {
            Some(text) if text.chars().any(|c| c.is_control() && c != '\t') => {
                Err(InvalidStatusError::new(&format!("{} {}", raw_code, text)))
            },
            Some(text) => Ok(ResponseStatus { code, text }),
            None => Ok(ResponseStatus::from(code)),
        }
    }
}

impl From<StatusCode> for ResponseStatus {
    fn from(code: StatusCode) -> Self {
        ResponseStatus {
            code,
            text: lookup_status_text(code.as_u16()).unwrap_or(UNKNOWN_STATUS_TEXT).to_string(),
        }
    }
}

impl Default for ResponseStatus {
    fn default() -> Self {
        ResponseStatus::from(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::boxed::Box;
    use std::error::Error;

    #[test]
    fn test_status_table_is_sorted() -> Result<(), Box<dyn Error>> {
        for pair in STATUS_TEXTS.windows(2) {
            assert!(pair[0].0 < pair[1].0, "Status table out of order at {}", pair[1].0);
        }
        Ok(())
    }

    #[test]
    fn test_lookup_status_text() -> Result<(), Box<dyn Error>> {
        assert_eq!(Some("OK"), lookup_status_text(200), "Wrong text for 200");
        assert_eq!(Some("I'm a teapot"), lookup_status_text(418), "Wrong text for 418");
        assert_eq!(Some("Bandwidth Limit Exceeded"), lookup_status_text(509), "Wrong text for 509");
        assert_eq!(Some("Precondition failed"), lookup_status_text(412), "Wrong text for 412");
        assert_eq!(None, lookup_status_text(306), "Unregistered code has a text");
        assert_eq!(None, lookup_status_text(999), "Unregistered code has a text");
        Ok(())
    }

    #[test]
    fn test_parse_digits_only() -> Result<(), Box<dyn Error>> {
        assert_eq!(StatusInput::NumericCode(404), "404".parse::<StatusInput>()?, "Digits not parsed as a code");
        Ok(())
    }

    #[test]
    fn test_parse_code_with_text() -> Result<(), Box<dyn Error>> {
        assert_eq!(
            StatusInput::CodeWithText(403, String::from("I can't let you do that, Dave")),
            "403 I can't let you do that, Dave".parse::<StatusInput>()?,
            "Text not split on the first space"
        );
        assert_eq!(
            StatusInput::CodeWithText(200, String::new()),
            "200 ".parse::<StatusInput>()?,
            "Trailing space not treated as empty text"
        );
        Ok(())
    }

    #[test]
    fn test_parse_rejects_non_numeric_code() -> Result<(), Box<dyn Error>> {
        assert!("".parse::<StatusInput>().is_err(), "Empty status was accepted");
        assert!("teapot".parse::<StatusInput>().is_err(), "Word status was accepted");
        assert!("2x0 Foo".parse::<StatusInput>().is_err(), "Malformed code was accepted");
        assert!(" 200 Foo".parse::<StatusInput>().is_err(), "Leading space was accepted");
        assert!("99999999".parse::<StatusInput>().is_err(), "Oversized code was accepted");
        Ok(())
    }

    #[test]
    fn test_resolve_range() -> Result<(), Box<dyn Error>> {
        assert!(ResponseStatus::resolve(StatusInput::NumericCode(42)).is_err(), "42 was accepted");
        assert!(ResponseStatus::resolve(StatusInput::NumericCode(1000)).is_err(), "1000 was accepted");
        assert!(
            ResponseStatus::resolve(StatusInput::CodeWithText(42, String::from("Foo"))).is_err(),
            "42 with text was accepted"
        );
        let status = ResponseStatus::resolve(StatusInput::CodeWithText(420, String::from("Foo")))?;
        assert_eq!(420, status.code.as_u16(), "Wrong code");
        assert_eq!("Foo", status.text, "Wrong text");
        Ok(())
    }

    #[test]
    fn test_resolve_rejects_control_characters_in_text() -> Result<(), Box<dyn Error>> {
        for text in vec!["OK\r\nSet-Cookie: session=evil", "OK\n", "OK\r", "O\u{0}K", "OK\u{7f}"] {
            assert!(
                ResponseStatus::resolve(StatusInput::CodeWithText(200, String::from(text))).is_err(),
                "Text {:?} was accepted",
                text
            );
        }
        let status = ResponseStatus::resolve(StatusInput::CodeWithText(200, String::from("Fine\tthanks")))?;
        assert_eq!("Fine\tthanks", status.text, "Tab in text was not kept");
        Ok(())
    }

    #[test]
    fn test_parse_leading_zero_code() -> Result<(), Box<dyn Error>> {
        let status = ResponseStatus::resolve("0200".parse::<StatusInput>()?)?;
        assert_eq!(200, status.code.as_u16(), "Leading zero changed the code");
        assert_eq!("OK", status.text, "Leading zero code did not use the table");
        assert!("200x Foo".parse::<StatusInput>().is_err(), "Non-decimal code with text was accepted");
        Ok(())
    }

    #[test]
    fn test_default_is_internal_server_error() -> Result<(), Box<dyn Error>> {
        let status = ResponseStatus::default();
        assert_eq!(StatusCode::INTERNAL_SERVER_ERROR, status.code, "Wrong default code");
        assert_eq!("Internal Server Error", status.text, "Wrong default text");
        Ok(())
    }

    #[test]
    fn test_resolve_unknown_code() -> Result<(), Box<dyn Error>> {
        let status = ResponseStatus::resolve(StatusInput::NumericCode(999))?;
        assert_eq!("Unknown", status.text, "Unregistered code not marked unknown");
        Ok(())
    }
}
