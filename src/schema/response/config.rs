use configparser::ini::Ini;
use http::status::StatusCode;
use http::version::Version;

use std::convert::TryFrom;
use std::error::Error;
use std::fmt;
use std::path::Path;
use std::result::Result;
use std::string::String;


#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ResponseConfig {
    pub http_version: Version,
    pub default_status: StatusCode,
}

impl ResponseConfig {
    pub fn new() -> ResponseConfig {
        ResponseConfig {
            http_version: Version::HTTP_11,
            default_status: StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl Default for ResponseConfig {
    fn default() -> Self {
        ResponseConfig::new()
    }
}

/// Numeric label used in a status line, e.g. `1.1` in `HTTP/1.1 200 OK`.
pub fn version_label(version: Version) -> &'static str {
    if version == Version::HTTP_09 {
        "0.9"
    } else if version == Version::HTTP_10 {
        "1.0"
    } else if version == Version::HTTP_2 {
        "2.0"
    } else if version == Version::HTTP_3 {
        "3.0"
    } else {
        "1.1"
    }
}

fn parse_version(label: &str) -> Result<Version, ParseError> {
    match label.trim() {
        "1.0" => Ok(Version::HTTP_10),
        "1.1" => Ok(Version::HTTP_11),
        "2.0" | "2" => Ok(Version::HTTP_2),
        other => Err(ParseError::from(format!("unsupported http_version {}", other))),
    }
}

pub fn load(path: &Path) -> Result<ResponseConfig, ParseError> {
    let mut ini = Ini::new();
    ini.load(path)?;
    return parse(&ini);
}

fn parse(ini: &Ini) -> Result<ResponseConfig, ParseError> {
    let mut config = ResponseConfig::new();
    for section_name in &(ini.sections()) {
        if section_name.to_lowercase() != "response" {
            continue;
        }
        if let Some(version) = ini.get(section_name.as_str(), "http_version") {
            config.http_version = parse_version(version.as_str())?;
        }
        if let Some(status) = ini.getuint(section_name.as_str(), "default_status")? {
            config.default_status = u16::try_from(status)
                .ok()
                .and_then(|code| StatusCode::from_u16(code).ok())
                .ok_or_else(|| ParseError::from(format!("default_status {} is not a 3 digit code", status)))?;
        }
    }
    return Ok(config);
}

#[derive(Debug)]
pub struct ParseError {
    reason: String,
}

impl From<String> for ParseError {
    fn from(reason: String) -> Self {
        return ParseError { reason };
    }
}

impl Error for ParseError {}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResponseConfig parsing failed: {}", self.reason)
    }
}
