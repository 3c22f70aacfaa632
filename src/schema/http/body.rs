use serde::Serialize;
use serde_json::Value;

use std::convert::From;
use std::string::String;


#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Empty,
    Text(String),
    Structured(Value),
}

impl Default for ResponseBody {
    fn default() -> Self {
        ResponseBody::Empty
    }
}

impl From<&str> for ResponseBody {
    fn from(text: &str) -> Self {
        ResponseBody::Text(text.to_string())
    }
}

impl From<String> for ResponseBody {
    fn from(text: String) -> Self {
        ResponseBody::Text(text)
    }
}

impl From<Value> for ResponseBody {
    fn from(value: Value) -> Self {
        ResponseBody::Structured(value)
    }
}

impl<T: Into<ResponseBody>> From<Option<T>> for ResponseBody {
    fn from(content: Option<T>) -> Self {
        match content {
            Some(body) => body.into(),
            None => ResponseBody::Empty,
        }
    }
}
