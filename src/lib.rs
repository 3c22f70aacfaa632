mod schema {
    pub mod communication {
        pub mod error;
    }
    pub mod http {
        pub mod body;
        pub mod error;
        pub mod header;
        pub mod response;
        pub mod status;
    }
    pub mod response {
        pub mod config;
    }
}
mod interface {
    pub mod communication;
    pub mod response;
}
mod implement {
    pub mod communication {
        pub mod buffer;
        pub mod stream;
    }
    pub mod response;
}


pub use crate::implement::communication::buffer::{ BufferedResponseWriter, HeaderEmission, };
pub use crate::implement::communication::stream::StreamResponseWriter;
pub use crate::implement::response::{ JSON_CONTENT_TYPE, Response, ResponseOptions, };
pub use crate::interface::communication::HttpResponseWriter;
pub use crate::interface::response::ResponseInterface;
pub use crate::schema::communication::error::ResponseWriteError;
pub use crate::schema::http::body::ResponseBody;
pub use crate::schema::http::error::{ InvalidStatusError, SendError, };
pub use crate::schema::http::header::{ HeaderEntry, ResponseHeaders, };
pub use crate::schema::http::response::SentResponse;
pub use crate::schema::http::status::{
    STATUS_TEXTS, UNKNOWN_STATUS_TEXT, ResponseStatus, StatusInput, lookup_status_text,
};
pub use crate::schema::response::config::{ ParseError, ResponseConfig, load as load_config, version_label, };


#[cfg(test)]
#[ctor::ctor]
fn mod_test_setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}
