use thiserror::Error;


#[derive(Error, Debug)]
pub enum ResponseWriteError {
    #[error("IO error on writing response")]
    Io(#[from] std::io::Error),
    #[error("Error on writing response: code {error_code}")]
    Rejected {
        error_code: i32,
    },
    #[error("Response headers were already sent")]
    HeadersAlreadySent,
}
