use std::string::{FromUtf16Error, FromUtf8Error};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Expected 6 bytes for a hardware address, received `{0}`")]
    InvalidLength(usize),
    #[error("Malformed hex hardware address: {0}")]
    MalformedHex(String),
    #[error("No interface named `{0}` with a usable hardware address")]
    NotFound(String),
    #[error("Failed to execute `{call}`. Received error code `{code}`")]
    PlatformError { call: String, code: i32 },
    #[error("Cryptographic entropy source unavailable: {0}")]
    EntropyUnavailable(String),
    #[error("Failed to parse bytes into UTF-8 characters. `{0}`")]
    ParseUtf8Error(FromUtf8Error),
    #[error("Failed to parse bytes into UTF-16 characters. `{0}`")]
    ParseUtf16Error(FromUtf16Error),
}

impl Error {
    pub(crate) fn platform(call: impl Into<String>, code: i32) -> Self {
        Error::PlatformError {
            call: call.into(),
            code,
        }
    }
}

impl From<FromUtf8Error> for Error {
    fn from(error: FromUtf8Error) -> Self {
        Error::ParseUtf8Error(error)
    }
}

impl From<FromUtf16Error> for Error {
    fn from(error: FromUtf16Error) -> Self {
        Error::ParseUtf16Error(error)
    }
}
