use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

/// Custom error types for the phash library
#[derive(Error, Debug)]
pub enum Error {
    /// I/O operation error (file reads, response body reads)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image decoding error
    #[error("Image decode error: {0}")]
    Decode(#[from] image::ImageError),

    /// HTTP request could not be constructed
    #[error("Request setup failed: {0}")]
    Request(#[source] reqwest::Error),

    /// Transport-level failure (connection, TLS, timeout)
    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// Server answered with a non-2xx status
    #[error("Bad HTTP status: {0}")]
    BadStatus(reqwest::StatusCode),
}
