//! Error types for the API client.

/// Errors that can occur when fetching from the users endpoint.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request never produced a usable response (connection failure,
    /// timeout, or a body that could not be read or decoded).
    #[error("Request failed")]
    RequestFailed,
    /// The endpoint answered with a non-success status and a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
}

impl Error {
    /// The HTTP status carried by this error, if the endpoint answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::HttpStatus { status, .. } => Some(*status),
            Error::RequestFailed => None,
        }
    }
}
