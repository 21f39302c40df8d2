use error_location::ErrorLocation;
use std::panic::Location;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during API calls
#[derive(Error, Debug)]
pub enum ClientError {
    /// The request never produced a response (connect, DNS, body read)
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-2xx status
    #[error("API error: {detail} (status: {status}) {location}")]
    Api {
        status: u16,
        detail: String,
        location: ErrorLocation,
    },

    /// The backend answered 2xx but the body has the wrong shape
    #[error("Malformed response: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error reading {path}: {source} {location}")]
    Io {
        path: PathBuf,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        ClientError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create an API error with location
    #[track_caller]
    pub fn api_error(status: u16, detail: String) -> Self {
        ClientError::Api {
            status,
            detail,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn from_io(path: PathBuf, err: std::io::Error) -> Self {
        ClientError::Io {
            path,
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// HTTP status for rejections by the backend, None for local or transport failures
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True when no response was received at all
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Http { .. })
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
