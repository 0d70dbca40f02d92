//! Error types for the scenariq client
//!
//! Every failure is local to one search. The variants exist for logging and
//! diagnostics; end users only ever see [`Error::user_message`].

use std::fmt;

/// Message shown to end users for any failed search
pub const SEARCH_FAILED_MESSAGE: &str = "Could not load scenic suggestions. Try again.";

/// Main error type for scenariq operations
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Base URL or other client setting is unusable
    InvalidConfiguration(String),

    /// Routing service answered with a non-success status or could not be reached
    UpstreamUnavailable(String),

    /// Payload did not have the shape of a route list
    MalformedResponse(String),
}

/// Copyable discriminant of [`Error`], kept in session state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidConfiguration,
    UpstreamUnavailable,
    MalformedResponse,
}

impl Error {
    /// The kind of failure, without its details
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidConfiguration(_) => ErrorKind::InvalidConfiguration,
            Error::UpstreamUnavailable(_) => ErrorKind::UpstreamUnavailable,
            Error::MalformedResponse(_) => ErrorKind::MalformedResponse,
        }
    }

    /// Opaque message for end-user display, identical for every kind
    pub fn user_message(&self) -> &'static str {
        SEARCH_FAILED_MESSAGE
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfiguration(msg) => {
                write!(f, "Invalid configuration: {}", msg)
            }
            Error::UpstreamUnavailable(msg) => {
                write!(f, "Routing service unavailable: {}", msg)
            }
            Error::MalformedResponse(msg) => {
                write!(f, "Malformed routing response: {}", msg)
            }
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::InvalidConfiguration => "InvalidConfiguration",
            ErrorKind::UpstreamUnavailable => "UpstreamUnavailable",
            ErrorKind::MalformedResponse => "MalformedResponse",
        };
        f.write_str(name)
    }
}

impl std::error::Error for Error {}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            Error::UpstreamUnavailable(format!("network error: {err}"))
        } else {
            Error::UpstreamUnavailable(err.to_string())
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::InvalidConfiguration(format!("bad base URL: {err}"))
    }
}

/// Convenience result type for scenariq operations
pub type Result<T> = std::result::Result<T, Error>;
