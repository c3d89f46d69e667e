use std::fmt;

use reqwest::StatusCode;

/// Failure of a request against the Spotify Web API.
#[derive(Debug)]
pub enum LoaderError {
    /// The request never produced a usable response: connection, timeout or
    /// a body that could not be decoded.
    Transport(reqwest::Error),
    /// The server answered with a status the caller does not accept.
    Server(StatusCode),
    /// No session token was available to authorize the request.
    Unauthenticated,
}

impl fmt::Display for LoaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoaderError::Transport(err) => write!(f, "{err}"),
            LoaderError::Server(status) => {
                write!(f, "Request failed with status code {}", status.as_u16())
            }
            LoaderError::Unauthenticated => write!(f, "No session token available"),
        }
    }
}

impl std::error::Error for LoaderError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LoaderError::Transport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for LoaderError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => LoaderError::Server(status),
            None => LoaderError::Transport(err),
        }
    }
}

impl LoaderError {
    /// The message shown to the user for this failure.
    pub fn user_message(&self) -> String {
        format!("ERROR: {self}")
    }
}
