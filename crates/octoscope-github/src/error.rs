//! User-facing lookup failures.

use thiserror::Error;

/// Why a profile lookup produced no profile.
///
/// `Display` gives the title; [`LookupError::message`] gives the longer text
/// shown underneath it.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupError {
    /// HTTP 404.
    #[error("No results found!")]
    NotFound,

    /// HTTP 403.
    #[error("Rate limit exceeded")]
    RateLimited,

    /// HTTP 500.
    #[error("Server error")]
    ServerError,

    /// Any other non-2xx status.
    #[error("Something went wrong")]
    UnexpectedStatus(u16),

    /// No usable response: transport failure or an unparseable success body.
    #[error("Connection error")]
    ConnectionError,
}

impl LookupError {
    /// Map a response status to an error. `None` for the 2xx success range.
    pub fn for_status(status: u16) -> Option<Self> {
        match status {
            200..=299 => None,
            404 => Some(LookupError::NotFound),
            403 => Some(LookupError::RateLimited),
            500 => Some(LookupError::ServerError),
            other => Some(LookupError::UnexpectedStatus(other)),
        }
    }

    pub fn title(&self) -> String {
        self.to_string()
    }

    pub fn message(&self) -> String {
        match self {
            LookupError::NotFound => "We couldn't find any GitHub users matching your search. \
                Please double-check the username and try again."
                .to_string(),
            LookupError::RateLimited => {
                "Too many requests. Please wait a moment and try again.".to_string()
            }
            LookupError::ServerError => {
                "GitHub seems to be having issues right now. Please try again later.".to_string()
            }
            LookupError::UnexpectedStatus(code) => {
                format!("Unexpected error ({code}). Please try again.")
            }
            LookupError::ConnectionError => {
                "Please check your internet connection and try again.".to_string()
            }
        }
    }
}
