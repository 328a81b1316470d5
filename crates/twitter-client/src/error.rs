//! Error types for the Twitter client

use std::fmt;

#[derive(Debug)]
pub enum TwitterError {
    Http(Box<reqwest::Error>),
    /// No account exists for the username
    NotFound(String),
    /// HTTP 429 from either endpoint
    RateLimited,
    /// No bearer token configured and none supplied for the call
    MissingToken,
    /// Token rejected (HTTP 401/403)
    Unauthorized(u16),
    Status(u16),
}

impl fmt::Display for TwitterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TwitterError::Http(err) => write!(f, "HTTP error: {}", err),
            TwitterError::NotFound(username) => {
                write!(f, "No Twitter profile for username: {}", username)
            }
            TwitterError::RateLimited => write!(f, "Twitter API rate limit reached"),
            TwitterError::MissingToken => write!(f, "No Twitter API bearer token available"),
            TwitterError::Unauthorized(code) => {
                write!(f, "Twitter API rejected credentials (status {})", code)
            }
            TwitterError::Status(code) => write!(f, "Twitter API returned status {}", code),
        }
    }
}

impl std::error::Error for TwitterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TwitterError::Http(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for TwitterError {
    fn from(err: reqwest::Error) -> Self {
        TwitterError::Http(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, TwitterError>;
