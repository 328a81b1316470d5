//! Error types for friend discovery

use std::fmt;

use twitter_client::TwitterError;

/// Errors that abort a whole discovery run.
///
/// Failures resolving a single follower never surface here.
#[derive(Debug)]
pub enum FriendsError {
    /// The queried username has no Twitter profile
    ProfileNotFound(String),
    /// The profile exists but follows nobody
    NoFollowers(String),
    /// The follower listing API is rate limiting us
    RateLimited,
    /// A required environment variable or credential is missing
    MissingConfiguration(String),
    /// Any other follower listing failure
    Twitter(TwitterError),
    Config(String),
    Serialization(String),
}

impl fmt::Display for FriendsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FriendsError::ProfileNotFound(username) => {
                write!(f, "There is no Twitter profile for the username: {}", username)
            }
            FriendsError::NoFollowers(username) => {
                write!(f, "@{} is not following anyone", username)
            }
            FriendsError::RateLimited => {
                write!(f, "Twitter API rate limit reached, try again later")
            }
            FriendsError::MissingConfiguration(name) => {
                write!(f, "{} must be defined", name)
            }
            FriendsError::Twitter(err) => write!(f, "{}", err),
            FriendsError::Config(msg) => write!(f, "Configuration error: {}", msg),
            FriendsError::Serialization(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for FriendsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FriendsError::Twitter(err) => Some(err),
            _ => None,
        }
    }
}

impl From<TwitterError> for FriendsError {
    fn from(err: TwitterError) -> Self {
        match err {
            TwitterError::NotFound(username) => FriendsError::ProfileNotFound(username),
            TwitterError::RateLimited => FriendsError::RateLimited,
            TwitterError::MissingToken => {
                FriendsError::MissingConfiguration("TWITTER_API_BEARER_TOKEN".to_string())
            }
            other => FriendsError::Twitter(other),
        }
    }
}

impl From<lens_chain_resolver::ChainError> for FriendsError {
    fn from(err: lens_chain_resolver::ChainError) -> Self {
        FriendsError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for FriendsError {
    fn from(err: serde_json::Error) -> Self {
        FriendsError::Serialization(err.to_string())
    }
}

impl From<tracing_subscriber::filter::ParseError> for FriendsError {
    fn from(err: tracing_subscriber::filter::ParseError) -> Self {
        FriendsError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, FriendsError>;
