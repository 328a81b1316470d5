//! Twitter API v2 client
//!
//! Looks up a user by username and lists the accounts they follow,
//! carrying the profile fields needed to spot Lens handles and ENS names.
//! Username lookups are cached using a moka async cache.

mod client;
mod error;
mod types;

pub use client::{FollowerLister, TwitterClient};
pub use error::{Result, TwitterError};
pub use types::{Follower, FollowingPage};
