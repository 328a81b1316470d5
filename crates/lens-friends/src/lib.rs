//! Lens Friends Library
//!
//! Discovers which accounts a Twitter user follows have a Lens Protocol
//! handle, either written directly in their profile or reachable through
//! an ENS name they advertise.

pub mod aggregator;
pub mod config;
pub mod error;
pub mod finder;
pub mod pipeline;
pub mod types;

pub use aggregator::ResultAggregator;
pub use config::Config;
pub use error::{FriendsError, Result};
pub use finder::FriendFinder;
pub use pipeline::{resolve_follower, resolve_followers, resolve_followers_with_report};
pub use types::{
    LensIdentity, ResolutionOutcome, ResolutionReport, ResolvedProfile, TwitterIdentity,
};
