use serde::Deserialize;

/// An account followed by the queried user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Follower {
    /// The @username, without the `@`
    pub handle: String,
    pub display_name: String,
    pub description: Option<String>,
    pub avatar_url: Option<String>,
}

/// First page of accounts followed by a user
#[derive(Debug, Clone, Default)]
pub struct FollowingPage {
    pub data: Vec<Follower>,
}

/// Twitter API v2 user object
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct UserObject {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) username: String,
    pub(crate) description: Option<String>,
    pub(crate) profile_image_url: Option<String>,
}

impl From<UserObject> for Follower {
    fn from(user: UserObject) -> Self {
        Self {
            handle: user.username,
            display_name: user.name,
            // The API sends "" for an empty bio
            description: user.description.filter(|d| !d.is_empty()),
            avatar_url: user.profile_image_url,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ApiError {
    pub(crate) title: Option<String>,
    pub(crate) detail: Option<String>,
}

/// Response of `GET /2/users/by/username/:username`
#[derive(Debug, Deserialize)]
pub(crate) struct UserLookupResponse {
    pub(crate) data: Option<UserObject>,
    pub(crate) errors: Option<Vec<ApiError>>,
}

/// Response of `GET /2/users/:id/following`
#[derive(Debug, Deserialize)]
pub(crate) struct FollowingResponse {
    pub(crate) data: Option<Vec<UserObject>>,
    pub(crate) meta: Option<FollowingMeta>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FollowingMeta {
    pub(crate) result_count: Option<u64>,
    pub(crate) next_token: Option<String>,
}
