use serde::{Deserialize, Serialize};

use super::errors::RippleError;
use super::ids::UserId;

/// A directed follow relationship: `follower_id` receives `followed_id`'s posts.
///
/// Both ids must be non-empty. Following yourself is not rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Follow {
    pub follower_id: UserId,
    pub followed_id: UserId,
}

impl Follow {
    pub fn new(follower_id: UserId, followed_id: UserId) -> Result<Self, RippleError> {
        if follower_id.is_blank() {
            return Err(RippleError::EmptyId("follower id"));
        }
        if followed_id.is_blank() {
            return Err(RippleError::EmptyId("followed id"));
        }
        Ok(Self {
            follower_id,
            followed_id,
        })
    }
}
