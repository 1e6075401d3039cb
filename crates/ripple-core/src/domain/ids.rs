//! Domain identifiers.
//!
//! # ULID ベースの PostId
//! Post の ID には ULID (Universally Unique Lexicographically Sortable
//! Identifier) を使用します。
//! - **時刻でソート可能**: timestamp が先頭にあるため、生成順序でソートできる
//! - **分散生成可能**: 調整なしで複数ノードで生成できる
//!
//! User の ID は外部（リクエストヘッダ等）から与えられる不透明な文字列なので、
//! newtype で包むだけにしています。

use serde::{Deserialize, Serialize};
use std::fmt;
use ulid::Ulid;

/// Identifier of a Post.
///
/// Wraps a ULID so ids generated later compare greater, which also makes the
/// id usable as a stable tie-breaker in ordered collections.
#[repr(transparent)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PostId(Ulid);

impl PostId {
    pub fn from_ulid(ulid: Ulid) -> Self {
        Self(ulid)
    }

    pub fn as_ulid(&self) -> Ulid {
        self.0
    }
}

impl From<Ulid> for PostId {
    fn from(ulid: Ulid) -> Self {
        Self::from_ulid(ulid)
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "post-{}", self.0)
    }
}

/// Identifier of a user.
///
/// Opaque and caller-supplied; the core never mints these.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl From<&str> for UserId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_ids_are_sortable() {
        // ULID は時刻ベースなので、生成順序でソート可能
        let id1 = PostId::from_ulid(Ulid::new());
        std::thread::sleep(std::time::Duration::from_millis(2));
        let id2 = PostId::from_ulid(Ulid::new());
        std::thread::sleep(std::time::Duration::from_millis(2));
        let id3 = PostId::from_ulid(Ulid::new());

        assert!(id1 < id2);
        assert!(id2 < id3);
        assert!(id1 < id3);
    }

    #[test]
    fn post_ids_can_be_serialized() {
        let id = PostId::from_ulid(Ulid::new());

        let serialized = serde_json::to_string(&id).unwrap();
        let deserialized: PostId = serde_json::from_str(&serialized).unwrap();

        assert_eq!(id, deserialized);
    }

    #[test]
    fn post_id_display_has_prefix() {
        let id = PostId::from_ulid(Ulid::new());
        assert!(id.to_string().starts_with("post-"));
    }

    #[test]
    fn user_id_blank_detection() {
        assert!(UserId::new("").is_blank());
        assert!(UserId::new("   ").is_blank());
        assert!(!UserId::new("alice").is_blank());
    }
}
