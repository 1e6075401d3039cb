//! Post model: immutable, validated at creation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::RippleError;
use super::ids::{PostId, UserId};

/// Maximum post length, counted in characters (not bytes).
pub const MAX_CONTENT_CHARS: usize = 280;

/// A single authored content item. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub author_id: UserId,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Build a post, enforcing the content rules.
    ///
    /// Content is stored exactly as given; a post of exactly 280 characters
    /// passes unmodified.
    pub fn new(
        id: PostId,
        author_id: UserId,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Result<Self, RippleError> {
        if author_id.is_blank() {
            return Err(RippleError::EmptyId("author id"));
        }
        let content = content.into();
        validate_content(&content)?;
        Ok(Self {
            id,
            author_id,
            content,
            created_at,
        })
    }
}

fn validate_content(content: &str) -> Result<(), RippleError> {
    if content.trim().is_empty() {
        return Err(RippleError::BlankContent);
    }
    let chars = content.chars().count();
    if chars > MAX_CONTENT_CHARS {
        return Err(RippleError::ContentTooLong(chars));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use ulid::Ulid;

    fn post(content: &str) -> Result<Post, RippleError> {
        Post::new(
            PostId::from_ulid(Ulid::new()),
            UserId::new("alice"),
            content,
            Utc::now(),
        )
    }

    #[test]
    fn accepts_ordinary_content() {
        let p = post("hello, world").unwrap();
        assert_eq!(p.content, "hello, world");
    }

    #[test]
    fn accepts_exactly_280_chars_unmodified() {
        let content = "a".repeat(280);
        let p = post(&content).unwrap();
        assert_eq!(p.content, content);
    }

    #[test]
    fn rejects_281_chars() {
        let content = "a".repeat(281);
        let err = post(&content).unwrap_err();
        assert!(matches!(err, RippleError::ContentTooLong(281)));
    }

    #[test]
    fn counts_characters_not_bytes() {
        // 280 x 3-byte characters is still 280 characters
        let content = "あ".repeat(280);
        assert!(post(&content).is_ok());
    }

    #[rstest]
    #[case::empty("")]
    #[case::spaces("   ")]
    #[case::newline("\n")]
    fn rejects_blank_content(#[case] content: &str) {
        let err = post(content).unwrap_err();
        assert!(matches!(err, RippleError::BlankContent));
    }

    #[test]
    fn rejects_blank_author() {
        let err = Post::new(
            PostId::from_ulid(Ulid::new()),
            UserId::new("  "),
            "hi",
            Utc::now(),
        )
        .unwrap_err();
        assert!(matches!(err, RippleError::EmptyId("author id")));
    }
}
