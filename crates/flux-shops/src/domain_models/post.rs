//! Blog post model

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use strum::{Display, EnumIter, EnumString};
use uuid::Uuid;

/// Minutes subtracted from "now" when a post is created locally
pub const NEW_POST_AGE_MINUTES: i64 = 10;

#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub content: String,
    pub user_id: Option<String>,
    pub date: DateTime<Utc>,
    pub reactions: Reactions,
}

impl Post {
    /// Prepare a locally authored post: fresh id, dated a few minutes back
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        user_id: Option<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            content: content.into(),
            user_id,
            date: now - Duration::minutes(NEW_POST_AGE_MINUTES),
            reactions: Reactions::default(),
        }
    }
}

/// Reaction counters shown under a post
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reactions {
    pub heart: u32,
    pub thumbs_up: u32,
}

impl Reactions {
    pub fn count(&self, kind: ReactionKind) -> u32 {
        match kind {
            ReactionKind::Heart => self.heart,
            ReactionKind::ThumbsUp => self.thumbs_up,
        }
    }

    /// Copy with one more reaction of `kind`
    pub fn with_added(self, kind: ReactionKind) -> Self {
        match kind {
            ReactionKind::Heart => Self {
                heart: self.heart.saturating_add(1),
                ..self
            },
            ReactionKind::ThumbsUp => Self {
                thumbs_up: self.thumbs_up.saturating_add(1),
                ..self
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
#[strum(serialize_all = "camelCase")]
pub enum ReactionKind {
    Heart,
    ThumbsUp,
}

/// Post as delivered by the blog backend
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemotePost {
    #[serde(deserialize_with = "crate::domain_models::id_from_number_or_string")]
    pub id: String,
    #[serde(deserialize_with = "crate::domain_models::id_from_number_or_string")]
    pub user_id: String,
    pub title: String,
    pub body: String,
}

impl RemotePost {
    /// Local post with zeroed reactions and the given date
    pub fn into_post(self, date: DateTime<Utc>) -> Post {
        Post {
            id: self.id,
            title: self.title,
            content: self.body,
            user_id: Some(self.user_id),
            date,
            reactions: Reactions::default(),
        }
    }
}
