//! Blog post actions

use super::Action;
use crate::domain_models::{Post, ReactionKind};
use chrono::Utc;

#[derive(Debug, Clone, PartialEq)]
pub enum PostsAction {
    /// Append a prepared post, see [`post_added`]
    PostAdded(Post),
    ReactionAdded {
        post_id: String,
        reaction: ReactionKind,
    },

    // Dispatched by the fetch_posts thunk
    FetchPending,
    /// Posts already stamped with dates and zeroed reactions
    FetchFulfilled(Vec<Post>),
    FetchRejected(String),
}

/// Prepare a locally authored post
pub fn post_added(
    title: impl Into<String>,
    content: impl Into<String>,
    user_id: Option<String>,
) -> Action {
    Action::Posts(PostsAction::PostAdded(Post::new(
        title,
        content,
        user_id,
        Utc::now(),
    )))
}

pub fn reaction_added(post_id: impl Into<String>, reaction: ReactionKind) -> Action {
    Action::Posts(PostsAction::ReactionAdded {
        post_id: post_id.into(),
        reaction,
    })
}
