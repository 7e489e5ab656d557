//! Selectors
//!
//! Read-only views over the blog state. They borrow from a snapshot obtained
//! with `Store::state()`.

use crate::domain_models::{FetchStatus, Post, User};
use crate::state::BlogState;

pub fn select_all_posts(state: &BlogState) -> &[Post] {
    &state.posts.posts
}

/// Post ids, newest first
pub fn select_post_ids(state: &BlogState) -> Vec<&str> {
    let mut posts: Vec<&Post> = state.posts.posts.iter().collect();
    posts.sort_by(|a, b| b.date.cmp(&a.date));
    posts.into_iter().map(|post| post.id.as_str()).collect()
}

pub fn posts_status(state: &BlogState) -> FetchStatus {
    state.posts.status
}

pub fn posts_error(state: &BlogState) -> Option<&str> {
    state.posts.error.as_deref()
}

pub fn select_post_by_id<'a>(state: &'a BlogState, post_id: &str) -> Option<&'a Post> {
    state.posts.posts.iter().find(|post| post.id == post_id)
}

pub fn select_all_users(state: &BlogState) -> &[User] {
    &state.users.users
}

pub fn select_user_by_id<'a>(state: &'a BlogState, user_id: &str) -> Option<&'a User> {
    state.users.users.iter().find(|user| user.id == user_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::PostsState;
    use chrono::{Duration, Utc};
    use std::sync::Arc;

    fn blog() -> BlogState {
        let now = Utc::now();
        let mut older = Post::new("older", "a", Some("1".to_string()), now);
        older.id = "1".to_string();
        older.date = now - Duration::minutes(30);
        let mut newer = Post::new("newer", "b", Some("2".to_string()), now);
        newer.id = "2".to_string();
        BlogState {
            posts: Arc::new(PostsState {
                posts: vec![older, newer],
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_post_by_id_uses_requested_id() {
        let state = blog();
        assert_eq!(select_post_by_id(&state, "2").map(|p| p.title.as_str()), Some("newer"));
        assert_eq!(select_post_by_id(&state, "1").map(|p| p.title.as_str()), Some("older"));
        assert!(select_post_by_id(&state, "3").is_none());
    }

    #[test]
    fn test_post_ids_newest_first() {
        assert_eq!(select_post_ids(&blog()), vec!["2", "1"]);
    }

    #[test]
    fn test_user_lookup() {
        let state = blog();
        assert_eq!(select_all_users(&state).len(), 3);
        assert_eq!(
            select_user_by_id(&state, "1").map(|u| u.name.as_str()),
            Some("Neil Young")
        );
        assert!(select_user_by_id(&state, "99").is_none());
    }

    #[test]
    fn test_status_and_error_defaults() {
        let state = blog();
        assert_eq!(posts_status(&state), FetchStatus::Idle);
        assert_eq!(posts_error(&state), None);
        assert_eq!(select_all_posts(&state).len(), 2);
    }
}
