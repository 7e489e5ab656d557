//! Blog posts state

use crate::domain_models::{FetchStatus, Post};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostsState {
    pub posts: Vec<Post>,
    pub status: FetchStatus,
    pub error: Option<String>,
}
