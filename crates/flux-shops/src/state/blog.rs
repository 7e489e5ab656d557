//! Blog root state

use super::{PostsState, UsersState};
use std::sync::Arc;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BlogState {
    pub posts: Arc<PostsState>,
    pub users: Arc<UsersState>,
}
