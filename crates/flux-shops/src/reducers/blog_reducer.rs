//! Blog Reducer
//!
//! Root reducer for the blog store: posts and users slices.

use super::{posts_reducer, users_reducer};
use crate::actions::Action;
use crate::state::BlogState;
use flux_store::{combine_reducers, Reducer};

pub fn blog_reducer() -> impl Reducer<BlogState, Action> + Send + Sync + 'static {
    combine_reducers!(BlogState<Action> {
        posts: posts_reducer::reduce,
        users: users_reducer::reduce,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::actions::posts::post_added;
    use flux_store::Store;
    use std::sync::Arc;

    #[test]
    fn test_post_added_keeps_users_slice() {
        let store = Store::new(blog_reducer());
        let before = store.state();

        store
            .dispatch(post_added("Title", "Content", Some("1".to_string())))
            .unwrap();
        let after = store.state();

        assert_eq!(after.posts.posts.len(), 1);
        assert!(Arc::ptr_eq(&before.users, &after.users));
        assert_eq!(after.users.users.len(), 3);
    }
}
