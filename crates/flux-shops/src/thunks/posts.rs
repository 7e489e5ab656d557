//! Blog thunks

use crate::actions::{Action, PostsAction, UsersAction};
use crate::domain_models::{Post, RemotePost};
use crate::services::BlogSource;
use crate::state::BlogState;
use chrono::{DateTime, Duration, Utc};
use flux_store::{StoreError, Thunk};
use std::sync::Arc;

pub type BlogStore = flux_store::Store<BlogState, Action>;

/// Fetch remote posts: `FetchPending`, then `FetchFulfilled` or `FetchRejected`
///
/// Fetched posts are dated 1, 2, ... minutes before `now` in backend order
/// and start without reactions.
pub fn fetch_posts(source: Arc<dyn BlogSource>) -> Thunk<BlogState, Action> {
    Thunk::new("posts/fetch", move |store: BlogStore| {
        let started = store.dispatch(PostsAction::FetchPending.into());
        Box::pin(async move {
            started?;
            let outcome = match source.fetch_posts().await {
                Ok(remote) => {
                    log::info!("Fetched {} posts", remote.len());
                    let now = Utc::now();
                    PostsAction::FetchFulfilled(stagger(remote, now))
                }
                Err(e) => {
                    log::warn!("Post fetch failed: {:#}", e);
                    PostsAction::FetchRejected(e.to_string())
                }
            };
            store.dispatch(outcome.into())?;
            Ok::<(), StoreError>(())
        })
    })
}

/// Fetch users, replacing the seeded list on success
///
/// There is no pending or error action for users; a failure is logged and the
/// current list is kept.
pub fn fetch_users(source: Arc<dyn BlogSource>) -> Thunk<BlogState, Action> {
    Thunk::new("users/fetch", move |store: BlogStore| {
        Box::pin(async move {
            match source.fetch_users().await {
                Ok(users) => {
                    log::info!("Fetched {} users", users.len());
                    store.dispatch(UsersAction::FetchFulfilled(users).into())?;
                }
                Err(e) => log::warn!("User fetch failed: {:#}", e),
            }
            Ok::<(), StoreError>(())
        })
    })
}

fn stagger(remote: Vec<RemotePost>, now: DateTime<Utc>) -> Vec<Post> {
    remote
        .into_iter()
        .zip(1..)
        .map(|(post, minutes)| post.into_post(now - Duration::minutes(minutes)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain_models::post::Reactions;
    use crate::domain_models::{FetchStatus, User};
    use crate::reducers::blog_reducer::blog_reducer;
    use crate::services::FixtureBlog;
    use flux_store::ThunkMiddleware;
    use std::time::Duration as StdDuration;

    fn store() -> BlogStore {
        BlogStore::builder(blog_reducer())
            .with_middleware(ThunkMiddleware)
            .build()
    }

    fn remote(id: &str) -> RemotePost {
        RemotePost {
            id: id.to_string(),
            user_id: "1".to_string(),
            title: format!("post {id}"),
            body: "body".to_string(),
        }
    }

    #[test]
    fn test_stagger_dates_in_order() {
        let now = Utc::now();
        let posts = stagger(vec![remote("a"), remote("b")], now);
        assert_eq!(now - posts[0].date, Duration::minutes(1));
        assert_eq!(now - posts[1].date, Duration::minutes(2));
        assert!(posts.iter().all(|p| p.reactions == Reactions::default()));
    }

    #[tokio::test]
    async fn test_pending_is_synchronous() {
        let store = store();
        let source = Arc::new(FixtureBlog::new(StdDuration::from_millis(20), false));

        let pending = store.dispatch_thunk(fetch_posts(source)).unwrap();
        assert_eq!(store.state().posts.status, FetchStatus::Loading);

        pending.await.unwrap();
        let state = store.state();
        assert_eq!(state.posts.status, FetchStatus::Succeeded);
        assert_eq!(state.posts.posts.len(), 3);
    }

    #[tokio::test]
    async fn test_rejected_posts() {
        let store = store();
        let source = Arc::new(FixtureBlog::new(StdDuration::ZERO, true));

        store.dispatch_thunk(fetch_posts(source)).unwrap().await.unwrap();

        let state = store.state();
        assert_eq!(state.posts.status, FetchStatus::Failed);
        assert!(state.posts.error.is_some());
        assert!(state.posts.posts.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_users_replaces_list() {
        let store = store();
        let source = Arc::new(FixtureBlog::new(StdDuration::ZERO, false));

        store.dispatch_thunk(fetch_users(source)).unwrap().await.unwrap();

        let users: Vec<User> = store.state().users.users.clone();
        assert_eq!(users.len(), 3);
        assert_eq!(users[0], User::new("1", "Leanne Graham"));
    }

    #[tokio::test]
    async fn test_failed_user_fetch_keeps_seed() {
        let store = store();
        let source = Arc::new(FixtureBlog::new(StdDuration::ZERO, true));

        store.dispatch_thunk(fetch_users(source)).unwrap().await.unwrap();

        assert_eq!(store.state().users.users[0].name, "Dude Lebowski");
    }
}
