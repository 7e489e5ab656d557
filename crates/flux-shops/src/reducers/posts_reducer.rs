//! Posts Reducer

use crate::actions::{Action, PostsAction};
use crate::domain_models::FetchStatus;
use crate::state::PostsState;

/// Reducer for blog posts and their fetch status
///
/// Fetched posts arrive already dated, so the reducer only appends them.
pub fn reduce(mut state: PostsState, action: &Action) -> PostsState {
    match action {
        Action::Posts(PostsAction::PostAdded(post)) => {
            state.posts.push(post.clone());
        }
        Action::Posts(PostsAction::ReactionAdded { post_id, reaction }) => {
            if let Some(post) = state.posts.iter_mut().find(|post| &post.id == post_id) {
                post.reactions = post.reactions.with_added(*reaction);
            }
        }
        Action::Posts(PostsAction::FetchPending) => {
            state.status = FetchStatus::Loading;
        }
        Action::Posts(PostsAction::FetchFulfilled(posts)) => {
            state.status = FetchStatus::Succeeded;
            state.posts.extend(posts.iter().cloned());
        }
        Action::Posts(PostsAction::FetchRejected(message)) => {
            state.status = FetchStatus::Failed;
            state.error = Some(message.clone());
        }
        _ => {}
    }
    state
}
