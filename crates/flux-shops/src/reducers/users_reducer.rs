//! Users Reducer

use crate::actions::{Action, UsersAction};
use crate::state::UsersState;

pub fn reduce(mut state: UsersState, action: &Action) -> UsersState {
    if let Action::Users(UsersAction::FetchFulfilled(users)) = action {
        state.users = users.clone();
    }
    state
}
