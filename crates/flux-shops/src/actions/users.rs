//! Blog user actions

use crate::domain_models::User;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsersAction {
    /// Replace the user list with what the backend returned
    FetchFulfilled(Vec<User>),
}
