//! Blog users state

use crate::domain_models::User;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsersState {
    pub users: Vec<User>,
}

impl Default for UsersState {
    fn default() -> Self {
        Self {
            users: vec![
                User::new("0", "Dude Lebowski"),
                User::new("1", "Neil Young"),
                User::new("2", "Dave Gray"),
            ],
        }
    }
}
