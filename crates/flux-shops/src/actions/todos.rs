//! Todo list actions

use super::Action;
use crate::domain_models::Todo;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoAction {
    /// Append a prepared todo, see [`add_todo`]
    Add(Todo),
    Remove { id: String },
    Update { id: String, text: String },
}

/// Prepare a new todo with a generated id
pub fn add_todo(text: impl Into<String>) -> Action {
    Action::Todos(TodoAction::Add(Todo::new(text)))
}

pub fn remove_todo(id: impl Into<String>) -> Action {
    Action::Todos(TodoAction::Remove { id: id.into() })
}

pub fn update_todo(id: impl Into<String>, text: impl Into<String>) -> Action {
    Action::Todos(TodoAction::Update {
        id: id.into(),
        text: text.into(),
    })
}
