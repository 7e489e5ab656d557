//! Todos Reducer

use crate::actions::{Action, TodoAction};
use crate::state::TodosState;

pub fn reduce(mut state: TodosState, action: &Action) -> TodosState {
    match action {
        Action::Todos(TodoAction::Add(todo)) => {
            state.todos.push(todo.clone());
        }
        Action::Todos(TodoAction::Remove { id }) => {
            state.todos.retain(|todo| &todo.id != id);
        }
        Action::Todos(TodoAction::Update { id, text }) => {
            if let Some(todo) = state.todos.iter_mut().find(|todo| &todo.id == id) {
                todo.text = text.clone();
            }
        }
        _ => {}
    }
    state
}
