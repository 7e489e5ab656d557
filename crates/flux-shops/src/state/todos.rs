//! Todo list state

use crate::domain_models::Todo;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodosState {
    pub todos: Vec<Todo>,
}

impl Default for TodosState {
    fn default() -> Self {
        Self {
            todos: vec![Todo {
                id: "1".to_string(),
                text: "Hello world".to_string(),
            }],
        }
    }
}

impl TodosState {
    pub fn find(&self, id: &str) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }
}
