//! State slices
//!
//! Every slice is a plain value; reducers build a new one per transition.
//! Root states that combine slices hold them as `Arc` so untouched slices are
//! shared between snapshots.

pub mod blog;
pub mod plates;
pub mod posts;
pub mod products;
pub mod shop;
pub mod todos;
pub mod users;

pub use blog::BlogState;
pub use plates::PlatesState;
pub use posts::PostsState;
pub use products::ProductsState;
pub use shop::{BurgerState, PizzaState, ShopState};
pub use todos::TodosState;
pub use users::UsersState;
