//! Reducers
//!
//! Each reducer takes the whole root `Action`, matches the variants of its
//! own domain and returns the state unchanged for everything else.

pub mod blog_reducer;
pub mod burger_reducer;
pub mod pizza_reducer;
pub mod plates_reducer;
pub mod posts_reducer;
pub mod products_reducer;
pub mod shop_reducer;
pub mod todos_reducer;
pub mod users_reducer;
