//! Thunks
//!
//! Each thunk dispatches its "started" action synchronously, awaits a
//! service and dispatches exactly one outcome action. Service failures are
//! turned into outcome actions; only dispatch errors escape the future.

pub mod posts;
pub mod products;

pub use posts::{fetch_posts, fetch_users};
pub use products::fetch_products;
