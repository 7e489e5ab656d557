//! Remote sources the thunks talk to
//!
//! The application ships fixture-backed implementations that answer after a
//! configurable delay; tests substitute their own.

pub mod blog_api;
pub mod catalog;

pub use blog_api::{BlogSource, FixtureBlog};
pub use catalog::{FixtureCatalog, ProductSource};
