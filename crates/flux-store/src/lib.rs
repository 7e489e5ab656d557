//! Unidirectional data flow for Rust applications
//!
//! This crate provides:
//! - `Store`: owns one state value, applies a reducer on dispatch and
//!   notifies listeners after every committed transition
//! - `Reducer`: pure `(state, action) -> state` transition, implemented for
//!   plain functions
//! - Composition helpers: `combine` for keyed slices and
//!   `combine_reducers!` for struct-shaped root states
//! - Middleware: `LoggingMiddleware` and `ThunkMiddleware` around dispatch
//! - `Thunk`: deferred actions that dispatch over time
//!
//! ```text
//! Action → Middleware Chain → Reducer → State → Listeners
//! ```

pub mod combine;
pub mod dispatch;
pub mod error;
mod listener;
pub mod middleware;
pub mod reducer;
mod store;

pub use combine::{combine, reduce_slice, Combined, Slices};
pub use dispatch::{AnyOutput, BoxFuture, Dispatchable, Dispatched, Thunk, ThunkFuture};
pub use error::{ReduceError, StoreError};
pub use listener::{Listener, Subscription};
pub use middleware::logging::LoggingMiddleware;
pub use middleware::thunk::ThunkMiddleware;
pub use middleware::{Middleware, Next};
pub use reducer::{fallible, replay, Fallible, Reducer};
pub use store::{Store, StoreBuilder};
