//! Middleware system
//!
//! Middleware sits between dispatch and the reducer, so cross-cutting
//! concerns (logging, deferred side effects) live outside the reducers.
//!
//! ```text
//! dispatch → first middleware → ... → last middleware → reducer → listeners
//! ```
//!
//! Each middleware receives the store (read state, dispatch from the top of
//! the chain), the dispatched value and a [`Next`] handle. Calling
//! `next.run(action)` forwards to the following middleware, or to the
//! reducer after the last one. Not calling it consumes the value.
//!
//! ## Example
//!
//! ```rust
//! use flux_store::{Dispatchable, Dispatched, Middleware, Next, Store, StoreError};
//!
//! struct DropEverything;
//!
//! impl<S: Clone, A> Middleware<S, A> for DropEverything {
//!     fn handle(
//!         &self,
//!         _store: &Store<S, A>,
//!         action: Dispatchable<S, A>,
//!         _next: Next<'_, S, A>,
//!     ) -> Result<Dispatched<A>, StoreError> {
//!         match action {
//!             Dispatchable::Action(action) => Ok(Dispatched::Action(action)),
//!             Dispatchable::Thunk(_) => Err(StoreError::UnhandledThunk),
//!         }
//!     }
//! }
//! ```

pub mod logging;
pub mod thunk;

use crate::dispatch::{Dispatchable, Dispatched};
use crate::error::StoreError;
use crate::store::Store;

/// Middleware trait - wraps dispatch for every value entering the store
///
/// Middleware is shared by every clone of a store handle, hence `&self` and
/// the `Send + Sync` bound. Keep per-middleware state behind a lock or an
/// atomic.
pub trait Middleware<S, A>: Send + Sync {
    /// Handle a dispatched value
    ///
    /// - `store`: read state, or dispatch values that re-enter the whole chain
    /// - `action`: the dispatched value
    /// - `next`: continuation into the rest of the chain
    fn handle(
        &self,
        store: &Store<S, A>,
        action: Dispatchable<S, A>,
        next: Next<'_, S, A>,
    ) -> Result<Dispatched<A>, StoreError>;
}

/// Continuation into the remainder of the middleware chain
pub struct Next<'a, S, A> {
    store: &'a Store<S, A>,
    index: usize,
}

impl<'a, S: Clone, A> Next<'a, S, A> {
    pub(crate) fn new(store: &'a Store<S, A>, index: usize) -> Self {
        Self { store, index }
    }

    /// Forward to the next middleware, or the reducer after the last one
    pub fn run(self, action: Dispatchable<S, A>) -> Result<Dispatched<A>, StoreError> {
        self.store.run_chain(self.index, action)
    }
}
