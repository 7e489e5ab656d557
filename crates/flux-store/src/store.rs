use crate::dispatch::{Dispatchable, Dispatched, Thunk, ThunkFuture};
use crate::error::StoreError;
use crate::listener::{Listener, Listeners, Subscription};
use crate::middleware::{Middleware, Next};
use crate::reducer::Reducer;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

/// Redux-style Store that holds state and dispatches actions
///
/// The Store follows the Redux pattern:
/// - Centralized state, exclusively owned by the store
/// - Actions are dispatched to modify state
/// - A pure reducer computes each transition
/// - State is immutable (replaced on each action, handed out as `Arc`)
/// - Listeners run synchronously after every committed transition
///
/// `Store` is a cheap handle; clones share the same state, reducer, listeners
/// and middleware. Build one per application at the composition root and pass
/// the handle around.
///
/// # Middleware
///
/// ```rust
/// use flux_store::{LoggingMiddleware, Store, ThunkMiddleware};
///
/// #[derive(Debug, Clone, Default)]
/// struct Counter(u32);
///
/// #[derive(Debug)]
/// struct Increment;
///
/// fn reduce(state: Counter, _action: &Increment) -> Counter {
///     Counter(state.0 + 1)
/// }
///
/// let store = Store::builder(reduce)
///     .with_middleware(LoggingMiddleware::new())
///     .with_middleware(ThunkMiddleware)
///     .build();
///
/// store.dispatch(Increment).unwrap();
/// assert_eq!(store.state().0, 1);
/// ```
pub struct Store<S, A> {
    inner: Arc<Inner<S, A>>,
}

struct Inner<S, A> {
    state: RwLock<Arc<S>>,
    reducer: Box<dyn Reducer<S, A> + Send + Sync>,
    middleware: Vec<Box<dyn Middleware<S, A>>>,
    listeners: Arc<Mutex<Listeners>>,
}

impl<S, A> Clone for Store<S, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<S: Clone, A> Store<S, A> {
    /// Create a store whose state starts at the reducer's initial state
    pub fn new<R>(reducer: R) -> Self
    where
        R: Reducer<S, A> + Send + Sync + 'static,
    {
        Self::builder(reducer).build()
    }

    /// Create a store with an explicit initial state
    pub fn with_state<R>(reducer: R, state: S) -> Self
    where
        R: Reducer<S, A> + Send + Sync + 'static,
    {
        Self::builder(reducer).with_state(state).build()
    }

    /// Start building a store with middleware
    pub fn builder<R>(reducer: R) -> StoreBuilder<S, A>
    where
        R: Reducer<S, A> + Send + Sync + 'static,
    {
        StoreBuilder::new(reducer)
    }

    /// Get the current state snapshot
    pub fn state(&self) -> Arc<S> {
        Arc::clone(
            &self
                .inner
                .state
                .read()
                .unwrap_or_else(PoisonError::into_inner),
        )
    }

    /// Dispatch a plain action through the middleware chain, then the reducer
    ///
    /// Every listener has run by the time this returns. The action is handed
    /// back on success. A rejected action leaves the state untouched and no
    /// listener is called.
    pub fn dispatch(&self, action: A) -> Result<A, StoreError> {
        self.dispatch_any(Dispatchable::Action(action))?
            .into_action()
    }

    /// Dispatch a thunk; requires [`ThunkMiddleware`](crate::ThunkMiddleware)
    ///
    /// The synchronous part of the thunk has run when this returns. Await the
    /// returned future to drive the rest and receive the thunk's output.
    pub fn dispatch_thunk<T>(&self, thunk: Thunk<S, A, T>) -> Result<ThunkFuture<T>, StoreError>
    where
        S: 'static,
        A: 'static,
        T: Send + 'static,
    {
        let pending = self.dispatch_any(thunk.into())?.into_thunk()?;
        Ok(Box::pin(async move {
            let output = pending.await?;
            output
                .downcast::<T>()
                .map(|output| *output)
                .map_err(|_| StoreError::UnexpectedOutcome {
                    expected: std::any::type_name::<T>(),
                })
        }))
    }

    /// Dispatch either kind of value
    pub fn dispatch_any(&self, action: Dispatchable<S, A>) -> Result<Dispatched<A>, StoreError> {
        self.run_chain(0, action)
    }

    /// Register a listener called after every committed transition
    ///
    /// Listeners run in registration order on the dispatching thread. They
    /// may read state, dispatch or (un)subscribe; changes to the listener set
    /// apply from the next dispatch on.
    pub fn subscribe<F>(&self, listener: F) -> Subscription
    where
        F: Fn() + Send + Sync + 'static,
    {
        let listener: Listener = Arc::new(listener);
        let id = self
            .inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .add(listener);
        log::trace!("Listener {} subscribed", id);
        Subscription::new(id, &self.inner.listeners)
    }

    /// Number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub(crate) fn run_chain(
        &self,
        index: usize,
        action: Dispatchable<S, A>,
    ) -> Result<Dispatched<A>, StoreError> {
        match self.inner.middleware.get(index) {
            Some(middleware) => middleware.handle(self, action, Next::new(self, index + 1)),
            None => self.reduce(action),
        }
    }

    /// Base dispatch: apply the reducer, commit, notify
    fn reduce(&self, action: Dispatchable<S, A>) -> Result<Dispatched<A>, StoreError> {
        let action = match action {
            Dispatchable::Action(action) => action,
            Dispatchable::Thunk(thunk) => {
                log::error!("Thunk {} reached the reducer", thunk.name());
                return Err(StoreError::UnhandledThunk);
            }
        };

        {
            // The write lock spans read-reduce-commit so concurrent dispatches
            // cannot lose each other's transitions.
            let mut state = self
                .inner
                .state
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            let next = self.inner.reducer.reduce(S::clone(&state), &action)?;
            *state = Arc::new(next);
        }

        self.notify();
        Ok(Dispatched::Action(action))
    }

    fn notify(&self) {
        let listeners = self
            .inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .snapshot();
        for listener in listeners {
            listener();
        }
    }
}

/// Builder collecting initial state and middleware before the store is shared
pub struct StoreBuilder<S, A> {
    reducer: Box<dyn Reducer<S, A> + Send + Sync>,
    state: Option<S>,
    middleware: Vec<Box<dyn Middleware<S, A>>>,
}

impl<S, A> StoreBuilder<S, A> {
    pub fn new<R>(reducer: R) -> Self
    where
        R: Reducer<S, A> + Send + Sync + 'static,
    {
        Self {
            reducer: Box::new(reducer),
            state: None,
            middleware: Vec::new(),
        }
    }

    /// Start from `state` instead of the reducer's initial state
    pub fn with_state(mut self, state: S) -> Self {
        self.state = Some(state);
        self
    }

    /// Append middleware
    ///
    /// Middleware sees actions in the order it was added; the last one added
    /// hands over to the reducer.
    pub fn with_middleware<M>(mut self, middleware: M) -> Self
    where
        M: Middleware<S, A> + 'static,
    {
        self.middleware.push(Box::new(middleware));
        self
    }

    /// Add middleware to a builder held by reference
    pub fn add_middleware(&mut self, middleware: Box<dyn Middleware<S, A>>) {
        self.middleware.push(middleware);
    }

    pub fn build(self) -> Store<S, A> {
        let state = match self.state {
            Some(state) => state,
            None => self.reducer.initial_state(),
        };
        log::debug!(
            "Store created with {} middleware",
            self.middleware.len()
        );
        Store {
            inner: Arc::new(Inner {
                state: RwLock::new(Arc::new(state)),
                reducer: self.reducer,
                middleware: self.middleware,
                listeners: Arc::new(Mutex::new(Listeners::default())),
            }),
        }
    }
}
