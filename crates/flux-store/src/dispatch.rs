//! What can be dispatched, and what dispatch hands back
//!
//! ```text
//! Dispatchable::Action(a) → middleware chain → reducer → Dispatched::Action(a)
//! Dispatchable::Thunk(t)  → ThunkMiddleware  → t(store) → Dispatched::Thunk(future)
//! ```

use crate::error::StoreError;
use crate::store::Store;
use std::any::Any;
use std::fmt;
use std::future::Future;
use std::pin::Pin;

/// BoxFuture type alias for thunk bodies
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Pending remainder of a thunk, returned from dispatch
///
/// Whatever the thunk did synchronously has already happened when dispatch
/// returns. Awaiting the future drives the rest and yields the thunk's
/// output; an error that the thunk did not turn into an action surfaces here
/// and nowhere else.
pub type ThunkFuture<T = ()> = BoxFuture<'static, Result<T, StoreError>>;

/// Thunk output while it travels through the middleware chain
pub type AnyOutput = Box<dyn Any + Send>;

type ThunkFn<S, A, T> = Box<dyn FnOnce(Store<S, A>) -> ThunkFuture<T> + Send>;

/// Deferred action: a callable that receives the store and dispatches over time
///
/// The closure runs synchronously inside `dispatch`; the future it returns is
/// the asynchronous tail (await an external call, then dispatch the outcome).
/// Thunks built with [`Thunk::with_output`] also hand a value back to whoever
/// awaits them.
///
/// ```rust,ignore
/// let thunk = Thunk::new("products/fetch", move |store| {
///     let started = store.dispatch(Action::FetchRequest);
///     Box::pin(async move {
///         started?;
///         let outcome = match source.fetch().await {
///             Ok(items) => Action::FetchSuccess(items),
///             Err(e) => Action::FetchError(e.to_string()),
///         };
///         store.dispatch(outcome)?;
///         Ok(())
///     })
/// });
/// ```
pub struct Thunk<S, A, T = ()> {
    name: &'static str,
    run: ThunkFn<S, A, T>,
}

impl<S, A> Thunk<S, A> {
    pub fn new<F>(name: &'static str, run: F) -> Self
    where
        F: FnOnce(Store<S, A>) -> ThunkFuture + Send + 'static,
    {
        Self::with_output(name, run)
    }
}

impl<S, A, T> Thunk<S, A, T> {
    /// Thunk whose future resolves to a value of type `T`
    pub fn with_output<F>(name: &'static str, run: F) -> Self
    where
        F: FnOnce(Store<S, A>) -> ThunkFuture<T> + Send + 'static,
    {
        Self {
            name,
            run: Box::new(run),
        }
    }

    /// Type prefix used in logs, e.g. `posts/fetch`
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Invoke the thunk with a store handle
    pub fn run(self, store: Store<S, A>) -> ThunkFuture<T> {
        (self.run)(store)
    }
}

impl<S, A, T> Thunk<S, A, T>
where
    S: 'static,
    A: 'static,
    T: Send + 'static,
{
    /// Box the output so the thunk fits into [`Dispatchable`]
    pub fn erase(self) -> Thunk<S, A, AnyOutput> {
        let Thunk { name, run } = self;
        Thunk {
            name,
            run: Box::new(move |store: Store<S, A>| -> ThunkFuture<AnyOutput> {
                let pending = run(store);
                Box::pin(async move { pending.await.map(|output| Box::new(output) as AnyOutput) })
            }),
        }
    }
}

impl<S, A, T> fmt::Debug for Thunk<S, A, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Thunk({})", self.name)
    }
}

/// Value entering the middleware chain
pub enum Dispatchable<S, A> {
    Action(A),
    Thunk(Thunk<S, A, AnyOutput>),
}

impl<S, A> Dispatchable<S, A> {
    pub fn is_thunk(&self) -> bool {
        matches!(self, Dispatchable::Thunk(_))
    }
}

impl<S, A, T> From<Thunk<S, A, T>> for Dispatchable<S, A>
where
    S: 'static,
    A: 'static,
    T: Send + 'static,
{
    fn from(thunk: Thunk<S, A, T>) -> Self {
        Dispatchable::Thunk(thunk.erase())
    }
}

impl<S, A: fmt::Debug> fmt::Debug for Dispatchable<S, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dispatchable::Action(action) => action.fmt(f),
            Dispatchable::Thunk(thunk) => thunk.fmt(f),
        }
    }
}

/// Result of a dispatch that made it through the chain
pub enum Dispatched<A> {
    /// The plain action, handed back after the reducer ran
    Action(A),
    /// The pending tail of a thunk, output still boxed
    Thunk(ThunkFuture<AnyOutput>),
}

impl<A> Dispatched<A> {
    pub fn into_action(self) -> Result<A, StoreError> {
        match self {
            Dispatched::Action(action) => Ok(action),
            Dispatched::Thunk(_) => Err(StoreError::UnexpectedOutcome { expected: "action" }),
        }
    }

    pub fn into_thunk(self) -> Result<ThunkFuture<AnyOutput>, StoreError> {
        match self {
            Dispatched::Thunk(future) => Ok(future),
            Dispatched::Action(_) => Err(StoreError::UnexpectedOutcome { expected: "thunk" }),
        }
    }
}

impl<A: fmt::Debug> fmt::Debug for Dispatched<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dispatched::Action(action) => f.debug_tuple("Action").field(action).finish(),
            Dispatched::Thunk(_) => f.write_str("Thunk(<pending>)"),
        }
    }
}
