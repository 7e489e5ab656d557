//! Reducer trait - pure transition from (state, action) to next state
//!
//! Any plain function `fn(S, &A) -> S` is a reducer as long as `S: Default`;
//! the `Default` impl is the reducer's declared initial state. Reducers that
//! can refuse an action are wrapped with [`fallible`].
//!
//! ```rust
//! use flux_store::Reducer;
//!
//! #[derive(Debug, Clone, Default, PartialEq)]
//! struct Counter(i32);
//!
//! enum CounterAction {
//!     Increment,
//!     Reset,
//! }
//!
//! fn reduce(mut state: Counter, action: &CounterAction) -> Counter {
//!     match action {
//!         CounterAction::Increment => state.0 += 1,
//!         CounterAction::Reset => state = Counter::default(),
//!     }
//!     state
//! }
//!
//! let next = reduce.reduce(Counter(41), &CounterAction::Increment).unwrap();
//! assert_eq!(next, Counter(42));
//! ```

use crate::error::ReduceError;

/// Transition function owned by a store
///
/// Implementations must be pure: the incoming state is an owned copy, the
/// returned value becomes the next snapshot. For actions a reducer does not
/// handle it must hand back the state it was given.
pub trait Reducer<S, A> {
    /// State used when the store is created without an explicit one
    fn initial_state(&self) -> S;

    /// Compute the next state
    fn reduce(&self, state: S, action: &A) -> Result<S, ReduceError>;
}

impl<S, A, F> Reducer<S, A> for F
where
    F: Fn(S, &A) -> S,
    S: Default,
{
    fn initial_state(&self) -> S {
        S::default()
    }

    fn reduce(&self, state: S, action: &A) -> Result<S, ReduceError> {
        Ok(self(state, action))
    }
}

/// Adapter for reducers returning `Result`, see [`fallible`]
#[derive(Debug, Clone, Copy)]
pub struct Fallible<F>(F);

/// Turn `fn(S, &A) -> Result<S, ReduceError>` into a [`Reducer`]
pub fn fallible<S, A, F>(reduce: F) -> Fallible<F>
where
    F: Fn(S, &A) -> Result<S, ReduceError>,
{
    Fallible(reduce)
}

impl<S, A, F> Reducer<S, A> for Fallible<F>
where
    F: Fn(S, &A) -> Result<S, ReduceError>,
    S: Default,
{
    fn initial_state(&self) -> S {
        S::default()
    }

    fn reduce(&self, state: S, action: &A) -> Result<S, ReduceError> {
        (self.0)(state, action)
    }
}

/// Fold a reducer over a sequence of actions, starting from `state`
///
/// This is what a store does across consecutive dispatches, minus the
/// listeners. Stops at the first rejected action.
pub fn replay<'a, S, A, R, I>(reducer: &R, state: S, actions: I) -> Result<S, ReduceError>
where
    R: Reducer<S, A> + ?Sized,
    A: 'a,
    I: IntoIterator<Item = &'a A>,
{
    actions
        .into_iter()
        .try_fold(state, |state, action| reducer.reduce(state, action))
}
