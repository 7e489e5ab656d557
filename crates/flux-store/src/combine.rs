//! Reducer composition
//!
//! Two flavours, both routing every action to every slice reducer:
//!
//! - [`combine`] for a runtime map of keyed slices sharing one state type,
//!   producing a [`Slices`] state;
//! - [`combine_reducers!`](crate::combine_reducers) for a struct-shaped root
//!   state whose fields are `Arc<Slice>` of different types.
//!
//! In both cases a slice whose reducer returns a value equal to the previous
//! one keeps its previous `Arc`, so listeners can cheaply compare pointers.

use crate::error::ReduceError;
use crate::reducer::Reducer;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Reduce one slice, keeping the existing allocation when nothing changed
pub fn reduce_slice<S, A, R>(reducer: &R, slice: Arc<S>, action: &A) -> Result<Arc<S>, ReduceError>
where
    R: Reducer<S, A> + ?Sized,
    S: Clone + PartialEq,
{
    let next = reducer.reduce(S::clone(&slice), action)?;
    if next == *slice {
        Ok(slice)
    } else {
        Ok(Arc::new(next))
    }
}

/// State produced by a [`Combined`] reducer - one slice per key
#[derive(Debug, Clone, PartialEq)]
pub struct Slices<S> {
    slices: BTreeMap<String, Arc<S>>,
}

impl<S> Slices<S> {
    /// Slice stored under `key`
    pub fn get(&self, key: &str) -> Option<&S> {
        self.slices.get(key).map(Arc::as_ref)
    }

    /// Shared handle to the slice, for identity checks
    pub fn get_arc(&self, key: &str) -> Option<&Arc<S>> {
        self.slices.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.slices.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

impl<S> FromIterator<(String, S)> for Slices<S> {
    fn from_iter<I: IntoIterator<Item = (String, S)>>(iter: I) -> Self {
        Self {
            slices: iter
                .into_iter()
                .map(|(key, slice)| (key, Arc::new(slice)))
                .collect(),
        }
    }
}

type BoxedReducer<S, A> = Box<dyn Reducer<S, A> + Send + Sync>;

/// Reducer built by [`combine`]
pub struct Combined<S, A> {
    reducers: Vec<(String, BoxedReducer<S, A>)>,
}

/// Combine keyed reducers into one reducer over [`Slices`]
///
/// Keys present in the incoming state without a reducer are dropped; keys
/// missing from the incoming state start from their reducer's initial state.
pub fn combine<S, A, K, R, I>(reducers: I) -> Combined<S, A>
where
    I: IntoIterator<Item = (K, R)>,
    K: Into<String>,
    R: Reducer<S, A> + Send + Sync + 'static,
{
    Combined {
        reducers: reducers
            .into_iter()
            .map(|(key, reducer)| (key.into(), Box::new(reducer) as BoxedReducer<S, A>))
            .collect(),
    }
}

impl<S, A> Combined<S, A> {
    /// Add another keyed reducer, replacing any existing one with the same key
    pub fn with<R>(mut self, key: impl Into<String>, reducer: R) -> Self
    where
        R: Reducer<S, A> + Send + Sync + 'static,
    {
        let key = key.into();
        self.reducers.retain(|(existing, _)| *existing != key);
        self.reducers
            .push((key, Box::new(reducer) as BoxedReducer<S, A>));
        self
    }
}

impl<S, A> Reducer<Slices<S>, A> for Combined<S, A>
where
    S: Clone + PartialEq,
{
    fn initial_state(&self) -> Slices<S> {
        self.reducers
            .iter()
            .map(|(key, reducer)| (key.clone(), reducer.initial_state()))
            .collect()
    }

    fn reduce(&self, mut state: Slices<S>, action: &A) -> Result<Slices<S>, ReduceError> {
        let mut slices = BTreeMap::new();
        for (key, reducer) in &self.reducers {
            let current = match state.slices.remove(key) {
                Some(slice) => slice,
                None => Arc::new(reducer.initial_state()),
            };
            slices.insert(key.clone(), reduce_slice(reducer.as_ref(), current, action)?);
        }
        if !state.slices.is_empty() {
            log::trace!(
                "Dropping slices without reducer: {:?}",
                state.slices.keys().collect::<Vec<_>>()
            );
        }
        Ok(Slices { slices })
    }
}

/// Combine reducers over a struct whose fields are `Arc` slices
///
/// Expands to a [`Fallible`](crate::Fallible) reducer, so the root state must
/// implement `Default`. Each field is reduced with [`reduce_slice`].
///
/// ```rust
/// use flux_store::{combine_reducers, Reducer};
/// use std::sync::Arc;
///
/// #[derive(Debug, Clone, Default, PartialEq)]
/// struct Tally(u32);
///
/// #[derive(Debug, Clone, Default, PartialEq)]
/// struct Root {
///     left: Arc<Tally>,
///     right: Arc<Tally>,
/// }
///
/// enum Side {
///     Left,
///     Right,
/// }
///
/// fn left(mut state: Tally, action: &Side) -> Tally {
///     if let Side::Left = action {
///         state.0 += 1;
///     }
///     state
/// }
///
/// fn right(mut state: Tally, action: &Side) -> Tally {
///     if let Side::Right = action {
///         state.0 += 1;
///     }
///     state
/// }
///
/// let root = combine_reducers!(Root<Side> { left: left, right: right });
/// let before = Root::default();
/// let after = root.reduce(before.clone(), &Side::Left).unwrap();
/// assert_eq!(after.left.0, 1);
/// assert!(Arc::ptr_eq(&before.right, &after.right));
/// ```
#[macro_export]
macro_rules! combine_reducers {
    ($state:ident<$action:ty> { $($field:ident: $reducer:expr),+ $(,)? }) => {
        $crate::fallible(
            move |state: $state, action: &$action| -> ::core::result::Result<$state, $crate::ReduceError> {
                ::core::result::Result::Ok($state {
                    $($field: $crate::reduce_slice(&$reducer, state.$field, action)?,)+
                })
            },
        )
    };
}
