//! Error types for the store

use thiserror::Error;

/// Raised by a reducer that refuses to produce a next state.
///
/// Returning this from a reducer is non-committing: the store keeps the
/// previous state and hands the error back to whoever dispatched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReduceError {
    #[error("Reducer rejected {action}: {reason}")]
    Rejected { action: String, reason: String },

    #[error("Invalid state: {0}")]
    InvalidState(String),
}

impl ReduceError {
    pub fn rejected(action: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Rejected {
            action: action.into(),
            reason: reason.into(),
        }
    }
}

/// Errors returned from `Store::dispatch` and friends
#[derive(Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Reduce(#[from] ReduceError),

    /// A thunk reached the base dispatch, i.e. no thunk middleware is installed
    #[error("Thunk reached the reducer; install ThunkMiddleware to dispatch thunks")]
    UnhandledThunk,

    /// Middleware turned a plain action into a pending thunk result, or the reverse
    #[error("Dispatch produced an unexpected outcome: expected {expected}")]
    UnexpectedOutcome { expected: &'static str },

    #[error("Thunk {name} failed: {source}")]
    Thunk {
        name: &'static str,
        source: anyhow::Error,
    },
}

impl StoreError {
    /// Wrap an arbitrary failure that escaped a thunk
    pub fn thunk(name: &'static str, source: impl Into<anyhow::Error>) -> Self {
        Self::Thunk {
            name,
            source: source.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_error_display() {
        let err = ReduceError::rejected("RemovePlate", "no plates left");
        assert_eq!(err.to_string(), "Reducer rejected RemovePlate: no plates left");
    }

    #[test]
    fn test_store_error_is_transparent_for_reduce_errors() {
        let err = StoreError::from(ReduceError::InvalidState("negative stock".to_string()));
        assert_eq!(err.to_string(), "Invalid state: negative stock");
    }

    #[test]
    fn test_thunk_error_mentions_name() {
        let err = StoreError::thunk("products/fetch", anyhow::anyhow!("timeout"));
        assert_eq!(err.to_string(), "Thunk products/fetch failed: timeout");
    }
}
