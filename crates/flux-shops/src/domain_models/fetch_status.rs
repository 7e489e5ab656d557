//! Fetch Status model
//!
//! Lifecycle of a request started by a thunk.

use strum::Display;

/// Status of an asynchronous fetch
///
/// `Idle -> Loading -> {Succeeded | Failed}`; a new request moves any status
/// back to `Loading`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed,
}

impl FetchStatus {
    /// Whether a request is in flight
    pub fn is_loading(&self) -> bool {
        matches!(self, FetchStatus::Loading)
    }

    /// Whether the last request finished, successfully or not
    pub fn is_settled(&self) -> bool {
        matches!(self, FetchStatus::Succeeded | FetchStatus::Failed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_lowercase() {
        assert_eq!(FetchStatus::Succeeded.to_string(), "succeeded");
        assert_eq!(FetchStatus::default().to_string(), "idle");
    }

    #[test]
    fn test_settled() {
        assert!(!FetchStatus::Idle.is_settled());
        assert!(!FetchStatus::Loading.is_settled());
        assert!(FetchStatus::Failed.is_settled());
        assert!(FetchStatus::Loading.is_loading());
    }
}
