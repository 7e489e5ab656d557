use crate::dispatch::{Dispatchable, Dispatched};
use crate::error::StoreError;
use crate::middleware::{Middleware, Next};
use crate::store::Store;
use log::Level;
use std::fmt::Debug;
use std::time::Instant;

/// LoggingMiddleware - logs every dispatched value with the state around it
///
/// Logs the previous state and the action before forwarding, then the next
/// state once the rest of the chain returned. Never alters the action or the
/// result.
pub struct LoggingMiddleware {
    level: Level,
}

impl LoggingMiddleware {
    pub fn new() -> Self {
        Self {
            level: Level::Debug,
        }
    }

    pub fn with_level(level: Level) -> Self {
        Self { level }
    }
}

impl Default for LoggingMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, A> Middleware<S, A> for LoggingMiddleware
where
    S: Clone + Debug,
    A: Debug,
{
    fn handle(
        &self,
        store: &Store<S, A>,
        action: Dispatchable<S, A>,
        next: Next<'_, S, A>,
    ) -> Result<Dispatched<A>, StoreError> {
        if !log::log_enabled!(self.level) {
            return next.run(action);
        }

        let label = format!("{:?}", action);
        let started = Instant::now();
        log::log!(self.level, "prev state: {:?}", store.state());
        log::log!(self.level, "action: {}", label);

        let result = next.run(action);
        match &result {
            Ok(_) => log::log!(
                self.level,
                "next state: {:?} ({} in {:?})",
                store.state(),
                label,
                started.elapsed()
            ),
            Err(e) => log::warn!("action {} failed: {}", label, e),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::middleware::thunk::ThunkMiddleware;
    use crate::Thunk;

    #[derive(Debug, Clone, PartialEq)]
    struct Plates {
        plates: u32,
    }

    impl Default for Plates {
        fn default() -> Self {
            Self { plates: 100 }
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum PlateAction {
        ReducePlates,
    }

    fn plates(mut state: Plates, action: &PlateAction) -> Plates {
        match action {
            PlateAction::ReducePlates => state.plates -= 1,
        }
        state
    }

    #[test]
    fn test_logging_passes_action_through() {
        let store = Store::builder(plates)
            .with_middleware(LoggingMiddleware::with_level(Level::Info))
            .build();

        let returned = store.dispatch(PlateAction::ReducePlates).unwrap();

        assert_eq!(returned, PlateAction::ReducePlates);
        assert_eq!(store.state().plates, 99);
    }

    #[test]
    fn test_logging_before_thunk_still_runs_thunk() {
        let store = Store::builder(plates)
            .with_middleware(LoggingMiddleware::new())
            .with_middleware(ThunkMiddleware)
            .build();

        let thunk = Thunk::new("plates/reduce-twice", |store: Store<Plates, PlateAction>| {
            let first = store.dispatch(PlateAction::ReducePlates);
            let second = store.dispatch(PlateAction::ReducePlates);
            Box::pin(async move {
                first?;
                second?;
                Ok::<(), StoreError>(())
            })
        });
        let _pending = store.dispatch_thunk(thunk).unwrap();

        assert_eq!(store.state().plates, 98);
    }
}
