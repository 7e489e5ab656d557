use crate::dispatch::{Dispatchable, Dispatched};
use crate::error::StoreError;
use crate::middleware::{Middleware, Next};
use crate::store::Store;

/// ThunkMiddleware - runs thunks instead of forwarding them
///
/// A thunk is invoked with a clone of the store handle and its pending
/// future is returned to the caller of dispatch. Plain actions pass through
/// untouched.
///
/// By convention a thunk catches failures of the external call it awaits and
/// dispatches an explicit error action instead; anything it lets escape is
/// only visible to whoever awaits the returned future.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThunkMiddleware;

impl<S: Clone, A> Middleware<S, A> for ThunkMiddleware {
    fn handle(
        &self,
        store: &Store<S, A>,
        action: Dispatchable<S, A>,
        next: Next<'_, S, A>,
    ) -> Result<Dispatched<A>, StoreError> {
        match action {
            Dispatchable::Thunk(thunk) => {
                log::trace!("Running thunk {}", thunk.name());
                Ok(Dispatched::Thunk(thunk.run(store.clone())))
            }
            action => next.run(action),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Thunk, ThunkFuture};
    use std::sync::{Arc, Mutex};
    use tokio::sync::oneshot;

    #[derive(Debug, Clone, PartialEq)]
    enum Status {
        Idle,
        Loading,
        Succeeded,
        Failed,
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Products {
        status: Status,
        loading: bool,
        products: Vec<String>,
        error: Option<String>,
    }

    impl Default for Products {
        fn default() -> Self {
            Self {
                status: Status::Idle,
                loading: false,
                products: Vec::new(),
                error: None,
            }
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    enum FetchAction {
        Request,
        Success(Vec<String>),
        Error(String),
        Unrelated,
    }

    fn products(state: Products, action: &FetchAction) -> Products {
        match action {
            FetchAction::Request => Products {
                status: Status::Loading,
                loading: true,
                error: None,
                ..state
            },
            FetchAction::Success(items) => Products {
                status: Status::Succeeded,
                loading: false,
                products: items.clone(),
                ..state
            },
            FetchAction::Error(message) => Products {
                status: Status::Failed,
                loading: false,
                error: Some(message.clone()),
                ..state
            },
            FetchAction::Unrelated => state,
        }
    }

    type Store = crate::Store<Products, FetchAction>;

    fn store_with_log() -> (Store, Arc<Mutex<Vec<Status>>>) {
        let store = Store::builder(products)
            .with_middleware(ThunkMiddleware)
            .build();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let observer = store.clone();
        let sink = Arc::clone(&seen);
        store.subscribe(move || {
            sink.lock().unwrap().push(observer.state().status.clone());
        });
        (store, seen)
    }

    fn fetch(gate: oneshot::Receiver<Result<Vec<String>, String>>) -> Thunk<Products, FetchAction> {
        Thunk::new("products/fetch", move |store: Store| {
            let started = store.dispatch(FetchAction::Request);
            Box::pin(async move {
                started?;
                let outcome = match gate.await {
                    Ok(Ok(items)) => FetchAction::Success(items),
                    Ok(Err(message)) => FetchAction::Error(message),
                    Err(_) => FetchAction::Error("request dropped".to_string()),
                };
                store.dispatch(outcome)?;
                Ok::<(), StoreError>(())
            })
        })
    }

    #[tokio::test]
    async fn test_request_is_dispatched_synchronously() {
        let (store, seen) = store_with_log();
        let (_tx, rx) = oneshot::channel();

        let _pending = store.dispatch_thunk(fetch(rx)).unwrap();

        assert!(store.state().loading);
        assert_eq!(*seen.lock().unwrap(), vec![Status::Loading]);
    }

    #[tokio::test]
    async fn test_success_path() {
        let (store, seen) = store_with_log();
        let (tx, rx) = oneshot::channel();

        let pending = store.dispatch_thunk(fetch(rx)).unwrap();
        tx.send(Ok(vec!["backpack".to_string()])).unwrap();
        pending.await.unwrap();

        let state = store.state();
        assert!(!state.loading);
        assert_eq!(state.products, vec!["backpack".to_string()]);
        assert_eq!(state.error, None);
        assert_eq!(
            *seen.lock().unwrap(),
            vec![Status::Loading, Status::Succeeded]
        );
    }

    #[tokio::test]
    async fn test_error_path() {
        let (store, seen) = store_with_log();
        let (tx, rx) = oneshot::channel();

        let pending = store.dispatch_thunk(fetch(rx)).unwrap();
        tx.send(Err("503".to_string())).unwrap();
        pending.await.unwrap();

        let state = store.state();
        assert!(!state.loading);
        assert!(state.products.is_empty());
        assert_eq!(state.error.as_deref(), Some("503"));
        assert_eq!(*seen.lock().unwrap(), vec![Status::Loading, Status::Failed]);
    }

    #[tokio::test]
    async fn test_other_dispatches_run_while_thunk_is_suspended() {
        let (store, seen) = store_with_log();
        let (tx, rx) = oneshot::channel();

        let pending = store.dispatch_thunk(fetch(rx)).unwrap();
        store.dispatch(FetchAction::Unrelated).unwrap();
        assert!(store.state().loading);

        tx.send(Ok(Vec::new())).unwrap();
        pending.await.unwrap();

        assert_eq!(
            *seen.lock().unwrap(),
            vec![Status::Loading, Status::Loading, Status::Succeeded]
        );
    }

    #[tokio::test]
    async fn test_uncaught_thunk_error_surfaces_to_awaiter_only() {
        let (store, _seen) = store_with_log();
        let thunk = Thunk::new("products/explode", |_store: Store| {
            Box::pin(async move {
                Err::<(), _>(StoreError::thunk("products/explode", anyhow::anyhow!("boom")))
            })
        });

        let pending = store.dispatch_thunk(thunk).unwrap();
        let err = pending.await.unwrap_err();

        assert!(matches!(err, StoreError::Thunk { name: "products/explode", .. }));
        assert_eq!(store.state().status, Status::Idle);
    }

    #[tokio::test]
    async fn test_thunk_output_reaches_awaiter() {
        let (store, _seen) = store_with_log();
        let thunk = Thunk::with_output("products/count", |store: Store| -> ThunkFuture<usize> {
            Box::pin(async move {
                store.dispatch(FetchAction::Success(vec!["a".to_string(), "b".to_string()]))?;
                Ok(store.state().products.len())
            })
        });

        let count = store.dispatch_thunk(thunk).unwrap().await.unwrap();

        assert_eq!(count, 2);
    }

    #[test]
    fn test_plain_actions_are_forwarded() {
        let (store, _seen) = store_with_log();
        let returned = store.dispatch(FetchAction::Request).unwrap();
        assert_eq!(returned, FetchAction::Request);
        assert!(store.state().loading);
    }
}
