//! Product catalog thunk

use crate::actions::{Action, ProductsAction};
use crate::services::ProductSource;
use crate::state::ProductsState;
use flux_store::{StoreError, Thunk};
use std::sync::Arc;

pub type ProductsStore = flux_store::Store<ProductsState, Action>;

/// Fetch the catalog: `FetchRequest`, then `FetchSuccess` or `FetchError`
pub fn fetch_products(source: Arc<dyn ProductSource>) -> Thunk<ProductsState, Action> {
    Thunk::new("products/fetch", move |store: ProductsStore| {
        let started = store.dispatch(ProductsAction::FetchRequest.into());
        Box::pin(async move {
            started?;
            let outcome = match source.fetch_products().await {
                Ok(products) => {
                    log::info!("Fetched {} products", products.len());
                    ProductsAction::FetchSuccess(products)
                }
                Err(e) => {
                    log::warn!("Product fetch failed: {:#}", e);
                    ProductsAction::FetchError(e.to_string())
                }
            };
            store.dispatch(outcome.into())?;
            Ok::<(), StoreError>(())
        })
    })
}
