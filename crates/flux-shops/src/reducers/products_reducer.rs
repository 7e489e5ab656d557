//! Products Reducer

use crate::actions::{Action, ProductsAction};
use crate::state::ProductsState;

/// Reducer for the product catalog fetch lifecycle
pub fn reduce(mut state: ProductsState, action: &Action) -> ProductsState {
    match action {
        Action::Products(ProductsAction::FetchRequest) => {
            state.loading = true;
            state.error = None;
        }
        Action::Products(ProductsAction::FetchSuccess(products)) => {
            state.loading = false;
            state.products = products.clone();
        }
        Action::Products(ProductsAction::FetchError(message)) => {
            state.loading = false;
            state.error = Some(message.clone());
        }
        _ => {}
    }
    state
}
