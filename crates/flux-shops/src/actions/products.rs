//! Product catalog fetch actions

use crate::domain_models::Product;

/// Lifecycle of one catalog request, dispatched by the `fetch_products` thunk
#[derive(Debug, Clone, PartialEq)]
pub enum ProductsAction {
    FetchRequest,
    FetchSuccess(Vec<Product>),
    FetchError(String),
}
