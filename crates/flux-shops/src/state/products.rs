//! Product catalog state

use crate::domain_models::Product;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductsState {
    pub loading: bool,
    pub products: Vec<Product>,
    /// Message of the last failed request; cleared by the next request
    pub error: Option<String>,
}
