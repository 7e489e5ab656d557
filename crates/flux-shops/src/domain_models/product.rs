use serde::{Deserialize, Serialize};

/// Catalog entry as returned by the product source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    #[serde(default)]
    pub category: String,
}
