//! Product catalog source

use crate::domain_models::Product;
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use flux_config::SourceConfig;
use std::time::Duration;

const PRODUCTS_FIXTURE: &str = include_str!("../../fixtures/products.json");

/// Provides the product list for the catalog lesson.
#[async_trait]
pub trait ProductSource: Send + Sync {
    async fn fetch_products(&self) -> Result<Vec<Product>>;
}

/// Catalog answering from the bundled fixture
#[derive(Debug, Clone, Default)]
pub struct FixtureCatalog {
    latency: Duration,
    fail: bool,
}

impl FixtureCatalog {
    pub fn new(latency: Duration, fail: bool) -> Self {
        Self { latency, fail }
    }

    pub fn from_config(config: &SourceConfig) -> Self {
        Self::new(config.latency(), config.fail)
    }
}

#[async_trait]
impl ProductSource for FixtureCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>> {
        log::debug!("Fetching products (latency {:?})", self.latency);
        tokio::time::sleep(self.latency).await;

        if self.fail {
            bail!("Product catalog unavailable");
        }

        serde_json::from_str(PRODUCTS_FIXTURE).context("Failed to decode product catalog")
    }
}
