//! Blog backend source

use crate::domain_models::{RemotePost, User};
use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use flux_config::SourceConfig;
use std::time::Duration;

const POSTS_FIXTURE: &str = include_str!("../../fixtures/posts.json");
const USERS_FIXTURE: &str = include_str!("../../fixtures/users.json");

/// Provides posts and users for the blog lesson.
#[async_trait]
pub trait BlogSource: Send + Sync {
    async fn fetch_posts(&self) -> Result<Vec<RemotePost>>;

    async fn fetch_users(&self) -> Result<Vec<User>>;
}

/// Blog backend answering from the bundled fixtures
#[derive(Debug, Clone, Default)]
pub struct FixtureBlog {
    latency: Duration,
    fail: bool,
}

impl FixtureBlog {
    pub fn new(latency: Duration, fail: bool) -> Self {
        Self { latency, fail }
    }

    pub fn from_config(config: &SourceConfig) -> Self {
        Self::new(config.latency(), config.fail)
    }

    async fn respond(&self, resource: &str) -> Result<()> {
        log::debug!("Fetching {} (latency {:?})", resource, self.latency);
        tokio::time::sleep(self.latency).await;
        if self.fail {
            bail!("Blog backend refused {} request", resource);
        }
        Ok(())
    }
}

#[async_trait]
impl BlogSource for FixtureBlog {
    async fn fetch_posts(&self) -> Result<Vec<RemotePost>> {
        self.respond("posts").await?;
        serde_json::from_str(POSTS_FIXTURE).context("Failed to decode posts")
    }

    async fn fetch_users(&self) -> Result<Vec<User>> {
        self.respond("users").await?;
        serde_json::from_str(USERS_FIXTURE).context("Failed to decode users")
    }
}
