use std::path::Path;

use async_trait::async_trait;
use tracing::info;

use crate::error::PortalError;
use crate::types::{load_json, NewsItem};

/// Supplies news records for rendering.
#[async_trait]
pub trait NewsSource: Send + Sync {
    async fn list_news(&self) -> Result<Vec<NewsItem>, PortalError>;
}

/// News held in memory, loaded once at startup.
#[derive(Debug, Clone, Default)]
pub struct StaticNewsSource {
    items: Vec<NewsItem>,
}

impl StaticNewsSource {
    pub fn new(items: Vec<NewsItem>) -> Self {
        Self { items }
    }

    /// Load a JSON array of news records.
    pub fn from_path(path: &Path) -> Result<Self, PortalError> {
        let items: Vec<NewsItem> = load_json(path)?;
        info!(count = items.len(), path = %path.display(), "Loaded news items");
        Ok(Self::new(items))
    }
}

#[async_trait]
impl NewsSource for StaticNewsSource {
    async fn list_news(&self) -> Result<Vec<NewsItem>, PortalError> {
        Ok(self.items.clone())
    }
}
