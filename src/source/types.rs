//! Page source types and traits

use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Result of fetching one page
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    /// Items on this page, in server order
    pub items: Vec<T>,
    /// Whether the server advertises a further page
    pub has_next: bool,
    /// Total item count across all pages, when the server reports it
    pub total_count: Option<u64>,
}

impl<T> Page<T> {
    /// Create a page followed by more pages
    pub fn more(items: Vec<T>) -> Self {
        Self {
            items,
            has_next: true,
            total_count: None,
        }
    }

    /// Create the final page
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            has_next: false,
            total_count: None,
        }
    }

    /// Attach the server-reported total count
    #[must_use]
    pub fn with_total_count(mut self, count: u64) -> Self {
        self.total_count = Some(count);
        self
    }

    /// Number of items on this page
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the page has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Asynchronous supplier of numbered pages
///
/// Page numbers are 1-based. Transport, status and decoding failures are all
/// reported through the crate [`Error`](crate::Error).
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Item type carried by each page
    type Item: Send;

    /// Fetch the given page
    async fn fetch_page(&self, page: u32) -> Result<Page<Self::Item>>;
}

#[async_trait]
impl<S: PageSource + ?Sized> PageSource for Arc<S> {
    type Item = S::Item;

    async fn fetch_page(&self, page: u32) -> Result<Page<Self::Item>> {
        (**self).fetch_page(page).await
    }
}
