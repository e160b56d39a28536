//! Pagination types
//!
//! The paging state object, its transitions, and the inputs the controller
//! evaluates on every scroll update.

use super::events::PageEvent;
use crate::source::Page;
use std::time::Duration;

/// Default minimum item count before infinite scroll prefetches
pub const DEFAULT_SCROLL_THRESHOLD: usize = 10;

/// Controller settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControllerConfig {
    /// Minimum rendered item count below which prefetch is suppressed
    pub scroll_threshold: usize,
    /// Optional upper bound on a single fetch
    pub fetch_timeout: Option<Duration>,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            scroll_threshold: DEFAULT_SCROLL_THRESHOLD,
            fetch_timeout: None,
        }
    }
}

impl ControllerConfig {
    /// Create a config with the default threshold and no timeout
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the scroll threshold
    #[must_use]
    pub fn with_scroll_threshold(mut self, threshold: usize) -> Self {
        self.scroll_threshold = threshold;
        self
    }

    /// Bound every fetch by `timeout`
    #[must_use]
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = Some(timeout);
        self
    }
}

/// Window of item positions currently visible on screen
///
/// Half-open: `start..end`. An empty window means nothing is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibleRange {
    start: usize,
    end: usize,
}

impl VisibleRange {
    /// Create a half-open range; `end < start` yields an empty range
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    /// Range covering positions `first..=last`
    pub fn inclusive(first: usize, last: usize) -> Self {
        if last < first {
            return Self::empty();
        }
        Self::new(first, last + 1)
    }

    /// Range starting at `first` spanning `count` positions
    pub fn from_window(first: usize, count: usize) -> Self {
        Self::new(first, first.saturating_add(count))
    }

    /// Nothing visible
    pub fn empty() -> Self {
        Self::default()
    }

    /// First visible position
    pub fn start(&self) -> usize {
        self.start
    }

    /// One past the last visible position
    pub fn end(&self) -> usize {
        self.end
    }

    /// Number of visible positions
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if nothing is visible
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether the window touches the end of a list of `total` items
    pub fn reaches_end(&self, total: usize) -> bool {
        !self.is_empty() && self.end >= total
    }
}

/// Paging state owned by the controller
///
/// Mutated only through the crate-private transitions below.
#[derive(Debug, Clone)]
pub struct PaginationState<T> {
    accumulated: Vec<T>,
    current_page: u32,
    has_more: bool,
    is_fetching: bool,
    first_page_loaded: bool,
}

impl<T> Default for PaginationState<T> {
    fn default() -> Self {
        Self {
            accumulated: Vec::new(),
            current_page: 1,
            has_more: true,
            is_fetching: false,
            first_page_loaded: false,
        }
    }
}

impl<T> PaginationState<T> {
    /// Create the initial state
    pub fn new() -> Self {
        Self::default()
    }

    /// Items accumulated so far, in page order
    pub fn items(&self) -> &[T] {
        &self.accumulated
    }

    /// Number of accumulated items
    pub fn len(&self) -> usize {
        self.accumulated.len()
    }

    /// Check if nothing has been accumulated
    pub fn is_empty(&self) -> bool {
        self.accumulated.is_empty()
    }

    /// Last successfully loaded page (1 before anything loaded)
    pub fn current_page(&self) -> u32 {
        self.current_page
    }

    /// Whether the last loaded page advertised a successor
    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// Whether a fetch is outstanding
    pub fn is_fetching(&self) -> bool {
        self.is_fetching
    }

    /// Whether page 1 has been committed since the last reset
    pub fn first_page_loaded(&self) -> bool {
        self.first_page_loaded
    }

    /// Page the next load-more would request
    pub fn next_page(&self) -> u32 {
        if self.first_page_loaded {
            self.current_page + 1
        } else {
            1
        }
    }

    /// Infinite-scroll trigger condition
    pub fn should_load_more(
        &self,
        visible: VisibleRange,
        total_count: usize,
        scroll_threshold: usize,
    ) -> bool {
        !self.is_fetching
            && self.has_more
            && visible.reaches_end(total_count)
            && total_count >= scroll_threshold
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn begin_fetch(&mut self) {
        self.is_fetching = true;
    }

    pub(crate) fn fail(&mut self) {
        self.is_fetching = false;
    }
}

impl<T: Clone> PaginationState<T> {
    /// Apply a successful fetch of `page`, returning the event to report
    pub(crate) fn commit(&mut self, page: u32, result: Page<T>) -> PageEvent<T> {
        self.current_page = page;
        self.has_more = result.has_next;
        self.is_fetching = false;
        self.first_page_loaded = true;

        if page == 1 {
            if result.items.is_empty() {
                self.accumulated.clear();
                return PageEvent::EmptyResult;
            }
            self.accumulated = result.items.clone();
            return PageEvent::DataReplaced {
                items: result.items,
            };
        }

        let start_index = self.accumulated.len();
        self.accumulated.extend(result.items.iter().cloned());
        PageEvent::DataAppended {
            start_index,
            items: result.items,
        }
    }
}

/// Point-in-time view of controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationSnapshot {
    /// Last successfully loaded page
    pub current_page: u32,
    /// Whether more pages are advertised
    pub has_more: bool,
    /// Whether a fetch is outstanding
    pub is_fetching: bool,
    /// Number of accumulated items
    pub len: usize,
    /// Page of the outstanding fetch, if any
    pub requested_page: Option<u32>,
    /// Reset counter; completions from older generations are discarded
    pub generation: u64,
}
