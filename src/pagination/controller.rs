//! Infinite-scroll pagination controller
//!
//! Decides when to fetch the next page, merges results into the accumulated
//! list, and reports every state change to a [`PageObserver`].
//!
//! Each fetch runs as a spawned tokio task whose result is sent, tagged with
//! its page number and the reset generation that issued it, into a single
//! completion channel. State only changes when the owner pumps that channel
//! via [`PaginationController::next_completion`] or
//! [`PaginationController::drain_ready`], so all mutation happens on the
//! owner's sequence. A completion issued before the latest [`reset`] is stale
//! and is dropped without any event.
//!
//! [`reset`]: PaginationController::reset

use super::events::{PageEvent, PageObserver};
use super::types::{ControllerConfig, PaginationSnapshot, PaginationState, VisibleRange};
use crate::error::{Error, Result};
use crate::source::{Page, PageSource};
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Result of a fetch task, as delivered on the completion channel
struct Completion<T> {
    generation: u64,
    page: u32,
    result: Result<Page<T>>,
}

/// What happened to a received completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// The completion matched the outstanding fetch and was applied
    Applied,
    /// The completion was superseded by a reset and discarded
    Stale,
}

/// Paging controller for one list
///
/// All methods must be called from within a tokio runtime.
pub struct PaginationController<S: PageSource> {
    source: Arc<S>,
    config: ControllerConfig,
    state: PaginationState<S::Item>,
    observer: Box<dyn PageObserver<S::Item>>,
    generation: u64,
    requested_page: Option<u32>,
    completion_tx: mpsc::UnboundedSender<Completion<S::Item>>,
    completion_rx: mpsc::UnboundedReceiver<Completion<S::Item>>,
}

impl<S> PaginationController<S>
where
    S: PageSource + 'static,
    S::Item: Clone + Send + 'static,
{
    /// Create a controller with the default config
    pub fn new(source: S, observer: impl PageObserver<S::Item> + 'static) -> Self {
        Self::with_config(source, ControllerConfig::default(), observer)
    }

    /// Create a controller with a custom config
    pub fn with_config(
        source: S,
        config: ControllerConfig,
        observer: impl PageObserver<S::Item> + 'static,
    ) -> Self {
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();
        Self {
            source: Arc::new(source),
            config,
            state: PaginationState::new(),
            observer: Box::new(observer),
            generation: 0,
            requested_page: None,
            completion_tx,
            completion_rx,
        }
    }

    /// Controller settings
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Current paging state
    pub fn state(&self) -> &PaginationState<S::Item> {
        &self.state
    }

    /// Accumulated items
    pub fn items(&self) -> &[S::Item] {
        self.state.items()
    }

    /// Copy of the scalar state
    pub fn snapshot(&self) -> PaginationSnapshot {
        PaginationSnapshot {
            current_page: self.state.current_page(),
            has_more: self.state.has_more(),
            is_fetching: self.state.is_fetching(),
            len: self.state.len(),
            requested_page: self.requested_page,
            generation: self.generation,
        }
    }

    /// Drop all loaded data and fetch page 1
    ///
    /// Used for the initial load and pull-to-refresh. An in-flight fetch is
    /// not cancelled; its completion will be discarded as stale.
    pub fn reset(&mut self) {
        if self.state.is_fetching() {
            debug!(
                "Reset supersedes in-flight fetch for page {:?}",
                self.requested_page
            );
        }
        self.generation += 1;
        self.requested_page = None;
        self.state.reset();
        self.issue_fetch(1);
    }

    /// Scroll-position hook
    ///
    /// Fetches the next page when nothing is in flight, more pages exist, the
    /// visible window reaches the end of the `total_count` rendered items and
    /// `total_count` is at least the scroll threshold. Returns whether a fetch
    /// was issued. Otherwise does nothing, so it is safe to call on every
    /// scroll event.
    pub fn maybe_load_more(&mut self, visible: VisibleRange, total_count: usize) -> bool {
        if !self
            .state
            .should_load_more(visible, total_count, self.config.scroll_threshold)
        {
            return false;
        }

        let page = self.state.next_page();
        self.issue_fetch(page);
        true
    }

    /// Wait for the next completion and apply it
    ///
    /// Returns `None` without waiting when no fetch is outstanding and no
    /// completion is queued.
    pub async fn next_completion(&mut self) -> Option<CompletionOutcome> {
        if let Ok(completion) = self.completion_rx.try_recv() {
            return Some(self.handle_completion(completion));
        }
        if !self.state.is_fetching() {
            return None;
        }
        // The controller holds a sender, so the channel never closes here
        let completion = self.completion_rx.recv().await?;
        Some(self.handle_completion(completion))
    }

    /// Wait until the outstanding fetch, if any, has been applied
    pub async fn settle(&mut self) {
        while self.state.is_fetching() {
            if self.next_completion().await.is_none() {
                break;
            }
        }
    }

    /// Apply every completion that has already arrived, without waiting
    ///
    /// Returns the number of completions applied (stale ones excluded).
    pub fn drain_ready(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(completion) = self.completion_rx.try_recv() {
            if self.handle_completion(completion) == CompletionOutcome::Applied {
                applied += 1;
            }
        }
        applied
    }

    fn issue_fetch(&mut self, page: u32) {
        self.state.begin_fetch();
        self.requested_page = Some(page);
        info!("Loading page {page}");
        self.observer.on_event(PageEvent::LoadingStarted { page });

        let source = Arc::clone(&self.source);
        let tx = self.completion_tx.clone();
        let generation = self.generation;
        let timeout = self.config.fetch_timeout;

        tokio::spawn(async move {
            let result = match timeout {
                Some(limit) => tokio::time::timeout(limit, source.fetch_page(page))
                    .await
                    .unwrap_or_else(|_| {
                        Err(Error::Timeout {
                            timeout_ms: limit.as_millis() as u64,
                        })
                    }),
                None => source.fetch_page(page).await,
            };

            let completion = Completion {
                generation,
                page,
                result,
            };
            if tx.send(completion).is_err() {
                debug!("Controller dropped before page {page} completed");
            }
        });
    }

    fn handle_completion(&mut self, completion: Completion<S::Item>) -> CompletionOutcome {
        let Completion {
            generation,
            page,
            result,
        } = completion;

        if generation != self.generation
            || self.requested_page != Some(page)
            || !self.state.is_fetching()
        {
            debug!(
                "Discarding stale completion for page {page} (generation {generation}, current {})",
                self.generation
            );
            return CompletionOutcome::Stale;
        }

        self.requested_page = None;
        match result {
            Ok(fetched) => {
                let count = fetched.len();
                let event = self.state.commit(page, fetched);
                debug!(
                    "Page {page} applied: {count} items, {} total, more pages: {}",
                    self.state.len(),
                    self.state.has_more()
                );
                self.observer.on_event(event);
            }
            Err(error) => {
                self.state.fail();
                warn!("Fetch for page {page} failed: {error}");
                self.observer.on_event(PageEvent::FetchFailed { page, error });
            }
        }
        CompletionOutcome::Applied
    }
}

impl<S: PageSource> std::fmt::Debug for PaginationController<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaginationController")
            .field("config", &self.config)
            .field("current_page", &self.state.current_page())
            .field("has_more", &self.state.has_more())
            .field("is_fetching", &self.state.is_fetching())
            .field("generation", &self.generation)
            .field("requested_page", &self.requested_page)
            .finish_non_exhaustive()
    }
}
