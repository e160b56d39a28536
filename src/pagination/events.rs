//! Events reported by the pagination controller

use crate::error::Error;
use tokio::sync::mpsc;

/// A state change the view layer should react to
#[derive(Debug)]
pub enum PageEvent<T> {
    /// A fetch for `page` was issued
    LoadingStarted {
        /// Page being fetched
        page: u32,
    },
    /// Page 1 arrived and replaces the whole list
    DataReplaced {
        /// New list contents
        items: Vec<T>,
    },
    /// A later page arrived and was appended
    DataAppended {
        /// Position of the first appended item
        start_index: usize,
        /// Appended items
        items: Vec<T>,
    },
    /// Page 1 arrived with no items
    EmptyResult,
    /// The fetch for `page` failed; paging state is unchanged
    FetchFailed {
        /// Page that failed
        page: u32,
        /// Failure reported by the page source
        error: Error,
    },
}

impl<T> PageEvent<T> {
    /// Short name used in logs and CLI output
    pub fn name(&self) -> &'static str {
        match self {
            Self::LoadingStarted { .. } => "loading-started",
            Self::DataReplaced { .. } => "data-replaced",
            Self::DataAppended { .. } => "data-appended",
            Self::EmptyResult => "empty-result",
            Self::FetchFailed { .. } => "fetch-failed",
        }
    }

    /// Check if this is a loading-started event
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::LoadingStarted { .. })
    }

    /// Check if this is a fetch-failed event
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::FetchFailed { .. })
    }

    /// Items carried by this event, if any
    pub fn items(&self) -> Option<&[T]> {
        match self {
            Self::DataReplaced { items } | Self::DataAppended { items, .. } => {
                Some(items.as_slice())
            }
            _ => None,
        }
    }
}

/// Receiver of controller events
pub trait PageObserver<T>: Send {
    /// Handle one event
    fn on_event(&mut self, event: PageEvent<T>);
}

impl<T, F> PageObserver<T> for F
where
    F: FnMut(PageEvent<T>) + Send,
{
    fn on_event(&mut self, event: PageEvent<T>) {
        self(event);
    }
}

impl<T: Send> PageObserver<T> for mpsc::UnboundedSender<PageEvent<T>> {
    fn on_event(&mut self, event: PageEvent<T>) {
        // The receiving view may already be gone
        let _ = self.send(event);
    }
}
