//! Pagination module
//!
//! The page-sequencing controller behind infinite scroll.
//!
//! # Overview
//!
//! [`PaginationController`] owns a [`PaginationState`] and drives a
//! [`PageSource`](crate::source::PageSource):
//!
//! - `reset()` clears the list and loads page 1
//! - `maybe_load_more()` is called on every scroll update and loads the next
//!   page once the user reaches the end of a long enough list
//! - completions are applied in order and reported as [`PageEvent`]s
//!
//! At most one fetch is outstanding per reset generation, and nothing is
//! fetched after a page without a successor until the next reset.

mod controller;
mod events;
mod types;

pub use controller::{CompletionOutcome, PaginationController};
pub use events::{PageEvent, PageObserver};
pub use types::{
    ControllerConfig, PaginationSnapshot, PaginationState, VisibleRange, DEFAULT_SCROLL_THRESHOLD,
};
