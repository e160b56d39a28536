//! # people-pager
//!
//! Page-by-page loading of the people REST API behind an infinite-scroll
//! list, decoupled from any UI toolkit.
//!
//! ## Features
//!
//! - **Pagination Controller**: Page sequencing, single in-flight fetch,
//!   end-of-data detection and stale-result rejection after a refresh
//! - **Event Reporting**: Loading, replace, append, empty and failure events
//!   delivered to any observer (closure or channel)
//! - **People API Source**: `reqwest`-based page source for `/api/people/`
//! - **Headless CLI**: Drive the controller from a terminal
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use people_pager::pagination::{PaginationController, VisibleRange};
//! use people_pager::source::PeopleSource;
//!
//! #[tokio::main]
//! async fn main() -> people_pager::Result<()> {
//!     let source = PeopleSource::from_base_url("https://swapi.dev")?;
//!     let (tx, mut events) = tokio::sync::mpsc::unbounded_channel();
//!     let mut controller = PaginationController::new(source, tx);
//!
//!     // Initial load
//!     controller.reset();
//!     controller.settle().await;
//!
//!     // The view reports that the last row became visible
//!     let total = controller.items().len();
//!     controller.maybe_load_more(VisibleRange::inclusive(total - 1, total - 1), total);
//!     controller.settle().await;
//!
//!     while let Ok(event) = events.try_recv() {
//!         println!("{}", event.name());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//!   view (scroll events)          view (render events)
//!          │                               ▲
//!          ▼                               │
//! ┌─────────────────────────────────────────────────┐
//! │              PaginationController               │
//! │  reset() · maybe_load_more() · next_completion()│
//! └────────────┬───────────────────────▲────────────┘
//!        spawn │ fetch_page(n)          │ completion channel
//!              ▼                        │
//! ┌─────────────────────────────────────────────────┐
//! │      PageSource  ──  PeopleSource  ──  HTTP     │
//! └─────────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Wire format and record types
pub mod types;

/// HTTP transport
pub mod http;

/// Page sources
pub mod source;

/// Infinite-scroll pagination controller
pub mod pagination;

/// Application configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, FetchErrorKind, Result};
pub use pagination::{
    ControllerConfig, PageEvent, PageObserver, PaginationController, VisibleRange,
};
pub use source::{Page, PageSource, PeopleSource};
pub use types::{PeopleResponse, Person};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
