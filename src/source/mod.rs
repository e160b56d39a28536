//! Page source module
//!
//! A [`PageSource`] is the asynchronous `fetch_page(n)` operation the
//! pagination controller consumes. [`PeopleSource`] implements it against the
//! people REST API; tests supply their own sources.

mod people;
mod types;

pub use people::{PeopleSource, DEFAULT_PAGE_PARAM, DEFAULT_PEOPLE_PATH};
pub use types::{Page, PageSource};
