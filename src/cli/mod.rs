//! CLI module
//!
//! Headless driver for the pagination controller.
//!
//! # Commands
//!
//! - `page` - Fetch and print a single page
//! - `browse` - Scroll through the list, printing every controller event
//! - `detail` - Show one person from the list

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::{event_to_json, Runner};
