//! HTTP client module
//!
//! Transport used by page sources.
//!
//! # Features
//!
//! - **Base URL Resolution**: Relative paths are joined onto a configured base
//! - **Timeouts**: One client-wide request timeout
//! - **Error Classification**: Transport, status and decode failures map onto
//!   distinct [`crate::Error`] variants

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder};

#[cfg(test)]
mod tests;
