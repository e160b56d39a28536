//! Common types used throughout people-pager
//!
//! Wire format of the people API and the `Person` record it returns.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON object type
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

// ============================================================================
// Person
// ============================================================================

/// One entry of the people resource
///
/// Only the fields the list and detail views show are typed. Every other
/// field of the upstream record is kept in `extra` untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// Display name
    pub name: String,

    /// Height in centimetres, as sent by the API (may be "unknown")
    #[serde(default)]
    pub height: String,

    /// Gender, as sent by the API
    #[serde(default)]
    pub gender: String,

    /// Hair colour, as sent by the API
    #[serde(default)]
    pub hair_color: String,

    /// Birth year, used as the person's identifier on the detail view
    #[serde(default)]
    pub birth_year: String,

    /// Canonical resource URL, when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Remaining upstream fields
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl Person {
    /// Create a person with just a name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            height: String::new(),
            gender: String::new(),
            hair_color: String::new(),
            birth_year: String::new(),
            url: None,
            extra: JsonObject::new(),
        }
    }

    /// Identifier shown on the detail view
    pub fn id(&self) -> &str {
        &self.birth_year
    }

    /// One-line summary used by list rows
    pub fn summary(&self) -> String {
        format!(
            "{} | Height: {} cm | Gender: {}",
            self.name, self.height, self.gender
        )
    }

    /// Labelled fields shown on the detail view
    pub fn detail_fields(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Name", self.name.as_str()),
            ("Height", self.height.as_str()),
            ("Gender", self.gender.as_str()),
            ("Hair Color", self.hair_color.as_str()),
            ("Birth Year", self.birth_year.as_str()),
        ]
    }
}

// ============================================================================
// Wire Format
// ============================================================================

/// One page of the people resource as sent over the wire
///
/// `next` and `previous` are absolute URLs or null. Only `next` and `results`
/// drive pagination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeopleResponse {
    /// Total number of people across all pages
    #[serde(default)]
    pub count: Option<u64>,

    /// URL of the next page, if any
    #[serde(default)]
    pub next: Option<String>,

    /// URL of the previous page, if any
    #[serde(default)]
    pub previous: Option<String>,

    /// People on this page
    pub results: Vec<Person>,
}

impl PeopleResponse {
    /// Whether the API advertises a further page
    pub fn has_next(&self) -> bool {
        self.next.as_deref().is_some_and(|next| !next.is_empty())
    }
}
