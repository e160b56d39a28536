//! People API page source
//!
//! Fetches `GET {base_url}{people_path}?page=N` and maps the response onto a
//! [`Page`]. A page has a successor exactly when the response carries a
//! non-null `next` URL.

use super::types::{Page, PageSource};
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig};
use crate::types::{PeopleResponse, Person};
use async_trait::async_trait;
use tracing::debug;

/// Default path of the people resource
pub const DEFAULT_PEOPLE_PATH: &str = "/api/people/";

/// Default query parameter carrying the page number
pub const DEFAULT_PAGE_PARAM: &str = "page";

/// Page source backed by the people REST API
#[derive(Debug, Clone)]
pub struct PeopleSource {
    client: HttpClient,
    path: String,
    page_param: String,
}

impl PeopleSource {
    /// Create a source using an existing HTTP client
    pub fn new(client: HttpClient) -> Self {
        Self {
            client,
            path: DEFAULT_PEOPLE_PATH.to_string(),
            page_param: DEFAULT_PAGE_PARAM.to_string(),
        }
    }

    /// Create a source for the given base URL with default client settings
    pub fn from_base_url(base_url: impl Into<String>) -> Result<Self> {
        let config = HttpClientConfig::builder().base_url(base_url).build();
        Ok(Self::new(HttpClient::with_config(config)?))
    }

    /// Override the resource path
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Override the page query parameter name
    #[must_use]
    pub fn with_page_param(mut self, param: impl Into<String>) -> Self {
        self.page_param = param.into();
        self
    }

    /// Fetch a page and return the raw wire response
    pub async fn fetch_response(&self, page: u32) -> Result<PeopleResponse> {
        if page == 0 {
            return Err(Error::Other("page numbers start at 1".to_string()));
        }

        debug!("Requesting {} with {}={page}", self.path, self.page_param);
        let page_value = page.to_string();
        let response: PeopleResponse = self
            .client
            .get_json(&self.path, &[(self.page_param.as_str(), page_value.as_str())])
            .await?;

        debug!(
            "Received {} people on page {page}, next page: {}",
            response.results.len(),
            response.has_next()
        );
        Ok(response)
    }
}

#[async_trait]
impl PageSource for PeopleSource {
    type Item = Person;

    async fn fetch_page(&self, page: u32) -> Result<Page<Person>> {
        let response = self.fetch_response(page).await?;
        let has_next = response.has_next();
        Ok(Page {
            items: response.results,
            has_next,
            total_count: response.count,
        })
    }
}
