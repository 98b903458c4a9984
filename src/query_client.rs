use std::sync::Arc;

use crate::config::Config;
use crate::data_models::SearchResponse;
use crate::error::QueryError;
use crate::transport::{HttpTransport, Transport};

pub const SEARCH_PATH: &str = "/search/";
pub const KEYWORD_PARAM: &str = "input_keyword";

/// Sends keyword queries to the search service. Holds no per-query state,
/// so one client can serve any number of overlapping searches.
pub struct QueryClient {
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl QueryClient {
    pub fn new(base_url: &str, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            transport,
        }
    }

    /// Builds a client talking HTTP to `config.base_url`.
    pub fn from_config(config: &Config) -> Result<Self, QueryError> {
        let transport = HttpTransport::new(config.timeout)?;
        Ok(Self::new(&config.base_url, Arc::new(transport)))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn search_url(&self, keyword: &str) -> String {
        format!(
            "{}{}?{}={}",
            self.base_url,
            SEARCH_PATH,
            KEYWORD_PARAM,
            urlencoding::encode(keyword)
        )
    }

    /// Runs one keyword query. An empty keyword never reaches the transport.
    pub async fn search(&self, keyword: &str) -> Result<SearchResponse, QueryError> {
        if keyword.is_empty() {
            return Err(QueryError::EmptyInput);
        }

        let url = self.search_url(keyword);
        log::debug!("searching: {url}");

        let body = self.transport.get(&url).await.map_err(|e| {
            log::warn!("search request failed for {url}: {e}");
            e
        })?;

        let response = SearchResponse::from_json(&body)?;
        log::info!("keyword {keyword:?} matched {} result(s)", response.len());
        Ok(response)
    }
}
