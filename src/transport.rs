use std::time::Duration;

use async_trait::async_trait;

use crate::error::QueryError;

/// Performs one HTTP GET and hands back the response body.
///
/// Implementations must map every transport-level failure (connect,
/// timeout, non-2xx status) to [`QueryError::Transport`].
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<String, QueryError>;
}

/// `reqwest` backed transport. The underlying client is reused across calls.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<HttpTransport, QueryError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(HttpTransport { client })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<String, QueryError> {
        let res = self.client.get(url).send().await?;
        let res = res.error_for_status()?;
        let body = res.text().await?;
        Ok(body)
    }
}
