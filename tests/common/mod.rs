//! Shared helpers for the integration tests
#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;

use npc_search::error::QueryError;
use npc_search::query_client::QueryClient;
use npc_search::transport::Transport;

pub const GREET_BODY: &str = r#"[{"_id":"1","_score":0.92,"_source":{"Question":"q","Answer":"a","AnswerNPC":"Hello traveler"}}]"#;

/// Transport returning a canned outcome and recording every requested URL.
/// Individual keywords can get their own body and a response delay.
#[derive(Clone)]
pub struct MockTransport {
    outcome: Result<String, QueryError>,
    bodies: HashMap<String, String>,
    delays: HashMap<String, Duration>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockTransport {
    pub fn returning(body: &str) -> Self {
        Self {
            outcome: Ok(body.to_string()),
            bodies: HashMap::new(),
            delays: HashMap::new(),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(QueryError::Transport(message.to_string())),
            bodies: HashMap::new(),
            delays: HashMap::new(),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// `keyword` is matched against the encoded `input_keyword` value.
    pub fn with_body_for(mut self, keyword: &str, body: &str) -> Self {
        self.bodies.insert(keyword.to_string(), body.to_string());
        self
    }

    pub fn with_delay_for(mut self, keyword: &str, delay: Duration) -> Self {
        self.delays.insert(keyword.to_string(), delay);
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    pub fn client(&self) -> QueryClient {
        QueryClient::new("http://127.0.0.1:8000", Arc::new(self.clone()))
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, url: &str) -> Result<String, QueryError> {
        self.requests.lock().unwrap().push(url.to_string());

        let keyword = url.rsplit("input_keyword=").next().unwrap_or_default();
        if let Some(delay) = self.delays.get(keyword) {
            tokio::time::sleep(*delay).await;
        }
        match self.bodies.get(keyword) {
            Some(body) => Ok(body.clone()),
            None => self.outcome.clone(),
        }
    }
}

/// Serves `router` on an ephemeral local port and returns its base URL.
pub async fn spawn_search_server(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// A local address with nothing listening on it.
pub fn unused_base_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
