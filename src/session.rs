use std::sync::Arc;

use tokio::task::{AbortHandle, JoinSet};

use crate::display::DisplaySurface;
use crate::presenter::{self, EMPTY_KEYWORD_MESSAGE, LOADING_MESSAGE};
use crate::query_client::QueryClient;

/// Wires input triggers to the query client and writes what the presenter
/// renders onto a display surface.
///
/// Overlapping searches are not cancelled; whichever finishes last owns
/// the display.
#[derive(Clone)]
pub struct SearchSession {
    client: Arc<QueryClient>,
    display: Arc<dyn DisplaySurface>,
}

impl SearchSession {
    pub fn new(client: Arc<QueryClient>, display: Arc<dyn DisplaySurface>) -> Self {
        Self { client, display }
    }

    pub fn client(&self) -> &QueryClient {
        &self.client
    }

    /// Explicit search request, e.g. a search button. An empty keyword
    /// prompts for one instead of querying.
    pub async fn submit(&self, keyword: &str) -> String {
        if keyword.is_empty() {
            self.display.replace(EMPTY_KEYWORD_MESSAGE);
            return EMPTY_KEYWORD_MESSAGE.to_string();
        }
        self.run(keyword).await
    }

    /// The input text changed. Clearing the input clears the display.
    pub async fn input_changed(&self, text: &str) -> String {
        if text.is_empty() {
            self.display.replace("");
            return String::new();
        }
        self.run(text).await
    }

    /// Runs [`SearchSession::input_changed`] as a task in `tasks` so the
    /// caller's input loop keeps going. The caller owns reaping the set.
    pub fn spawn_input_changed(&self, tasks: &mut JoinSet<String>, text: String) -> AbortHandle {
        let session = self.clone();
        tasks.spawn(async move { session.input_changed(&text).await })
    }

    async fn run(&self, keyword: &str) -> String {
        self.display.replace(LOADING_MESSAGE);
        let response = self.client.search(keyword).await;
        let text = presenter::format(&response);
        self.display.replace(&text);
        text
    }
}
