//! Turns the outcome of a keyword query into the text shown to the user.

use crate::data_models::SearchResponse;
use crate::error::QueryError;

pub const ERROR_PREFIX: &str = "Error: ";
pub const NO_RESULTS_MESSAGE: &str = "No relevant results found.";
pub const EMPTY_KEYWORD_MESSAGE: &str = "Please enter a keyword!";
pub const LOADING_MESSAGE: &str = "Loading...";

/// Renders only the top hit; trailing hits are ignored.
pub fn format(response: &Result<SearchResponse, QueryError>) -> String {
    match response {
        Err(e) => format!("{ERROR_PREFIX}{e}"),
        Ok(response) => match response.top() {
            None => NO_RESULTS_MESSAGE.to_string(),
            Some(top) => format!("{}\n\nScore: {}", top.answer_for_persona(), top.score),
        },
    }
}
