use std::error::Error as StdError;

use thiserror::Error;

/// Failure of a single keyword query. None of these are retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// No keyword was given; raised before any network call.
    #[error("keyword cannot be empty")]
    EmptyInput,

    /// Connection refused, timeout or a non-2xx status.
    #[error("{0}")]
    Transport(String),

    /// The service answered but the body is not a JSON array of results.
    #[error("malformed search response: {0}")]
    MalformedResponse(String),
}

impl From<reqwest::Error> for QueryError {
    fn from(e: reqwest::Error) -> Self {
        QueryError::Transport(error_chain(&e))
    }
}

/// Renders an error followed by each of its sources, joined with `": "`.
/// reqwest keeps the actual cause (e.g. connection refused) in the chain.
pub fn error_chain(e: &dyn StdError) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

impl From<serde_json::Error> for QueryError {
    fn from(e: serde_json::Error) -> Self {
        QueryError::MalformedResponse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("error sending request")]
    struct SendError(#[source] std::io::Error);

    #[test]
    fn test_error_chain_includes_every_source() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "Connection refused");
        let err = SendError(io);
        assert_eq!(error_chain(&err), "error sending request: Connection refused");
    }

    #[test]
    fn test_error_chain_without_source_is_plain_display() {
        assert_eq!(error_chain(&QueryError::EmptyInput), "keyword cannot be empty");
    }
}
