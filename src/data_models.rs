use serde::{Deserialize, Deserializer, Serialize};

use crate::error::QueryError;

/// The `_source` document of a hit: the stored question/answer pair.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct AnswerSource {
    #[serde(rename = "Question", default)]
    pub question: String,

    #[serde(rename = "Answer", default)]
    pub answer: String,

    /// Text meant to be shown to the user, phrased for the persona.
    #[serde(rename = "AnswerNPC", default)]
    pub answer_for_persona: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct SearchResult {
    #[serde(rename = "_id", default)]
    pub id: String,

    /// Elasticsearch sends `null` here for sorted queries.
    #[serde(rename = "_score", default, deserialize_with = "score_or_zero")]
    pub score: f64,

    #[serde(rename = "_source", default)]
    pub source: AnswerSource,
}

fn score_or_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

impl SearchResult {
    pub fn new(
        id: impl Into<String>,
        score: f64,
        question: impl Into<String>,
        answer: impl Into<String>,
        answer_for_persona: impl Into<String>,
    ) -> SearchResult {
        SearchResult {
            id: id.into(),
            score,
            source: AnswerSource {
                question: question.into(),
                answer: answer.into(),
                answer_for_persona: answer_for_persona.into(),
            },
        }
    }

    pub fn question(&self) -> &str {
        &self.source.question
    }

    pub fn answer(&self) -> &str {
        &self.source.answer
    }

    pub fn answer_for_persona(&self) -> &str {
        &self.source.answer_for_persona
    }
}

/// Hits in server rank order. On the wire this is a bare JSON array.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct SearchResponse {
    pub items: Vec<SearchResult>,
}

impl SearchResponse {
    pub fn new(items: Vec<SearchResult>) -> SearchResponse {
        SearchResponse { items }
    }

    pub fn from_json(body: &str) -> Result<SearchResponse, QueryError> {
        Ok(serde_json::from_str(body)?)
    }

    /// The best ranked hit, if any.
    pub fn top(&self) -> Option<&SearchResult> {
        self.items.first()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
