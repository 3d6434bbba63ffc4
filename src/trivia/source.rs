use std::fmt;

use async_trait::async_trait;

use super::types::{Category, QuestionQuery, RawQuestion};

/// Errors from the trivia API.
///
/// `Network`, `Api` and `Parse` are data-fetch failures: the request never
/// produced usable data. `NoQuestionsAvailable` is a well-formed answer saying
/// the chosen filters matched nothing.
#[derive(Debug, Clone, PartialEq)]
pub enum TriviaError {
    /// Transport failure (timeout, DNS, connection refused).
    Network(String),
    /// Server answered with a non-success HTTP status.
    Api { status: u16, message: String },
    /// Body could not be decoded.
    Parse(String),
    /// API `response_code` was non-zero.
    NoQuestionsAvailable { response_code: i64 },
}

impl TriviaError {
    pub fn is_no_questions(&self) -> bool {
        matches!(self, TriviaError::NoQuestionsAvailable { .. })
    }

    /// Text shown in the inline error banner.
    pub fn user_message(&self) -> String {
        match self {
            TriviaError::NoQuestionsAvailable { .. } => {
                "Not enough questions for this category and difficulty. Try fewer questions or different filters."
                    .to_string()
            }
            other => format!("Could not reach the trivia service ({other}). Check your connection and try again."),
        }
    }
}

impl fmt::Display for TriviaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TriviaError::Network(msg) => write!(f, "network error: {msg}"),
            TriviaError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            TriviaError::Parse(msg) => write!(f, "parse error: {msg}"),
            TriviaError::NoQuestionsAvailable { response_code } => {
                write!(f, "no questions available (response_code {response_code})")
            }
        }
    }
}

impl std::error::Error for TriviaError {}

#[async_trait]
pub trait TriviaSource: Send + Sync {
    /// Returns the name of the source (for logs).
    fn name(&self) -> &str;

    async fn fetch_categories(&self) -> Result<Vec<Category>, TriviaError>;

    /// Fetches one batch of multiple-choice questions. Read-only, safe to retry.
    async fn fetch_questions(&self, query: &QuestionQuery) -> Result<Vec<RawQuestion>, TriviaError>;
}
