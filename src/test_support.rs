//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::sync::Arc;

use async_trait::async_trait;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use crate::core::config::ResolvedConfig;
use crate::core::history::HistoryStore;
use crate::core::state::App;
use crate::trivia::{
    Category, Question, QuestionQuery, RawQuestion, TriviaError, TriviaSource,
};

/// A source that never has anything, for tests that don't touch the network.
pub struct NoopSource;

#[async_trait]
impl TriviaSource for NoopSource {
    fn name(&self) -> &str {
        "noop"
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, TriviaError> {
        Ok(Vec::new())
    }

    async fn fetch_questions(&self, _query: &QuestionQuery) -> Result<Vec<RawQuestion>, TriviaError> {
        Ok(Vec::new())
    }
}

pub fn test_config() -> ResolvedConfig {
    ResolvedConfig {
        amount: 5,
        difficulty: None,
        category: None,
        base_url: "http://localhost".to_string(),
        timeout_secs: 1,
        history_display_limit: 5,
    }
}

/// Creates a test App with a NoopSource and in-memory history.
pub fn test_app() -> App {
    App::new(Arc::new(NoopSource), HistoryStore::in_memory(), &test_config())
}

/// Question `i` has correct answer "Answer i" and wrong answers "Wrong ia/ib/ic".
pub fn sample_raw(i: usize) -> RawQuestion {
    RawQuestion {
        question: format!("Question {i}?"),
        correct_answer: format!("Answer {i}"),
        incorrect_answers: vec![
            format!("Wrong {i}a"),
            format!("Wrong {i}b"),
            format!("Wrong {i}c"),
        ],
    }
}

pub fn sample_questions(n: usize) -> Vec<Question> {
    let mut rng = SmallRng::seed_from_u64(n as u64);
    (0..n)
        .map(|i| Question::from_raw(sample_raw(i), &mut rng))
        .collect()
}

pub fn sample_categories() -> Vec<Category> {
    vec![
        Category {
            id: 9,
            name: "General Knowledge".to_string(),
        },
        Category {
            id: 18,
            name: "Science: Computers".to_string(),
        },
    ]
}
