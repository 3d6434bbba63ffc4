use std::fmt;

use clap::ValueEnum;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::shuffle::shuffle;

/// Smallest batch the API will serve.
pub const MIN_AMOUNT: u8 = 1;
/// Largest batch the API will serve in one call.
pub const MAX_AMOUNT: u8 = 50;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: u32,
    pub name: String,
}

/// Question difficulty filter. `None` at the call site means "any".
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Value used in the `difficulty` query parameter.
    pub fn as_param(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    /// Cycles Any → Easy → Medium → Hard → Any (or backwards).
    pub fn cycle(current: Option<Difficulty>, forward: bool) -> Option<Difficulty> {
        let order = [None, Some(Difficulty::Easy), Some(Difficulty::Medium), Some(Difficulty::Hard)];
        let pos = order.iter().position(|d| *d == current).unwrap_or(0);
        let next = if forward {
            (pos + 1) % order.len()
        } else {
            (pos + order.len() - 1) % order.len()
        };
        order[next]
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Filters for one question batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionQuery {
    pub amount: u8,
    pub category: Option<u32>,
    pub difficulty: Option<Difficulty>,
}

impl QuestionQuery {
    /// Builds a query with `amount` clamped to what the API accepts.
    pub fn new(amount: u8, category: Option<u32>, difficulty: Option<Difficulty>) -> Self {
        Self {
            amount: amount.clamp(MIN_AMOUNT, MAX_AMOUNT),
            category,
            difficulty,
        }
    }

    /// Query string pairs, filters only present when set.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("amount", self.amount.to_string()),
            ("type", "multiple".to_string()),
        ];
        if let Some(category) = self.category {
            params.push(("category", category.to_string()));
        }
        if let Some(difficulty) = self.difficulty {
            params.push(("difficulty", difficulty.as_param().to_string()));
        }
        params
    }
}

/// A question exactly as the API returns it (entity-encoded text).
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RawQuestion {
    pub question: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    pub text: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
    /// Shuffled once on construction, never reordered afterwards.
    pub answers: Vec<String>,
}

impl Question {
    pub fn from_raw<R: Rng + ?Sized>(raw: RawQuestion, rng: &mut R) -> Self {
        let mut pool = raw.incorrect_answers.clone();
        pool.push(raw.correct_answer.clone());
        let answers = shuffle(&pool, rng);
        Self {
            text: raw.question,
            correct_answer: raw.correct_answer,
            incorrect_answers: raw.incorrect_answers,
            answers,
        }
    }
}

/// Converts a fetched batch into playable questions using the thread RNG.
pub fn build_questions(raws: Vec<RawQuestion>) -> Vec<Question> {
    let mut rng = rand::thread_rng();
    raws.into_iter()
        .map(|raw| Question::from_raw(raw, &mut rng))
        .collect()
}

// ============================================================================
// Wire envelopes
// ============================================================================

#[derive(Deserialize, Debug)]
pub(crate) struct CategoryResponse {
    pub trivia_categories: Vec<Category>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct QuestionResponse {
    pub response_code: i64,
    #[serde(default)]
    pub results: Vec<RawQuestion>,
}
