//! # Application State
//!
//! Core business state for Trivia. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── source: Arc<dyn TriviaSource>   // remote question bank
//! ├── screen: Screen                  // Home | Quiz | Results
//! ├── setup: QuizSetup                // category / difficulty / amount
//! ├── categories: Vec<Category>       // fetched once at startup
//! ├── session: QuizSession            // in-progress quiz
//! ├── summary: Option<QuizSummary>    // last completed quiz
//! ├── history: HistoryStore           // persisted past attempts
//! ├── confirm_clear: bool             // clear-history awaiting confirmation
//! ├── is_loading: bool                // question fetch in flight
//! ├── error: Option<String>           // dismissible inline message
//! └── status_message: String          // status bar text
//! ```
//!
//! Lifecycle: init (load history, fetch categories) → active (quiz loop)
//! → idle (home). State changes only happen through `update(state, action)`
//! in action.rs.

use std::sync::Arc;

use crate::core::config::ResolvedConfig;
use crate::core::history::{HistoryEntry, HistoryStore};
use crate::core::quiz::{QuizSession, QuizSummary};
use crate::trivia::{Category, Difficulty, MAX_AMOUNT, MIN_AMOUNT, QuestionQuery, TriviaSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Home,
    Quiz,
    Results,
}

/// What the next quiz will ask for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSetup {
    pub category: Option<u32>,
    pub difficulty: Option<Difficulty>,
    pub amount: u8,
}

impl QuizSetup {
    pub fn query(&self) -> QuestionQuery {
        QuestionQuery::new(self.amount, self.category, self.difficulty)
    }

    pub fn adjust_amount(&mut self, delta: i16) {
        let next = (self.amount as i16 + delta).clamp(MIN_AMOUNT as i16, MAX_AMOUNT as i16);
        self.amount = next as u8;
    }

    pub fn difficulty_label(&self) -> &'static str {
        self.difficulty.map(Difficulty::label).unwrap_or("Any")
    }
}

pub struct App {
    pub source: Arc<dyn TriviaSource>,
    pub screen: Screen,
    pub setup: QuizSetup,
    pub categories: Vec<Category>,
    pub session: QuizSession,
    pub summary: Option<QuizSummary>,
    /// Setup the running/last quiz was started with (used for history and retake).
    pub active_setup: Option<QuizSetup>,
    pub history: HistoryStore,
    pub history_display_limit: usize,
    pub confirm_clear: bool,
    pub is_loading: bool,
    pub error: Option<String>,
    pub status_message: String,
}

impl App {
    pub fn new(source: Arc<dyn TriviaSource>, history: HistoryStore, config: &ResolvedConfig) -> Self {
        Self {
            source,
            screen: Screen::Home,
            setup: QuizSetup {
                category: config.category,
                difficulty: config.difficulty,
                amount: config.amount,
            },
            categories: Vec::new(),
            session: QuizSession::new(),
            summary: None,
            active_setup: None,
            history,
            history_display_limit: config.history_display_limit,
            confirm_clear: false,
            is_loading: false,
            error: None,
            status_message: String::from("Welcome to Trivia!"),
        }
    }

    /// Human label for a category id; unknown ids fall back to "Category N".
    pub fn category_label(&self, category: Option<u32>) -> String {
        match category {
            None => "Any Category".to_string(),
            Some(id) => self
                .categories
                .iter()
                .find(|c| c.id == id)
                .map(|c| c.name.clone())
                .unwrap_or_else(|| format!("Category {id}")),
        }
    }

    /// Moves the category selection through Any → each fetched category → Any.
    pub fn cycle_category(&mut self, forward: bool) {
        let mut options: Vec<Option<u32>> = vec![None];
        options.extend(self.categories.iter().map(|c| Some(c.id)));
        let pos = options
            .iter()
            .position(|c| *c == self.setup.category)
            .unwrap_or(0);
        let next = if forward {
            (pos + 1) % options.len()
        } else {
            (pos + options.len() - 1) % options.len()
        };
        self.setup.category = options[next];
    }

    pub fn recent_history(&self) -> Vec<HistoryEntry> {
        self.history.list(Some(self.history_display_limit))
    }
}
