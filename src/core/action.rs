//! # Actions
//!
//! Everything that can happen in Trivia becomes an `Action`.
//! User presses Enter on "Start"? That's `Action::StartQuiz`.
//! API responds? That's `Action::QuestionsLoaded(questions)`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state and returns an `Effect` describing any I/O the adapter must perform.
//! No network or disk access happens in `update` itself.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use chrono::Utc;
use log::{debug, info, warn};

use crate::core::history::HistoryEntry;
use crate::core::quiz::{Progress, QuizSession, SessionError};
use crate::core::state::{App, Screen};
use crate::trivia::{Category, Question, QuestionQuery, TriviaError};

#[derive(Debug, Clone)]
pub enum Action {
    // Startup
    CategoriesLoaded(Vec<Category>),
    CategoriesFailed(TriviaError),

    // Home screen
    CycleCategory { forward: bool },
    CycleDifficulty { forward: bool },
    AdjustAmount(i16),
    StartQuiz,
    QuestionsLoaded(Vec<Question>),
    QuestionsFailed(TriviaError),
    RequestClearHistory,
    ConfirmClearHistory,
    CancelClearHistory,
    DismissError,

    // Quiz screen
    SelectAnswer(usize),
    NextQuestion,
    ExitQuiz,

    // Results screen
    Retake,
    GoHome,

    Quit,
}

/// Side effects requested by `update()`, executed by the UI adapter.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    Quit,
    FetchQuestions(QuestionQuery),
    RecordHistory(HistoryEntry),
    ClearHistory,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    debug!("update: {:?}", action);
    match action {
        Action::CategoriesLoaded(categories) => {
            info!("{} categories available", categories.len());
            app.categories = categories;
            Effect::None
        }
        Action::CategoriesFailed(e) => {
            warn!("Category fetch failed: {}", e);
            app.categories.clear();
            app.error = Some(format!(
                "Could not load categories ({e}). You can still play with any category."
            ));
            Effect::None
        }

        Action::CycleCategory { forward } => {
            if app.screen == Screen::Home && !app.is_loading {
                app.cycle_category(forward);
            }
            Effect::None
        }
        Action::CycleDifficulty { forward } => {
            if app.screen == Screen::Home && !app.is_loading {
                app.setup.difficulty =
                    crate::trivia::Difficulty::cycle(app.setup.difficulty, forward);
            }
            Effect::None
        }
        Action::AdjustAmount(delta) => {
            if app.screen == Screen::Home && !app.is_loading {
                app.setup.adjust_amount(delta);
            }
            Effect::None
        }

        Action::StartQuiz => {
            if app.screen != Screen::Home {
                return Effect::None;
            }
            begin_fetch(app)
        }
        Action::Retake => {
            if app.screen != Screen::Results {
                return Effect::None;
            }
            if let Some(setup) = app.active_setup.clone() {
                app.setup = setup;
            }
            begin_fetch(app)
        }

        Action::QuestionsLoaded(questions) => {
            app.is_loading = false;
            let count = questions.len();
            let mut session = QuizSession::new();
            match session.start(questions) {
                Ok(()) => {
                    info!("Quiz started with {} questions", count);
                    app.session = session;
                    app.summary = None;
                    app.screen = Screen::Quiz;
                    app.status_message = String::from("Good luck!");
                }
                Err(SessionError::EmptyQuestionSet) => {
                    app.error = Some(
                        TriviaError::NoQuestionsAvailable { response_code: 0 }.user_message(),
                    );
                    app.screen = Screen::Home;
                    app.status_message.clear();
                }
                Err(e) => {
                    warn!("Unexpected session error on start: {}", e);
                    app.error = Some(e.to_string());
                }
            }
            Effect::None
        }
        Action::QuestionsFailed(e) => {
            if e.is_no_questions() {
                info!("Not enough questions for {:?}", app.active_setup);
            } else {
                warn!("Question fetch failed: {}", e);
            }
            app.is_loading = false;
            app.error = Some(e.user_message());
            app.screen = Screen::Home;
            app.status_message.clear();
            Effect::None
        }

        Action::RequestClearHistory => {
            if app.screen != Screen::Home {
                return Effect::None;
            }
            if app.history.is_empty() {
                app.status_message = String::from("History is already empty");
            } else {
                app.confirm_clear = true;
            }
            Effect::None
        }
        Action::ConfirmClearHistory => {
            if !app.confirm_clear {
                return Effect::None;
            }
            app.confirm_clear = false;
            app.status_message = String::from("History cleared");
            Effect::ClearHistory
        }
        Action::CancelClearHistory => {
            app.confirm_clear = false;
            Effect::None
        }
        Action::DismissError => {
            app.error = None;
            Effect::None
        }

        Action::SelectAnswer(index) => {
            if app.screen != Screen::Quiz {
                return Effect::None;
            }
            if let Some(record) = app.session.select_answer_at(index) {
                app.status_message = if record.is_correct {
                    String::from("Correct!")
                } else {
                    String::from("Incorrect")
                };
            }
            Effect::None
        }
        Action::NextQuestion => {
            if app.screen != Screen::Quiz {
                return Effect::None;
            }
            match app.session.advance() {
                Ok(Progress::NextQuestion(_)) => {
                    app.status_message.clear();
                    Effect::None
                }
                Ok(Progress::Finished) => finish_quiz(app),
                Err(e) => {
                    app.status_message = e.to_string();
                    Effect::None
                }
            }
        }
        Action::ExitQuiz => {
            if app.screen == Screen::Quiz {
                info!("Quiz abandoned");
                app.session = QuizSession::new();
                app.screen = Screen::Home;
                app.status_message.clear();
            }
            Effect::None
        }

        Action::GoHome => {
            if app.is_loading {
                debug!("Ignoring navigation: fetch in flight");
                return Effect::None;
            }
            app.summary = None;
            app.session = QuizSession::new();
            app.screen = Screen::Home;
            app.status_message.clear();
            Effect::None
        }

        Action::Quit => Effect::Quit,
    }
}

/// Starts a question fetch unless one is already in flight.
fn begin_fetch(app: &mut App) -> Effect {
    if app.is_loading {
        debug!("Ignoring start request: fetch already in flight");
        return Effect::None;
    }
    app.is_loading = true;
    app.error = None;
    app.confirm_clear = false;
    app.active_setup = Some(app.setup.clone());
    app.status_message = String::from("Loading questions...");
    Effect::FetchQuestions(app.setup.query())
}

fn finish_quiz(app: &mut App) -> Effect {
    let Some(summary) = app.session.summary() else {
        return Effect::None;
    };
    let setup = app.active_setup.clone().unwrap_or_else(|| app.setup.clone());
    let entry = HistoryEntry::from_summary(
        &summary,
        &app.category_label(setup.category),
        setup.difficulty_label(),
        Utc::now(),
    );
    info!(
        "Quiz complete: {}/{} ({}%)",
        summary.score,
        summary.total,
        summary.percentage()
    );
    app.summary = Some(summary);
    app.session = QuizSession::new();
    app.screen = Screen::Results;
    app.status_message = String::from("Quiz complete");
    Effect::RecordHistory(entry)
}

/// Runs history effects against `app.history`. Any other effect is handed
/// back for the caller to execute.
pub fn apply_history_effect(app: &mut App, effect: Effect) -> Effect {
    match effect {
        Effect::RecordHistory(entry) => {
            if let Err(e) = app.history.record(entry) {
                warn!("Failed to save quiz history: {}", e);
                app.status_message = format!("Could not save history: {e}");
            }
            Effect::None
        }
        Effect::ClearHistory => {
            if let Err(e) = app.history.clear() {
                warn!("Failed to clear quiz history: {}", e);
                app.status_message = format!("Could not clear history: {e}");
            }
            Effect::None
        }
        other => other,
    }
}
