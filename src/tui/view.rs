//! # View Model
//!
//! `build_view()` is a pure function from application state to a description
//! of what to draw. Components only render these structs.
//!
//! ```text
//! (App, Cursor) ──build_view()──▶ View ──components──▶ Frame
//! ```
//!
//! The view never scores anything. Scores and percentages come from the quiz
//! session and history entries; text is entity-decoded here for display.

use chrono::{DateTime, Local};

use crate::core::history::HistoryEntry;
use crate::core::quiz::QuizSummary;
use crate::core::state::{App, Screen};
use crate::tui::entities::decode_entities;

/// Focusable rows on the home screen, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HomeField {
    Category,
    Difficulty,
    Amount,
    #[default]
    Start,
}

impl HomeField {
    const ORDER: [HomeField; 4] = [
        HomeField::Category,
        HomeField::Difficulty,
        HomeField::Amount,
        HomeField::Start,
    ];

    pub fn next(self) -> Self {
        let pos = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(pos + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let pos = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(pos + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// Presentation-only cursor state owned by the TUI.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cursor {
    pub home_focus: HomeField,
    pub answer_highlight: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub status: String,
    pub is_loading: bool,
    pub error: Option<String>,
    pub screen: ScreenView,
    pub help: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScreenView {
    Home(HomeView),
    Quiz(QuizView),
    Results(ResultsView),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetupRow {
    pub label: &'static str,
    pub value: String,
    pub focused: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub when: String,
    pub category: String,
    pub difficulty: String,
    pub score: String,
    pub percentage: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HomeView {
    pub setup: Vec<SetupRow>,
    pub start_label: &'static str,
    pub start_enabled: bool,
    pub start_focused: bool,
    /// Empty means the history panel is hidden.
    pub history: Vec<HistoryRow>,
    pub confirm_clear: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionState {
    Idle,
    Highlighted,
    /// Revealed correct answer.
    Correct,
    /// The user's pick, and it was wrong.
    Incorrect,
    /// Answered; neither picked nor correct.
    Dimmed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OptionView {
    pub key: char,
    pub text: String,
    pub state: OptionState,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QuizView {
    pub progress: String,
    pub score: String,
    pub question: String,
    pub options: Vec<OptionView>,
    pub answered: bool,
    pub feedback: Option<String>,
    pub next_label: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReviewRow {
    pub number: usize,
    pub question: String,
    pub your_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResultsView {
    pub headline: String,
    pub percentage: String,
    pub review: Vec<ReviewRow>,
}

const HOME_HELP: &str = " ↑↓ Move  ←→ Change  Enter Start  c Clear history  q Quit ";
const CONFIRM_HELP: &str = " y Confirm clear  any other key Cancel ";
const QUIZ_HELP: &str = " ↑↓ Move  Enter/1-9 Answer  n Next  Esc Exit ";
const RESULTS_HELP: &str = " ↑↓ Scroll  r Retake  Enter Home  q Quit ";

pub fn build_view(app: &App, cursor: &Cursor) -> View {
    let (screen, help) = match app.screen {
        Screen::Home => {
            let help = if app.confirm_clear { CONFIRM_HELP } else { HOME_HELP };
            (ScreenView::Home(home_view(app, cursor)), help)
        }
        Screen::Quiz => match quiz_view(app, cursor) {
            Some(view) => (ScreenView::Quiz(view), QUIZ_HELP),
            None => (ScreenView::Home(home_view(app, cursor)), HOME_HELP),
        },
        Screen::Results => match &app.summary {
            Some(summary) => (ScreenView::Results(results_view(summary)), RESULTS_HELP),
            None => (ScreenView::Home(home_view(app, cursor)), HOME_HELP),
        },
    };

    View {
        status: app.status_message.clone(),
        is_loading: app.is_loading,
        error: app.error.clone(),
        screen,
        help,
    }
}

fn home_view(app: &App, cursor: &Cursor) -> HomeView {
    let focus = cursor.home_focus;
    let setup = vec![
        SetupRow {
            label: "Category",
            value: app.category_label(app.setup.category),
            focused: focus == HomeField::Category,
        },
        SetupRow {
            label: "Difficulty",
            value: app.setup.difficulty_label().to_string(),
            focused: focus == HomeField::Difficulty,
        },
        SetupRow {
            label: "Questions",
            value: app.setup.amount.to_string(),
            focused: focus == HomeField::Amount,
        },
    ];

    HomeView {
        setup,
        start_label: if app.is_loading { "Loading..." } else { "Start Quiz" },
        start_enabled: !app.is_loading,
        start_focused: focus == HomeField::Start,
        history: app.recent_history().iter().map(history_row).collect(),
        confirm_clear: app.confirm_clear,
    }
}

fn history_row(entry: &HistoryEntry) -> HistoryRow {
    HistoryRow {
        when: format_timestamp(&entry.timestamp),
        category: entry.category_label.clone(),
        difficulty: entry.difficulty.clone(),
        score: format!("{}/{}", entry.score, entry.total),
        percentage: format!("{}%", entry.percentage),
    }
}

/// Format an RFC 3339 timestamp as a short local date, e.g. "Jan 15 14:03".
/// Unparseable values are shown verbatim.
pub fn format_timestamp(ts: &str) -> String {
    match DateTime::parse_from_rfc3339(ts) {
        Ok(dt) => dt.with_timezone(&Local).format("%b %d %H:%M").to_string(),
        Err(_) => ts.to_string(),
    }
}

fn quiz_view(app: &App, cursor: &Cursor) -> Option<QuizView> {
    let session = &app.session;
    let question = session.current_question()?;
    let index = session.current_index()?;
    let selected = session.selected_answer();
    let last_record = selected.and_then(|_| session.answer_log().last());

    let highlight = cursor
        .answer_highlight
        .min(question.answers.len().saturating_sub(1));

    let options = question
        .answers
        .iter()
        .enumerate()
        .map(|(i, answer)| {
            let state = match selected {
                None if i == highlight => OptionState::Highlighted,
                None => OptionState::Idle,
                Some(_) if *answer == question.correct_answer => OptionState::Correct,
                Some(pick) if pick == answer => OptionState::Incorrect,
                Some(_) => OptionState::Dimmed,
            };
            OptionView {
                key: char::from_digit((i + 1) as u32, 10).unwrap_or('·'),
                text: decode_entities(answer),
                state,
            }
        })
        .collect();

    let feedback = last_record.map(|record| {
        if record.is_correct {
            "Correct!".to_string()
        } else {
            format!(
                "Incorrect. The answer was: {}",
                decode_entities(&record.correct_answer)
            )
        }
    });

    Some(QuizView {
        progress: format!("Question {} of {}", index + 1, session.total()),
        score: format!("Score: {}", session.score()),
        question: decode_entities(&question.text),
        options,
        answered: selected.is_some(),
        feedback,
        next_label: if session.is_last_question() { "See Results" } else { "Next" },
    })
}

fn results_view(summary: &QuizSummary) -> ResultsView {
    ResultsView {
        headline: format!("You scored {} / {}", summary.score, summary.total),
        percentage: format!("{}%", summary.percentage()),
        review: summary
            .answer_log
            .iter()
            .enumerate()
            .map(|(i, record)| ReviewRow {
                number: i + 1,
                question: decode_entities(&record.question_text),
                your_answer: decode_entities(&record.selected_answer),
                correct_answer: decode_entities(&record.correct_answer),
                is_correct: record.is_correct,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, apply_history_effect, update};
    use crate::core::history::HistoryEntry;
    use crate::test_support::{sample_questions, test_app};

    fn quiz_app() -> App {
        let mut app = test_app();
        update(&mut app, Action::StartQuiz);
        let mut questions = sample_questions(2);
        questions[0].text = "Who wrote &quot;Hamlet&quot;?".to_string();
        update(&mut app, Action::QuestionsLoaded(questions));
        app
    }

    fn entry(label: &str) -> HistoryEntry {
        HistoryEntry {
            timestamp: "2024-03-01T10:00:00+00:00".to_string(),
            category_label: label.to_string(),
            difficulty: "Easy".to_string(),
            score: 4,
            total: 5,
            percentage: 80,
        }
    }

    #[test]
    fn test_home_view_defaults() {
        let app = test_app();
        let view = build_view(&app, &Cursor::default());
        let ScreenView::Home(home) = view.screen else {
            panic!("expected home");
        };
        assert_eq!(home.setup[0].value, "Any Category");
        assert_eq!(home.setup[1].value, "Any");
        assert_eq!(home.setup[2].value, "5");
        assert!(home.start_enabled);
        assert!(home.start_focused);
        assert!(home.history.is_empty());
    }

    #[test]
    fn test_start_disabled_while_loading() {
        let mut app = test_app();
        update(&mut app, Action::StartQuiz);
        let view = build_view(&app, &Cursor::default());
        let ScreenView::Home(home) = view.screen else {
            panic!("expected home");
        };
        assert!(!home.start_enabled);
        assert_eq!(home.start_label, "Loading...");
        assert!(view.is_loading);
    }

    #[test]
    fn test_home_history_limited_and_newest_first() {
        let mut app = test_app();
        for i in 0..7 {
            app.history.record(entry(&format!("Cat {i}"))).unwrap();
        }
        let ScreenView::Home(home) = build_view(&app, &Cursor::default()).screen else {
            panic!("expected home");
        };
        assert_eq!(home.history.len(), 5);
        assert_eq!(home.history[0].category, "Cat 6");
        assert_eq!(home.history[0].score, "4/5");
        assert_eq!(home.history[0].percentage, "80%");
    }

    #[test]
    fn test_history_hidden_after_clear() {
        let mut app = test_app();
        app.history.record(entry("Cat")).unwrap();
        update(&mut app, Action::RequestClearHistory);
        let view = build_view(&app, &Cursor::default());
        assert_eq!(view.help, CONFIRM_HELP);
        let effect = update(&mut app, Action::ConfirmClearHistory);
        apply_history_effect(&mut app, effect);
        let ScreenView::Home(home) = build_view(&app, &Cursor::default()).screen else {
            panic!("expected home");
        };
        assert!(home.history.is_empty());
        assert!(!home.confirm_clear);
    }

    #[test]
    fn test_quiz_view_decodes_question() {
        let app = quiz_app();
        let ScreenView::Quiz(quiz) = build_view(&app, &Cursor::default()).screen else {
            panic!("expected quiz");
        };
        assert_eq!(quiz.question, "Who wrote \"Hamlet\"?");
        assert_eq!(quiz.progress, "Question 1 of 2");
        assert_eq!(quiz.options.len(), 4);
        assert_eq!(quiz.options[0].key, '1');
        assert_eq!(quiz.options[0].state, OptionState::Highlighted);
        assert!(!quiz.answered);
        assert_eq!(quiz.next_label, "Next");
    }

    #[test]
    fn test_quiz_view_reveals_after_answer() {
        let mut app = quiz_app();
        let question = app.session.current_question().unwrap().clone();
        let wrong = question
            .answers
            .iter()
            .position(|a| *a != question.correct_answer)
            .unwrap();
        update(&mut app, Action::SelectAnswer(wrong));

        let ScreenView::Quiz(quiz) = build_view(&app, &Cursor::default()).screen else {
            panic!("expected quiz");
        };
        assert!(quiz.answered);
        assert_eq!(quiz.options[wrong].state, OptionState::Incorrect);
        let correct = question
            .answers
            .iter()
            .position(|a| *a == question.correct_answer)
            .unwrap();
        assert_eq!(quiz.options[correct].state, OptionState::Correct);
        assert_eq!(
            quiz.options
                .iter()
                .filter(|o| o.state == OptionState::Dimmed)
                .count(),
            2
        );
        assert!(quiz.feedback.unwrap().contains("Answer 0"));
    }

    #[test]
    fn test_results_view() {
        let mut app = quiz_app();
        for _ in 0..2 {
            let q = app.session.current_question().unwrap().clone();
            let idx = q.answers.iter().position(|a| *a == q.correct_answer).unwrap();
            update(&mut app, Action::SelectAnswer(idx));
            update(&mut app, Action::NextQuestion);
        }
        let view = build_view(&app, &Cursor::default());
        assert_eq!(view.help, RESULTS_HELP);
        let ScreenView::Results(results) = view.screen else {
            panic!("expected results");
        };
        assert_eq!(results.headline, "You scored 2 / 2");
        assert_eq!(results.percentage, "100%");
        assert_eq!(results.review.len(), 2);
        assert_eq!(results.review[0].question, "Who wrote \"Hamlet\"?");
        assert!(results.review.iter().all(|r| r.is_correct));
    }

    #[test]
    fn test_format_timestamp_fallback() {
        assert_eq!(format_timestamp("yesterday"), "yesterday");
        assert!(!format_timestamp("2024-03-01T10:00:00+00:00").contains('T'));
    }

    #[test]
    fn test_home_field_cycle() {
        assert_eq!(HomeField::Start.next(), HomeField::Category);
        assert_eq!(HomeField::Category.prev(), HomeField::Start);
    }
}
