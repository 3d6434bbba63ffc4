//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the view model,
//! translates keyboard events into `core::Action` values and executes the
//! `Effect`s that `update()` hands back (network fetches, history writes).
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Loading** (question fetch in flight): draws every ~80ms so the spinner moves.
//! - **Idle**: sleeps up to 500ms, only redraws on events, background results
//!   or terminal resize.

mod component;
mod components;
pub mod entities;
mod event;
mod ui;
pub mod view;

use log::{debug, info, warn};
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use tui_scrollview::ScrollViewState;

use crate::core::action::{Action, Effect, apply_history_effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::history::{FileStore, HistoryStore};
use crate::core::state::{App, Screen};
use crate::trivia::{OpenTdbClient, QuestionQuery, TriviaSource, build_questions};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::view::{Cursor, HomeField, build_view};

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub cursor: Cursor,
    pub review_scroll: ScrollViewState,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            cursor: Cursor::default(),
            review_scroll: ScrollViewState::default(),
        }
    }
}

/// Opens `~/.trivia/quizHistory.json`, falling back to a memory-only history.
fn open_history() -> HistoryStore {
    match FileStore::in_data_dir() {
        Ok(store) => HistoryStore::load(Box::new(store)),
        Err(e) => {
            warn!("History storage unavailable ({}), history will not be saved", e);
            HistoryStore::in_memory()
        }
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source: Arc<dyn TriviaSource> = Arc::new(OpenTdbClient::with_timeout(
        Some(config.base_url.clone()),
        Duration::from_secs(config.timeout_secs),
    ));
    let mut app = App::new(source, open_history(), &config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();
    spawn_fetch_categories(app.source.clone(), tx.clone());

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        if app.is_loading {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            let view = build_view(&app, &tui.cursor);
            terminal.draw(|f| ui::draw_ui(f, &view, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if app.is_loading {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            if let Some(action) = handle_event(&app, &mut tui, &event) {
                let effect = update(&mut app, action);
                should_quit |= run_effect(&mut app, &mut tui, effect, &tx);
            }
        }

        // Handle background task actions (fetch results)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(&mut app, action);
            should_quit |= run_effect(&mut app, &mut tui, effect, &tx);
        }

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Executes an effect. Returns true when the app should exit.
fn run_effect(app: &mut App, tui: &mut TuiState, effect: Effect, tx: &mpsc::Sender<Action>) -> bool {
    match apply_history_effect(app, effect) {
        Effect::Quit => true,
        Effect::FetchQuestions(query) => {
            tui.cursor.answer_highlight = 0;
            tui.review_scroll = ScrollViewState::default();
            spawn_fetch_questions(app.source.clone(), query, tx.clone());
            false
        }
        _ => false,
    }
}

/// Maps a terminal event to a core action, updating cursor state on the way.
pub fn handle_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::ForceQuit => return Some(Action::Quit),
        TuiEvent::Resize => return None,
        _ => {}
    }

    // Any key other than 'y' cancels a pending clear
    if app.confirm_clear {
        return Some(match event {
            TuiEvent::InputChar('y' | 'Y') => Action::ConfirmClearHistory,
            _ => Action::CancelClearHistory,
        });
    }

    if app.error.is_some() && *event == TuiEvent::Escape {
        return Some(Action::DismissError);
    }

    // Only Ctrl+C gets through while a question fetch is in flight
    if app.is_loading {
        return None;
    }

    match app.screen {
        Screen::Home => home_event(tui, event),
        Screen::Quiz => quiz_event(app, tui, event),
        Screen::Results => results_event(tui, event),
    }
}

fn home_event(tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    let focus = tui.cursor.home_focus;
    match event {
        TuiEvent::CursorUp => {
            tui.cursor.home_focus = focus.prev();
            None
        }
        TuiEvent::CursorDown => {
            tui.cursor.home_focus = focus.next();
            None
        }
        TuiEvent::CursorLeft | TuiEvent::CursorRight => {
            let forward = *event == TuiEvent::CursorRight;
            match focus {
                HomeField::Category => Some(Action::CycleCategory { forward }),
                HomeField::Difficulty => Some(Action::CycleDifficulty { forward }),
                HomeField::Amount => Some(Action::AdjustAmount(if forward { 1 } else { -1 })),
                HomeField::Start => None,
            }
        }
        TuiEvent::ScrollPageUp if focus == HomeField::Amount => Some(Action::AdjustAmount(5)),
        TuiEvent::ScrollPageDown if focus == HomeField::Amount => Some(Action::AdjustAmount(-5)),
        TuiEvent::Submit | TuiEvent::InputChar('s') => Some(Action::StartQuiz),
        TuiEvent::InputChar('c') => Some(Action::RequestClearHistory),
        TuiEvent::InputChar('q') | TuiEvent::Escape => Some(Action::Quit),
        _ => None,
    }
}

fn quiz_event(app: &App, tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    let answered = app.session.selected_answer().is_some();
    let option_count = app
        .session
        .current_question()
        .map(|q| q.answers.len())
        .unwrap_or(0);

    match event {
        TuiEvent::CursorUp if !answered && option_count > 0 => {
            tui.cursor.answer_highlight =
                (tui.cursor.answer_highlight + option_count - 1) % option_count;
            None
        }
        TuiEvent::CursorDown if !answered && option_count > 0 => {
            tui.cursor.answer_highlight = (tui.cursor.answer_highlight + 1) % option_count;
            None
        }
        TuiEvent::Submit if !answered => Some(Action::SelectAnswer(tui.cursor.answer_highlight)),
        TuiEvent::InputChar(c @ '1'..='9') => {
            let index = c.to_digit(10).map(|d| d as usize - 1)?;
            if !answered {
                tui.cursor.answer_highlight = index;
            }
            Some(Action::SelectAnswer(index))
        }
        TuiEvent::Submit | TuiEvent::InputChar('n') => {
            if answered {
                tui.cursor.answer_highlight = 0;
            }
            Some(Action::NextQuestion)
        }
        TuiEvent::Escape | TuiEvent::InputChar('x') => Some(Action::ExitQuiz),
        _ => None,
    }
}

fn results_event(tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match event {
        TuiEvent::CursorUp => {
            tui.review_scroll.scroll_up();
            None
        }
        TuiEvent::CursorDown => {
            tui.review_scroll.scroll_down();
            None
        }
        TuiEvent::ScrollPageUp => {
            tui.review_scroll.scroll_page_up();
            None
        }
        TuiEvent::ScrollPageDown => {
            tui.review_scroll.scroll_page_down();
            None
        }
        TuiEvent::InputChar('r') => Some(Action::Retake),
        TuiEvent::Submit | TuiEvent::Escape | TuiEvent::InputChar('h') => Some(Action::GoHome),
        TuiEvent::InputChar('q') => Some(Action::Quit),
        _ => None,
    }
}

fn spawn_fetch_categories(source: Arc<dyn TriviaSource>, tx: mpsc::Sender<Action>) {
    info!("Spawning category fetch via {}", source.name());
    tokio::spawn(async move {
        let action = match source.fetch_categories().await {
            Ok(categories) => Action::CategoriesLoaded(categories),
            Err(e) => Action::CategoriesFailed(e),
        };
        if tx.send(action).is_err() {
            warn!("Failed to deliver categories: receiver dropped");
        }
    });
}

fn spawn_fetch_questions(
    source: Arc<dyn TriviaSource>,
    query: QuestionQuery,
    tx: mpsc::Sender<Action>,
) {
    info!("Spawning question fetch via {}", source.name());
    tokio::spawn(async move {
        let action = match source.fetch_questions(&query).await {
            Ok(raws) => Action::QuestionsLoaded(build_questions(raws)),
            Err(e) => Action::QuestionsFailed(e),
        };
        if tx.send(action).is_err() {
            warn!("Failed to deliver questions: receiver dropped");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_questions, test_app};

    fn quiz_app() -> App {
        let mut app = test_app();
        update(&mut app, Action::StartQuiz);
        update(&mut app, Action::QuestionsLoaded(sample_questions(2)));
        app
    }

    #[test]
    fn test_force_quit_from_any_screen() {
        let app = quiz_app();
        let mut tui = TuiState::new();
        assert!(matches!(
            handle_event(&app, &mut tui, &TuiEvent::ForceQuit),
            Some(Action::Quit)
        ));
    }

    #[test]
    fn test_home_navigation_changes_setup_field() {
        let app = test_app();
        let mut tui = TuiState::new();
        // Start → Category
        handle_event(&app, &mut tui, &TuiEvent::CursorDown);
        assert_eq!(tui.cursor.home_focus, HomeField::Category);
        assert!(matches!(
            handle_event(&app, &mut tui, &TuiEvent::CursorRight),
            Some(Action::CycleCategory { forward: true })
        ));
        handle_event(&app, &mut tui, &TuiEvent::CursorDown);
        handle_event(&app, &mut tui, &TuiEvent::CursorDown);
        assert!(matches!(
            handle_event(&app, &mut tui, &TuiEvent::CursorLeft),
            Some(Action::AdjustAmount(-1))
        ));
    }

    #[test]
    fn test_home_enter_starts_quiz() {
        let app = test_app();
        let mut tui = TuiState::new();
        assert!(matches!(
            handle_event(&app, &mut tui, &TuiEvent::Submit),
            Some(Action::StartQuiz)
        ));
    }

    #[test]
    fn test_confirm_clear_captures_keys() {
        let mut app = test_app();
        app.confirm_clear = true;
        let mut tui = TuiState::new();
        assert!(matches!(
            handle_event(&app, &mut tui, &TuiEvent::InputChar('y')),
            Some(Action::ConfirmClearHistory)
        ));
        assert!(matches!(
            handle_event(&app, &mut tui, &TuiEvent::Submit),
            Some(Action::CancelClearHistory)
        ));
    }

    #[test]
    fn test_escape_dismisses_error_first() {
        let mut app = test_app();
        app.error = Some("boom".to_string());
        let mut tui = TuiState::new();
        assert!(matches!(
            handle_event(&app, &mut tui, &TuiEvent::Escape),
            Some(Action::DismissError)
        ));
    }

    #[test]
    fn test_quiz_enter_selects_then_advances() {
        let mut app = quiz_app();
        let mut tui = TuiState::new();
        handle_event(&app, &mut tui, &TuiEvent::CursorDown);
        handle_event(&app, &mut tui, &TuiEvent::CursorDown);
        let action = handle_event(&app, &mut tui, &TuiEvent::Submit);
        assert!(matches!(action, Some(Action::SelectAnswer(2))));
        update(&mut app, Action::SelectAnswer(2));

        let action = handle_event(&app, &mut tui, &TuiEvent::Submit);
        assert!(matches!(action, Some(Action::NextQuestion)));
        assert_eq!(tui.cursor.answer_highlight, 0);
    }

    #[test]
    fn test_quiz_highlight_wraps() {
        let app = quiz_app();
        let mut tui = TuiState::new();
        handle_event(&app, &mut tui, &TuiEvent::CursorUp);
        assert_eq!(tui.cursor.answer_highlight, 3);
    }

    #[test]
    fn test_quiz_digit_selects() {
        let app = quiz_app();
        let mut tui = TuiState::new();
        assert!(matches!(
            handle_event(&app, &mut tui, &TuiEvent::InputChar('3')),
            Some(Action::SelectAnswer(2))
        ));
    }

    #[test]
    fn test_keys_ignored_while_loading() {
        let mut app = test_app();
        app.screen = Screen::Results;
        app.is_loading = true;
        let mut tui = TuiState::new();
        assert!(handle_event(&app, &mut tui, &TuiEvent::InputChar('q')).is_none());
        assert!(handle_event(&app, &mut tui, &TuiEvent::Submit).is_none());
        assert!(handle_event(&app, &mut tui, &TuiEvent::InputChar('r')).is_none());
        assert!(matches!(
            handle_event(&app, &mut tui, &TuiEvent::ForceQuit),
            Some(Action::Quit)
        ));
    }

    #[test]
    fn test_results_keys() {
        let mut app = test_app();
        app.screen = Screen::Results;
        let mut tui = TuiState::new();
        assert!(matches!(
            handle_event(&app, &mut tui, &TuiEvent::InputChar('r')),
            Some(Action::Retake)
        ));
        assert!(matches!(
            handle_event(&app, &mut tui, &TuiEvent::Submit),
            Some(Action::GoHome)
        ));
        assert!(handle_event(&app, &mut tui, &TuiEvent::CursorDown).is_none());
    }
}
