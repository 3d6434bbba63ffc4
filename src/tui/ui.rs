use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Line;

use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{
    ConfirmClear, ErrorBanner, HomeScreen, QuizScreen, ResultsScreen, TitleBar,
};
use crate::tui::view::{ScreenView, View};

/// Draws one frame from a pre-built view model.
pub fn draw_ui(frame: &mut Frame, view: &View, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};

    let area = frame.area();
    let error_height = view
        .error
        .as_deref()
        .map(|msg| ErrorBanner::new(msg).height(area.width))
        .unwrap_or(0);

    let [title_area, error_area, main_area, help_area] =
        Layout::vertical([Length(1), Length(error_height), Min(0), Length(1)]).areas(area);

    TitleBar::new(view.status.clone(), view.is_loading, spinner_frame).render(frame, title_area);

    if let Some(msg) = view.error.as_deref() {
        ErrorBanner::new(msg).render(frame, error_area);
    }

    match &view.screen {
        ScreenView::Home(home) => {
            HomeScreen::new(home).render(frame, main_area);
            if home.confirm_clear {
                ConfirmClear.render(frame, main_area);
            }
        }
        ScreenView::Quiz(quiz) => QuizScreen::new(quiz).render(frame, main_area),
        ScreenView::Results(results) => {
            ResultsScreen::new(results, &mut tui.review_scroll).render(frame, main_area)
        }
    }

    frame.render_widget(
        Line::from(view.help).style(Style::default().fg(Color::DarkGray)).centered(),
        help_area,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::test_support::{sample_questions, test_app};
    use crate::trivia::TriviaError;
    use crate::tui::view::{Cursor, build_view};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn render(app: &crate::core::state::App) -> String {
        let backend = TestBackend::new(80, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut tui = TuiState::new();
        let view = build_view(app, &Cursor::default());
        terminal
            .draw(|f| draw_ui(f, &view, &mut tui, 0))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_draw_home() {
        let app = test_app();
        let text = render(&app);
        assert!(text.contains("Trivia | Welcome to Trivia!"));
        assert!(text.contains("Start Quiz"));
        assert!(text.contains("c Clear history"));
    }

    #[test]
    fn test_draw_error_banner() {
        let mut app = test_app();
        update(&mut app, Action::StartQuiz);
        update(
            &mut app,
            Action::QuestionsFailed(TriviaError::NoQuestionsAvailable { response_code: 1 }),
        );
        let text = render(&app);
        assert!(text.contains("Error"));
        assert!(text.contains("Not enough questions"));
    }

    #[test]
    fn test_draw_quiz() {
        let mut app = test_app();
        update(&mut app, Action::StartQuiz);
        update(&mut app, Action::QuestionsLoaded(sample_questions(3)));
        let text = render(&app);
        assert!(text.contains("Question 1 of 3"));
        assert!(text.contains("Question 0?"));
    }
}
