//! # TitleBar Component
//!
//! Top status bar: app name, transient status and a spinner while a
//! question fetch is in flight.
//!
//! ## Conditional Formatting
//!
//! 1. **Loading**: `"Trivia ⠋ | Loading questions..."`
//! 2. **Status message**: `"Trivia | Correct!"`
//! 3. **Default**: `"Trivia"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Top status bar component.
///
/// All fields are props:
/// - `status_message`: Transient status (e.g., "Loading questions...", "Correct!")
/// - `is_loading`: Whether a fetch is in flight (shows the spinner)
/// - `spinner_frame`: Animation tick from the event loop
pub struct TitleBar {
    pub status_message: String,
    pub is_loading: bool,
    pub spinner_frame: usize,
}

impl TitleBar {
    pub fn new(status_message: String, is_loading: bool, spinner_frame: usize) -> Self {
        Self {
            status_message,
            is_loading,
            spinner_frame,
        }
    }

    fn text(&self) -> String {
        let mut title = String::from("Trivia");
        if self.is_loading {
            title.push(' ');
            title.push(SPINNER[self.spinner_frame % SPINNER.len()]);
        }
        if !self.status_message.is_empty() {
            title.push_str(" | ");
            title.push_str(&self.status_message);
        }
        title
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(Span::styled(
            self.text(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(line, area);
    }
}
