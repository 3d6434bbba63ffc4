//! # Overlays
//!
//! Small widgets drawn on top of a screen: the clear-history confirmation and
//! the dismissible error banner.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::tui::component::Component;

/// Centered "Clear all history?" prompt.
pub struct ConfirmClear;

impl Component for ConfirmClear {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(50, 30, area);
        frame.render_widget(Clear, overlay);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(" Clear History ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" y Confirm  any key Cancel ").centered())
            .padding(Padding::uniform(1));

        let body = Paragraph::new(vec![
            Line::from("Delete every saved quiz result?"),
            Line::from("This cannot be undone.").style(Style::default().fg(Color::DarkGray)),
        ])
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(block);
        frame.render_widget(body, overlay);
    }
}

/// Inline error message, dismissed with Esc.
pub struct ErrorBanner<'a> {
    pub message: &'a str,
}

impl<'a> ErrorBanner<'a> {
    pub fn new(message: &'a str) -> Self {
        Self { message }
    }

    /// Rows needed to show the message at `width` (including borders).
    pub fn height(&self, width: u16) -> u16 {
        self.paragraph().line_count(width.saturating_sub(2)) as u16 + 2
    }

    fn paragraph(&self) -> Paragraph<'a> {
        Paragraph::new(self.message)
            .style(Style::default().fg(Color::Red))
            .wrap(Wrap { trim: true })
    }
}

impl Component for ErrorBanner<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red).add_modifier(Modifier::DIM))
            .title(" Error ")
            .title_bottom(Line::from(" Esc Dismiss ").right_aligned());
        frame.render_widget(self.paragraph().block(block), area);
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(50, 30, outer);
        assert_eq!(inner.width, 50);
        assert!((14..=16).contains(&inner.height));
        assert!(inner.x >= 20 && inner.y >= 15);
        assert!(inner.bottom() <= outer.bottom());
    }

    #[test]
    fn test_error_banner_height_grows_with_text() {
        let short = ErrorBanner::new("Oops");
        assert_eq!(short.height(40), 3);
        let long_text = "word ".repeat(30);
        let long = ErrorBanner::new(&long_text);
        assert!(long.height(40) > 3);
    }

    #[test]
    fn test_confirm_clear_renders_prompt() {
        let backend = TestBackend::new(80, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| ConfirmClear.render(f, f.area()))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Clear History"));
        assert!(text.contains("y Confirm"));
    }
}
