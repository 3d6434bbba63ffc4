//! # Results Screen Component
//!
//! Final score plus a scrollable review of every answer.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - the `ScrollViewState` lives in `TuiState`
//! - `ResultsScreen` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::tui::component::Component;
use crate::tui::view::{ResultsView, ReviewRow};

pub struct ResultsScreen<'a> {
    pub view: &'a ResultsView,
    pub scroll: &'a mut ScrollViewState,
}

impl<'a> ResultsScreen<'a> {
    pub fn new(view: &'a ResultsView, scroll: &'a mut ScrollViewState) -> Self {
        Self { view, scroll }
    }
}

fn review_paragraph(row: &ReviewRow) -> Paragraph<'_> {
    let (mark, color) = if row.is_correct {
        ("✓", Color::Green)
    } else {
        ("✗", Color::Red)
    };
    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("{mark} {}. ", row.number), Style::default().fg(color)),
            Span::styled(row.question.as_str(), Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::from(vec![
            Span::styled("   Your answer: ", Style::default().fg(Color::DarkGray)),
            Span::styled(row.your_answer.as_str(), Style::default().fg(color)),
        ]),
    ];
    if !row.is_correct {
        lines.push(Line::from(vec![
            Span::styled("   Correct answer: ", Style::default().fg(Color::DarkGray)),
            Span::styled(row.correct_answer.as_str(), Style::default().fg(Color::Green)),
        ]));
    }
    Paragraph::new(lines).wrap(Wrap { trim: false })
}

impl Component for ResultsScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let [score_area, review_area] =
            Layout::vertical([Constraint::Length(4), Constraint::Min(0)]).areas(area);

        let score = Paragraph::new(vec![
            Line::from(Span::styled(
                self.view.headline.as_str(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.view.percentage.as_str(),
                Style::default().fg(Color::Cyan),
            )),
        ])
        .centered()
        .block(Block::default().padding(Padding::vertical(1)));
        frame.render_widget(score, score_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Review ");
        let inner = block.inner(review_area);
        frame.render_widget(block, review_area);

        let content_width = inner.width.saturating_sub(1);
        let paragraphs: Vec<(Paragraph, u16)> = self
            .view
            .review
            .iter()
            .map(|row| {
                let paragraph = review_paragraph(row);
                // +1 spacer line between entries
                let height = paragraph.line_count(content_width) as u16 + 1;
                (paragraph, height)
            })
            .collect();
        let total_height: u16 = paragraphs.iter().map(|(_, h)| *h).sum();

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut y_offset: u16 = 0;
        for (paragraph, height) in paragraphs {
            let rect = Rect::new(0, y_offset, content_width, height);
            scroll_view.render_widget(paragraph, rect);
            y_offset += height;
        }

        frame.render_stateful_widget(scroll_view, inner, self.scroll);
    }
}
