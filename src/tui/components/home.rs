//! # Home Screen Component
//!
//! Quiz setup (category, difficulty, question count), the start control and
//! the recent-history panel. The history panel is hidden when empty.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Row, Table};

use crate::tui::component::Component;
use crate::tui::view::{HistoryRow, HomeView};

pub struct HomeScreen<'a> {
    pub view: &'a HomeView,
}

impl<'a> HomeScreen<'a> {
    pub fn new(view: &'a HomeView) -> Self {
        Self { view }
    }

    fn setup_lines(&self) -> Vec<Line<'a>> {
        let mut lines: Vec<Line> = self
            .view
            .setup
            .iter()
            .map(|row| {
                let marker = if row.focused { "▸ " } else { "  " };
                let value_style = if row.focused {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                Line::from(vec![
                    Span::styled(marker, Style::default().fg(Color::Cyan)),
                    Span::styled(format!("{:<12}", row.label), Style::default().fg(Color::Gray)),
                    Span::styled(format!("◂ {} ▸", row.value), value_style),
                ])
            })
            .collect();

        lines.push(Line::default());

        let start_style = match (self.view.start_enabled, self.view.start_focused) {
            (false, _) => Style::default().fg(Color::DarkGray),
            (true, true) => Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
            (true, false) => Style::default().fg(Color::Green),
        };
        lines.push(
            Line::from(Span::styled(format!("  {}  ", self.view.start_label), start_style))
                .centered(),
        );
        lines
    }
}

fn history_table(rows: &[HistoryRow]) -> Table<'_> {
    let body = rows.iter().map(|row| {
        Row::new(vec![
            row.when.clone(),
            row.category.clone(),
            row.difficulty.clone(),
            row.score.clone(),
            row.percentage.clone(),
        ])
    });
    Table::new(
        body,
        [
            Constraint::Length(13),
            Constraint::Min(10),
            Constraint::Length(8),
            Constraint::Length(7),
            Constraint::Length(5),
        ],
    )
    .header(
        Row::new(vec!["When", "Category", "Level", "Score", "%"])
            .style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD)),
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Recent Quizzes ")
            .padding(Padding::horizontal(1)),
    )
}

impl Component for HomeScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let history_height = if self.view.history.is_empty() {
            0
        } else {
            // rows + header + borders
            self.view.history.len() as u16 + 3
        };
        let [setup_area, history_area] =
            Layout::vertical([Constraint::Min(8), Constraint::Length(history_height)])
                .areas(area);

        let setup = Paragraph::new(self.setup_lines())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(" New Quiz ")
                    .title_alignment(Alignment::Left)
                    .padding(Padding::new(2, 2, 1, 0)),
            );
        frame.render_widget(setup, setup_area);

        if !self.view.history.is_empty() {
            frame.render_widget(history_table(&self.view.history), history_area);
        }
    }
}
