//! # Quiz Screen Component
//!
//! One question, its answer options, and feedback once an answer is picked.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};

use crate::tui::component::Component;
use crate::tui::view::{OptionState, OptionView, QuizView};

pub struct QuizScreen<'a> {
    pub view: &'a QuizView,
}

impl<'a> QuizScreen<'a> {
    pub fn new(view: &'a QuizView) -> Self {
        Self { view }
    }
}

fn option_style(state: OptionState) -> Style {
    match state {
        OptionState::Idle => Style::default().fg(Color::White),
        OptionState::Highlighted => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        OptionState::Correct => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        OptionState::Incorrect => Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::CROSSED_OUT),
        OptionState::Dimmed => Style::default().fg(Color::DarkGray),
    }
}

fn option_line(option: &OptionView) -> Line<'_> {
    let mark = match option.state {
        OptionState::Correct => " ✓",
        OptionState::Incorrect => " ✗",
        _ => "",
    };
    let style = option_style(option.state);
    Line::from(vec![
        Span::styled(format!(" {}. ", option.key), style),
        Span::styled(option.text.as_str(), style),
        Span::styled(mark, style),
    ])
}

impl Component for QuizScreen<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let option_height = self.view.options.len() as u16 * 2 + 2;
        let [header_area, question_area, options_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(4),
            Constraint::Length(option_height),
            Constraint::Length(2),
        ])
        .areas(area);

        let [progress_area, score_area] =
            Layout::horizontal([Constraint::Fill(1), Constraint::Length(12)]).areas(header_area);
        frame.render_widget(
            Span::styled(self.view.progress.as_str(), Style::default().fg(Color::Gray)),
            progress_area,
        );
        frame.render_widget(
            Line::from(Span::styled(
                self.view.score.as_str(),
                Style::default().fg(Color::Yellow),
            ))
            .right_aligned(),
            score_area,
        );

        let question = Paragraph::new(self.view.question.as_str())
            .style(Style::default().add_modifier(Modifier::BOLD))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .padding(Padding::uniform(1)),
            );
        frame.render_widget(question, question_area);

        // One blank line between options keeps long answers readable
        let mut lines = Vec::with_capacity(self.view.options.len() * 2);
        for option in &self.view.options {
            lines.push(option_line(option));
            lines.push(Line::default());
        }
        let options = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::default().padding(Padding::new(2, 2, 1, 0)));
        frame.render_widget(options, options_area);

        let footer = match &self.view.feedback {
            Some(feedback) => {
                let color = if feedback.starts_with("Correct") {
                    Color::Green
                } else {
                    Color::Red
                };
                Line::from(vec![
                    Span::styled(feedback.as_str(), Style::default().fg(color)),
                    Span::styled(
                        format!("   Enter: {}", self.view.next_label),
                        Style::default().fg(Color::DarkGray),
                    ),
                ])
            }
            None => Line::from(Span::styled(
                "Pick an answer",
                Style::default().fg(Color::DarkGray),
            )),
        };
        frame.render_widget(Paragraph::new(footer).centered(), footer_area);
    }
}
