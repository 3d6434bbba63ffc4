//! # Quiz Session
//!
//! One run through a fixed batch of questions.
//!
//! ```text
//! NotStarted ──start()──▶ InProgress(0) ──select_answer()──▶ answered
//!                              ▲                                │
//!                              └──────── advance() ◀────────────┘
//!                                          │ (last question)
//!                                          ▼
//!                                      Completed
//! ```
//!
//! Answers are compared against the raw (entity-encoded) correct answer.
//! Decoding is a display concern and never happens here.

use std::fmt;

use crate::trivia::Question;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    InProgress(usize),
    Completed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerRecord {
    pub question_text: String,
    pub selected_answer: String,
    pub correct_answer: String,
    pub is_correct: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    EmptyQuestionSet,
    NotInProgress,
    NoAnswerSelected,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::EmptyQuestionSet => write!(f, "cannot start a quiz with no questions"),
            SessionError::NotInProgress => write!(f, "no quiz in progress"),
            SessionError::NoAnswerSelected => write!(f, "answer the current question first"),
        }
    }
}

impl std::error::Error for SessionError {}

/// Outcome of `advance()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    NextQuestion(usize),
    Finished,
}

/// Final tally exposed once the session is `Completed`.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizSummary {
    pub score: usize,
    pub total: usize,
    pub answer_log: Vec<AnswerRecord>,
}

impl QuizSummary {
    pub fn percentage(&self) -> u8 {
        percentage(self.score, self.total)
    }
}

/// `round(100 * score / total)`, 0 for an empty quiz.
pub fn percentage(score: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let pct = (100.0 * score as f64 / total as f64).round();
    pct.clamp(0.0, 100.0) as u8
}

#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    phase: Phase,
    score: usize,
    answer_log: Vec<AnswerRecord>,
    selected_answer: Option<String>,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSession {
    pub fn new() -> Self {
        Self {
            questions: Vec::new(),
            phase: Phase::NotStarted,
            score: 0,
            answer_log: Vec::new(),
            selected_answer: None,
        }
    }

    pub fn start(&mut self, questions: Vec<Question>) -> Result<(), SessionError> {
        if questions.is_empty() {
            return Err(SessionError::EmptyQuestionSet);
        }
        self.questions = questions;
        self.phase = Phase::InProgress(0);
        self.score = 0;
        self.answer_log.clear();
        self.selected_answer = None;
        Ok(())
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }

    pub fn answer_log(&self) -> &[AnswerRecord] {
        &self.answer_log
    }

    pub fn selected_answer(&self) -> Option<&str> {
        self.selected_answer.as_deref()
    }

    pub fn current_index(&self) -> Option<usize> {
        match self.phase {
            Phase::InProgress(i) => Some(i),
            _ => None,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.current_index().and_then(|i| self.questions.get(i))
    }

    pub fn is_last_question(&self) -> bool {
        self.current_index()
            .is_some_and(|i| i + 1 == self.questions.len())
    }

    /// Records the first answer given for the current question.
    ///
    /// Returns `None` (and changes nothing) when no quiz is running or the
    /// question was already answered.
    pub fn select_answer(&mut self, answer: &str) -> Option<&AnswerRecord> {
        if self.selected_answer.is_some() {
            return None;
        }
        let question = self.current_question()?;

        let is_correct = answer == question.correct_answer;
        let record = AnswerRecord {
            question_text: question.text.clone(),
            selected_answer: answer.to_string(),
            correct_answer: question.correct_answer.clone(),
            is_correct,
        };

        if is_correct {
            self.score += 1;
        }
        self.selected_answer = Some(answer.to_string());
        self.answer_log.push(record);
        self.answer_log.last()
    }

    /// Selects the answer shown at `index` in the current question's options.
    pub fn select_answer_at(&mut self, index: usize) -> Option<&AnswerRecord> {
        let answer = self.current_question()?.answers.get(index)?.clone();
        self.select_answer(&answer)
    }

    pub fn advance(&mut self) -> Result<Progress, SessionError> {
        let index = self.current_index().ok_or(SessionError::NotInProgress)?;
        if self.selected_answer.is_none() {
            return Err(SessionError::NoAnswerSelected);
        }

        self.selected_answer = None;
        if index + 1 < self.questions.len() {
            self.phase = Phase::InProgress(index + 1);
            Ok(Progress::NextQuestion(index + 1))
        } else {
            self.phase = Phase::Completed;
            Ok(Progress::Finished)
        }
    }

    pub fn summary(&self) -> Option<QuizSummary> {
        (self.phase == Phase::Completed).then(|| QuizSummary {
            score: self.score,
            total: self.questions.len(),
            answer_log: self.answer_log.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_questions;

    fn started(n: usize) -> QuizSession {
        let mut session = QuizSession::new();
        session.start(sample_questions(n)).unwrap();
        session
    }

    #[test]
    fn test_start_rejects_empty() {
        let mut session = QuizSession::new();
        assert_eq!(session.start(vec![]), Err(SessionError::EmptyQuestionSet));
        assert_eq!(session.phase(), Phase::NotStarted);
    }

    #[test]
    fn test_start_resets_state() {
        let mut session = started(2);
        session.select_answer("Answer 0");
        session.start(sample_questions(3)).unwrap();
        assert_eq!(session.phase(), Phase::InProgress(0));
        assert_eq!(session.score(), 0);
        assert!(session.answer_log().is_empty());
        assert!(session.selected_answer().is_none());
    }

    #[test]
    fn test_correct_answer_scores() {
        let mut session = started(2);
        let record = session.select_answer("Answer 0").unwrap();
        assert!(record.is_correct);
        assert_eq!(session.score(), 1);
        assert_eq!(session.answer_log().len(), 1);
        // Selecting does not advance
        assert_eq!(session.phase(), Phase::InProgress(0));
    }

    #[test]
    fn test_wrong_answer_does_not_score() {
        let mut session = started(1);
        let record = session.select_answer("Wrong 0a").unwrap();
        assert!(!record.is_correct);
        assert_eq!(record.correct_answer, "Answer 0");
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_first_answer_wins() {
        let mut session = started(1);
        session.select_answer("Wrong 0a");
        assert!(session.select_answer("Answer 0").is_none());
        assert_eq!(session.score(), 0);
        assert_eq!(session.answer_log().len(), 1);
        assert_eq!(session.selected_answer(), Some("Wrong 0a"));
    }

    #[test]
    fn test_comparison_uses_raw_text() {
        let mut session = QuizSession::new();
        let mut questions = sample_questions(1);
        questions[0].correct_answer = "Tom &amp; Jerry".to_string();
        session.start(questions).unwrap();
        let record = session.select_answer("Tom & Jerry").unwrap();
        assert!(!record.is_correct);
    }

    #[test]
    fn test_advance_before_select_rejected() {
        let mut session = started(2);
        assert_eq!(session.advance(), Err(SessionError::NoAnswerSelected));
        assert_eq!(session.phase(), Phase::InProgress(0));
    }

    #[test]
    fn test_advance_outside_session_rejected() {
        let mut session = QuizSession::new();
        assert_eq!(session.advance(), Err(SessionError::NotInProgress));
        assert!(session.select_answer("anything").is_none());
    }

    #[test]
    fn test_full_run_completes() {
        let mut session = started(3);
        for i in 0..3 {
            let answer = if i == 1 { "Wrong 1a".to_string() } else { format!("Answer {i}") };
            session.select_answer(&answer);
            assert_eq!(session.answer_log().len(), i + 1);
            let progress = session.advance().unwrap();
            if i < 2 {
                assert_eq!(progress, Progress::NextQuestion(i + 1));
                assert!(session.selected_answer().is_none());
            } else {
                assert_eq!(progress, Progress::Finished);
            }
        }
        assert_eq!(session.phase(), Phase::Completed);
        let summary = session.summary().unwrap();
        assert_eq!(summary.score, 2);
        assert_eq!(summary.total, 3);
        assert_eq!(summary.percentage(), 67);
        assert_eq!(
            summary.score,
            summary.answer_log.iter().filter(|r| r.is_correct).count()
        );
    }

    #[test]
    fn test_summary_only_when_completed() {
        let session = started(1);
        assert!(session.summary().is_none());
    }

    #[test]
    fn test_select_answer_at_index() {
        let mut session = started(1);
        let answers = session.current_question().unwrap().answers.clone();
        let correct_idx = answers.iter().position(|a| a == "Answer 0").unwrap();
        assert!(session.select_answer_at(correct_idx).unwrap().is_correct);
        assert!(session.select_answer_at(99).is_none());
    }

    #[test]
    fn test_percentage_rounding_and_range() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 8), 13);
        for total in 1..=50 {
            for score in 0..=total {
                let pct = percentage(score, total);
                assert!(pct <= 100);
                assert_eq!(pct as f64, (100.0 * score as f64 / total as f64).round());
            }
        }
    }
}
