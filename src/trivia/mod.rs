pub mod client;
pub mod source;
pub mod types;

pub use client::OpenTdbClient;
pub use source::{TriviaError, TriviaSource};
pub use types::{
    Category, Difficulty, Question, QuestionQuery, RawQuestion, build_questions, MAX_AMOUNT,
    MIN_AMOUNT,
};
