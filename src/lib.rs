//! Trivia library exports for testing

pub mod core;
pub mod trivia;
pub mod tui;

#[cfg(test)]
pub mod test_support;

pub use trivia::Difficulty;
