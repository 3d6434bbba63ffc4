//! # Core Application Logic
//!
//! This module contains Trivia's business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (commands)    │
//!                    │  • update() (reducer)   │
//!                    │  • Quiz session         │
//!                    │  • History store        │
//!                    └───────────┬─────────────┘
//!                                │ Effect
//!                    ┌───────────┴─────────────┐
//!                    ▼                         ▼
//!             ┌────────────┐            ┌────────────┐
//!             │    TUI     │            │   trivia   │
//!             │  Adapter   │──spawns──▶ │  (HTTP)    │
//!             │ (ratatui)  │            │            │
//!             └────────────┘            └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct: all application state in one place
//! - [`action`]: The `Action` enum: everything that can happen in the app
//! - [`quiz`]: The quiz session state machine and scoring
//! - [`history`]: Persisted summaries of completed quizzes
//! - [`shuffle`]: Unbiased answer shuffling
//! - [`config`]: Layered configuration

pub mod action;
pub mod config;
pub mod history;
pub mod quiz;
pub mod shuffle;
pub mod state;
