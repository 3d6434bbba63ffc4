//! # TUI Components
//!
//! Each component renders one part of a `View` (see `view.rs`).
//!
//! Components receive their data as props (struct fields borrowed from the
//! view model) and never read `App` directly. Stateful pieces such as the
//! review scroll position live in `TuiState` and are lent to the component
//! for the frame.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── home.rs          (Quiz setup + recent history)
//! ├── quiz.rs          (Question and answer options)
//! ├── results.rs       (Score + scrollable review)
//! └── dialogs.rs       (Clear-history confirm, error banner)
//! ```

mod title_bar;
pub use title_bar::TitleBar;

pub mod dialogs;
pub mod home;
pub mod quiz;
pub mod results;
pub use dialogs::{ConfirmClear, ErrorBanner};
pub use home::HomeScreen;
pub use quiz::QuizScreen;
pub use results::ResultsScreen;
