//! Core session engine — dataset validation, ordering, and progress tracking.
//!
//! ## Module overview
//!
//! | Module      | Purpose |
//! |-------------|---------|
//! | `models`    | All shared types: question records, dataset, progress, config, phases |
//! | `error`     | Input-boundary errors for the strict payload parse |
//! | `validator` | Lenient record filtering: raw JSON → trusted `QuizDataset` |
//! | `shuffle`   | Fisher-Yates permutations for question and option order |
//! | `session`   | The `Session` controller: navigation, answer commitment, restart |
//! | `score`     | Order-independent score aggregation |

pub mod error;
pub mod models;
pub mod score;
pub mod session;
pub mod shuffle;
pub mod validator;

// Re-export the public API surface so callers can use
// `session_engine::Session` without reaching into sub-modules.
pub use error::DatasetError;
pub use models::{
    OrderMode, Phase, ProgressEntry, QuestionRecord, QuizDataset, SelectionOutcome, SessionConfig,
};
pub use score::ScoreReport;
pub use session::{CurrentQuestion, Session};
pub use validator::{parse_dataset, validate};
