//! # quiz_session
//!
//! A fully offline multiple-choice practice session engine.
//!
//! One user works through a fixed question set one question at a time. The
//! engine validates the raw question payload, randomizes presentation order,
//! tracks per-question progress, commits each answer at most once, and
//! aggregates the final score. Rendering, event wiring, and delivery of the
//! question set are external collaborators — the engine exposes commands and
//! read accessors and nothing else.
//!
//! ## How it works
//!
//! 1. Decode the raw payload with [`parse_dataset`] (strict top-level check)
//!    or [`validate`] (fully soft). Malformed records are dropped, never
//!    repaired; what survives is a trusted [`QuizDataset`].
//! 2. Call [`Session::start`] with a [`SessionConfig`] — order mode, option
//!    shuffling, optional RNG seed. An empty dataset yields a queryable
//!    session in [`Phase::Empty`] rather than an error.
//! 3. Drive the session with [`select_option`], [`advance`], [`retreat`],
//!    [`jump_to`], [`finish`], and [`restart`]; read it back through
//!    [`current_question`], [`score`], and the JSON snapshot in
//!    [`view_adapter`].
//!
//! ## Key guarantees
//!
//! - **Write-once answers**: the first committed answer for a question is
//!   final; later selections are ignored.
//! - **Permutation correctness**: the presentation order is always a
//!   bijection over dataset indices, and progress is keyed by dataset index
//!   so shuffling never detaches an answer from its question.
//! - **Deterministic**: pass `rng_seed: Some(u64)` to reproduce the exact
//!   same question and option order every time.
//! - **No fatal paths**: malformed input degrades to an empty or partial
//!   dataset; every command on an empty or finished session is a no-op.
//!
//! ## Quick start
//!
//! ```rust
//! use quiz_session::{parse_dataset, OrderMode, SelectionOutcome, Session, SessionConfig};
//!
//! let dataset = parse_dataset(
//!     r#"[
//!         {"question": "2+2?", "options": ["3", "4"], "correctOptionIndex": 1},
//!         {"question": "1+1?", "options": ["1", "2"], "correctOptionIndex": 1}
//!     ]"#,
//! )
//! .expect("payload is a JSON list");
//!
//! let mut session = Session::start(
//!     dataset,
//!     SessionConfig {
//!         order: OrderMode::Sequential,
//!         shuffle_options: false,
//!         rng_seed: Some(42),
//!     },
//! );
//!
//! assert_eq!(session.select_option(1), SelectionOutcome::Committed { correct: true });
//! session.advance();
//! assert_eq!(session.select_option(0), SelectionOutcome::Committed { correct: false });
//!
//! session.finish();
//! assert_eq!(session.score().percent, 50);
//! ```
//!
//! [`select_option`]: Session::select_option
//! [`advance`]: Session::advance
//! [`retreat`]: Session::retreat
//! [`jump_to`]: Session::jump_to
//! [`finish`]: Session::finish
//! [`restart`]: Session::restart
//! [`current_question`]: Session::current_question
//! [`score`]: Session::score

pub mod session_engine;
pub mod view_adapter;

// Convenience re-exports so callers can use `quiz_session::Session` directly
// without reaching into `session_engine::`.
pub use session_engine::{
    parse_dataset, validate, CurrentQuestion, DatasetError, OrderMode, Phase, ProgressEntry,
    QuestionRecord, QuizDataset, ScoreReport, SelectionOutcome, Session, SessionConfig,
};
