use std::fmt;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Question primitives
// ---------------------------------------------------------------------------

/// A single multiple-choice question, immutable after validation.
///
/// Option position doubles as option identity: `correct_option` is an index
/// into `options`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionRecord {
    pub prompt: String,
    pub options: Vec<String>,
    pub correct_option: usize,
}

impl QuestionRecord {
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// A record is playable when it has at least one option and the correct
    /// index points at one of them.
    pub fn is_playable(&self) -> bool {
        !self.options.is_empty() && self.correct_option < self.options.len()
    }
}

/// A validated, ordered question set.
///
/// Built once per session; an empty dataset is a legal terminal state
/// ("no playable questions"), not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizDataset {
    questions: Vec<QuestionRecord>,
}

impl QuizDataset {
    /// Build a dataset, discarding records that are not playable.
    ///
    /// Relative order of the kept records is preserved.
    pub fn new(questions: Vec<QuestionRecord>) -> Self {
        QuizDataset {
            questions: questions.into_iter().filter(QuestionRecord::is_playable).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, dataset_index: usize) -> Option<&QuestionRecord> {
        self.questions.get(dataset_index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, QuestionRecord> {
        self.questions.iter()
    }

    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }
}

// ---------------------------------------------------------------------------
// Progress tracking
// ---------------------------------------------------------------------------

/// Per-question answer record, keyed by dataset index (not display position).
///
/// Both fields stay `None` until the question is answered. The first
/// committed answer is final: the session never rewrites a non-`None` entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub selected: Option<usize>,
    pub correct: Option<bool>,
}

impl ProgressEntry {
    pub fn is_answered(&self) -> bool {
        self.selected.is_some()
    }
}

// ---------------------------------------------------------------------------
// Session configuration / lifecycle
// ---------------------------------------------------------------------------

/// How display positions map onto dataset indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrderMode {
    /// Fresh Fisher-Yates permutation per session (and per restart).
    Random,
    /// Identity order: display position i shows dataset question i.
    Sequential,
}

impl fmt::Display for OrderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderMode::Random => write!(f, "random"),
            OrderMode::Sequential => write!(f, "sequential"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionConfig {
    pub order: OrderMode,
    /// Also shuffle each question's options, remapping the correct index.
    pub shuffle_options: bool,
    /// `Some(seed)` reproduces the exact same ordering every time; `None`
    /// seeds from entropy.
    pub rng_seed: Option<u64>,
}

impl SessionConfig {
    pub fn new(order: OrderMode) -> Self {
        SessionConfig {
            order,
            shuffle_options: false,
            rng_seed: None,
        }
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig::new(OrderMode::Random)
    }
}

/// Session lifecycle.
///
/// `Empty` is the reported "no playable questions" condition: the session
/// exists and stays queryable (score 0, no current question) but nothing can
/// be answered. `Completed` is entered only by an explicit [`finish`] call —
/// answering every question never auto-completes — and left only via
/// [`restart`].
///
/// [`finish`]: crate::Session::finish
/// [`restart`]: crate::Session::restart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Empty,
    Active,
    Completed,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Empty => write!(f, "empty"),
            Phase::Active => write!(f, "active"),
            Phase::Completed => write!(f, "completed"),
        }
    }
}

/// Result of a [`select_option`](crate::Session::select_option) call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The answer was committed; `correct` says whether it matched.
    Committed { correct: bool },
    /// The question was already answered — first answer wins, this call
    /// changed nothing.
    AlreadyAnswered,
    /// The option index does not exist on the current question; nothing
    /// was committed.
    OutOfRange,
    /// The session is not active (empty dataset or already finished).
    Inactive,
}
