//! The session controller — navigation, answer commitment, restart.

use rand::{rngs::StdRng, SeedableRng};
use tracing::{debug, warn};

use crate::session_engine::models::{
    OrderMode, Phase, ProgressEntry, QuestionRecord, QuizDataset, SelectionOutcome, SessionConfig,
};
use crate::session_engine::score::{self, ScoreReport};
use crate::session_engine::shuffle;

/// Read-only view of the question at the current display position.
#[derive(Debug, Clone, Copy)]
pub struct CurrentQuestion<'a> {
    /// Zero-based display position.
    pub position: usize,
    /// Number of questions in the session.
    pub total: usize,
    /// Index of this question in the unshuffled dataset — the stable
    /// identity all progress is keyed by.
    pub dataset_index: usize,
    pub record: &'a QuestionRecord,
    pub progress: &'a ProgressEntry,
}

/// One live quiz session over a validated dataset.
///
/// The session owns a working copy of the questions (options reshuffled per
/// config), a presentation order mapping display position → dataset index,
/// and one [`ProgressEntry`] per dataset index. All engine operations are
/// synchronous commands driven by one logical actor; the write-once rule on
/// progress entries is enforced by the guard in [`select_option`].
///
/// Each session is an independently constructible value — no process-wide
/// state, so parallel and test sessions are free.
///
/// [`select_option`]: Session::select_option
///
/// ## RNG ordering
///
/// Option shuffles are drawn before the presentation permutation, and a
/// restart continues the same RNG stream. Reordering these calls would
/// change what a given seed produces and break determinism tests.
#[derive(Debug, Clone)]
pub struct Session {
    source: QuizDataset,
    questions: Vec<QuestionRecord>,
    order: Vec<usize>,
    progress: Vec<ProgressEntry>,
    cursor: usize,
    phase: Phase,
    config: SessionConfig,
    rng: StdRng,
}

impl Session {
    /// Start a session: build the working question copy and presentation
    /// order, zero all progress, point at display position 0.
    ///
    /// An empty dataset is not an error — the session starts in
    /// [`Phase::Empty`] and stays fully queryable (no current question,
    /// score 0). Callers surface that as a "no playable questions" state.
    pub fn start(dataset: QuizDataset, config: SessionConfig) -> Session {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let mut session = Session {
            source: dataset,
            questions: Vec::new(),
            order: Vec::new(),
            progress: Vec::new(),
            cursor: 0,
            phase: Phase::Empty,
            config,
            rng,
        };
        session.deal();
        session
    }

    /// Rebuild the per-session state from the source dataset: reshuffled
    /// options (when configured), a fresh presentation order, zeroed
    /// progress, cursor at 0.
    fn deal(&mut self) {
        let n = self.source.len();

        let mut questions = Vec::with_capacity(n);
        for record in self.source.iter() {
            if self.config.shuffle_options && record.options.len() > 1 {
                questions.push(shuffle::shuffle_options(&mut self.rng, record));
            } else {
                questions.push(record.clone());
            }
        }
        self.questions = questions;
        self.order = shuffle::presentation_order(&mut self.rng, n, self.config.order);
        self.progress = vec![ProgressEntry::default(); n];
        self.cursor = 0;
        self.phase = if n == 0 {
            warn!("session started with no playable questions");
            Phase::Empty
        } else {
            Phase::Active
        };
    }

    // -- queries ------------------------------------------------------------

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Current zero-based display position.
    pub fn position(&self) -> usize {
        self.cursor
    }

    /// The display-position → dataset-index permutation for this run.
    pub fn presentation_order(&self) -> &[usize] {
        &self.order
    }

    /// All progress entries, indexed by dataset index.
    pub fn progress(&self) -> &[ProgressEntry] {
        &self.progress
    }

    pub fn progress_for(&self, dataset_index: usize) -> Option<&ProgressEntry> {
        self.progress.get(dataset_index)
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The question and progress at the current display position, or `None`
    /// when the session has no questions. Never mutates.
    pub fn current_question(&self) -> Option<CurrentQuestion<'_>> {
        let dataset_index = *self.order.get(self.cursor)?;
        Some(CurrentQuestion {
            position: self.cursor,
            total: self.questions.len(),
            dataset_index,
            record: &self.questions[dataset_index],
            progress: &self.progress[dataset_index],
        })
    }

    pub fn is_at_start(&self) -> bool {
        self.cursor == 0
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor + 1 >= self.questions.len()
    }

    /// Running score over the whole dataset; callable in any phase.
    pub fn score(&self) -> ScoreReport {
        score::tally(&self.progress)
    }

    // -- commands -----------------------------------------------------------

    /// Commit an answer for the question at the current display position.
    ///
    /// The first committed answer is final: a second call for the same
    /// question is an ignored no-op, whatever its argument. Option indices
    /// past the end of the option list commit nothing either.
    pub fn select_option(&mut self, option: usize) -> SelectionOutcome {
        if self.phase != Phase::Active {
            return SelectionOutcome::Inactive;
        }

        let dataset_index = self.order[self.cursor];
        let record = &self.questions[dataset_index];
        if option >= record.options.len() {
            return SelectionOutcome::OutOfRange;
        }

        let entry = &mut self.progress[dataset_index];
        if entry.is_answered() {
            // first answer wins
            return SelectionOutcome::AlreadyAnswered;
        }

        let correct = option == record.correct_option;
        entry.selected = Some(option);
        entry.correct = Some(correct);
        debug!(dataset_index, option, correct, "answer committed");
        SelectionOutcome::Committed { correct }
    }

    /// Move to the next display position. Clamped: at the last position this
    /// is a no-op. Returns whether the cursor moved.
    pub fn advance(&mut self) -> bool {
        if self.phase != Phase::Active || self.is_at_end() {
            return false;
        }
        self.cursor += 1;
        true
    }

    /// Move to the previous display position. Clamped at position 0.
    pub fn retreat(&mut self) -> bool {
        if self.phase != Phase::Active || self.is_at_start() {
            return false;
        }
        self.cursor -= 1;
        true
    }

    /// Jump straight to a display position. Out-of-range positions are
    /// ignored. Returns whether the cursor moved.
    pub fn jump_to(&mut self, position: usize) -> bool {
        if self.phase != Phase::Active || position >= self.questions.len() {
            return false;
        }
        self.cursor = position;
        true
    }

    /// Explicitly end the session. Answering every question does not get
    /// here on its own — the caller decides when the session is over.
    /// Idempotent; an empty session stays empty.
    pub fn finish(&mut self) -> Phase {
        if self.phase == Phase::Active {
            self.phase = Phase::Completed;
        }
        self.phase
    }

    /// Start over with the same dataset: fresh presentation order in the
    /// given mode, all progress back to unanswered, cursor at 0. The source
    /// dataset is untouched; the RNG stream continues, so a restarted seeded
    /// session gets a new but still reproducible order.
    pub fn restart(&mut self, order: OrderMode) {
        debug!(%order, "restarting session");
        self.config.order = order;
        self.deal();
    }
}
