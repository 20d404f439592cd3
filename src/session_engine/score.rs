//! Score aggregation over progress records.

use serde::{Deserialize, Serialize};
use crate::session_engine::models::ProgressEntry;

/// Aggregated session result.
///
/// Counts run over dataset indices, so the result is independent of the
/// presentation order. Callable mid-session: `answered` may be less than
/// `total`, and `percent` is the running score over the whole dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub correct: usize,
    pub answered: usize,
    pub total: usize,
    /// `correct / total` rounded to the nearest integer percent; 0 when the
    /// dataset is empty.
    pub percent: u32,
}

/// Tally the score from per-question progress entries.
pub fn tally(progress: &[ProgressEntry]) -> ScoreReport {
    let total = progress.len();
    let answered = progress.iter().filter(|p| p.is_answered()).count();
    let correct = progress.iter().filter(|p| p.correct == Some(true)).count();

    ScoreReport {
        correct,
        answered,
        total,
        percent: percent(correct, total),
    }
}

/// `correct / total` as a percentage rounded to the nearest integer.
pub fn percent(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((correct as f64 / total as f64) * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answered(selected: usize, correct: bool) -> ProgressEntry {
        ProgressEntry {
            selected: Some(selected),
            correct: Some(correct),
        }
    }

    #[test]
    fn empty_progress_scores_zero() {
        let report = tally(&[]);
        assert_eq!(report.total, 0);
        assert_eq!(report.percent, 0);
    }

    #[test]
    fn unanswered_questions_count_as_incorrect() {
        let report = tally(&[ProgressEntry::default(); 3]);
        assert_eq!(report.answered, 0);
        assert_eq!(report.correct, 0);
        assert_eq!(report.percent, 0);
    }

    #[test]
    fn percent_rounds_to_nearest_integer() {
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(1, 2), 50);
        assert_eq!(percent(3, 3), 100);
        assert_eq!(percent(0, 3), 0);
    }

    #[test]
    fn tally_counts_only_correct_entries() {
        let progress = [
            answered(1, true),
            answered(0, false),
            answered(2, true),
            ProgressEntry::default(),
        ];
        let report = tally(&progress);
        assert_eq!(report.correct, 2);
        assert_eq!(report.answered, 3);
        assert_eq!(report.total, 4);
        assert_eq!(report.percent, 50);
    }
}
