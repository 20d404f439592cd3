use rand::Rng;
use crate::session_engine::models::{OrderMode, QuestionRecord};

/// Identity order: display position i shows dataset question i.
pub fn identity(n: usize) -> Vec<usize> {
    (0..n).collect()
}

/// Unbiased permutation of `0..n`.
///
/// Pure: returns a fresh vector, never aliases the dataset.
pub fn permutation<R: Rng>(rng: &mut R, n: usize) -> Vec<usize> {
    let mut order = identity(n);

    // Fisher-Yates shuffle
    for i in (1..order.len()).rev() {
        let j = rng.gen_range(0..=i);
        order.swap(i, j);
    }

    order
}

/// Build a presentation order (display position → dataset index) for `n`
/// questions in the given mode.
pub fn presentation_order<R: Rng>(rng: &mut R, n: usize, mode: OrderMode) -> Vec<usize> {
    match mode {
        OrderMode::Random => permutation(rng, n),
        OrderMode::Sequential => identity(n),
    }
}

/// Shuffle one question's options, remapping `correct_option` so it keeps
/// pointing at the same option text.
pub fn shuffle_options<R: Rng>(rng: &mut R, record: &QuestionRecord) -> QuestionRecord {
    let perm = permutation(rng, record.options.len());

    let options: Vec<String> = perm.iter().map(|&old| record.options[old].clone()).collect();
    let mut correct_option = record.correct_option;
    for (new_index, &old_index) in perm.iter().enumerate() {
        if old_index == record.correct_option {
            correct_option = new_index;
        }
    }

    QuestionRecord {
        prompt: record.prompt.clone(),
        options,
        correct_option,
    }
}
