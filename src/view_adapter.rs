use serde_json::{json, Value};
use crate::session_engine::session::Session;

/// Option id shown to the user: "A", "B", ... for the first 26 positions,
/// 1-based numbers past that.
fn option_letter(index: usize) -> String {
    if index < 26 {
        ((b'A' + index as u8) as char).to_string()
    } else {
        (index + 1).to_string()
    }
}

/// Progress-bar width: fraction of questions seen so far, as a percentage.
fn progress_percent(position: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (((position + 1) * 100) as f64 / total as f64).round() as u32
}

/// Build one option entry. `selected` marks the user's pick; once the
/// question is answered the correct option is revealed.
fn option_entry(index: usize, text: &str, selected: Option<usize>, correct_option: usize) -> Value {
    json!({
        "id": option_letter(index),
        "text": text,
        "selected": selected == Some(index),
        "reveal_correct": selected.is_some() && index == correct_option,
    })
}

/// Map a [`Session`] to the JSON snapshot the rendering layer consumes.
///
/// The engine never reaches into presentation objects; a client polls this
/// after each command and redraws from it. The shape mirrors what the
/// practice page shows: question number and prompt, lettered options with
/// selection/reveal flags, the `i / n` progress text and bar width,
/// prev/next availability, and the running score.
pub fn to_view_state(session: &Session) -> Value {
    let score = session.score();

    let Some(current) = session.current_question() else {
        // No playable questions: render an explicit empty state.
        return json!({
            "phase": session.phase().to_string(),
            "question": Value::Null,
            "progress": { "position": 0, "total": 0, "percent": 0, "answered": 0 },
            "nav": { "can_retreat": false, "can_advance": false },
            "score": score,
        });
    };

    let record = current.record;
    let selected = current.progress.selected;
    let options: Vec<Value> = record
        .options
        .iter()
        .enumerate()
        .map(|(index, text)| option_entry(index, text, selected, record.correct_option))
        .collect();

    json!({
        "phase": session.phase().to_string(),
        "question": {
            "number": current.position + 1,
            "total": current.total,
            "prompt": record.prompt,
            "options": options,
            "answered": selected.is_some(),
            "correct": current.progress.correct,
        },
        "progress": {
            "position": current.position + 1,
            "total": current.total,
            "percent": progress_percent(current.position, current.total),
            "answered": score.answered,
        },
        "nav": {
            "can_retreat": !session.is_at_start(),
            "can_advance": !session.is_at_end(),
        },
        "score": score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn option_letters_run_a_to_z_then_numbers() {
        assert_eq!(option_letter(0), "A");
        assert_eq!(option_letter(3), "D");
        assert_eq!(option_letter(25), "Z");
        assert_eq!(option_letter(26), "27");
    }

    #[test]
    fn progress_percent_spans_the_bar() {
        assert_eq!(progress_percent(0, 4), 25);
        assert_eq!(progress_percent(3, 4), 100);
        assert_eq!(progress_percent(1, 3), 67);
        assert_eq!(progress_percent(0, 0), 0);
    }
}
