//! Lenient validation of raw question payloads.
//!
//! Records arrive from an untrusted upstream extraction step and are not
//! guaranteed well-formed. The contract is soft failure: malformed records
//! are dropped (with a warning) rather than repaired or surfaced, a
//! non-list document degrades to an empty dataset, and the relative order
//! of kept records is preserved.
//!
//! Two field spellings are accepted for each slot (`question` /
//! `raw_question`, `options` / `raw_options`) and the correct answer may be
//! given either as a zero-based `correctOptionIndex` number or as a single
//! answer letter under `raw_answer` / `answer` ("A" → 0, "B" → 1, ...).

use serde_json::Value;
use tracing::warn;

use crate::session_engine::error::DatasetError;
use crate::session_engine::models::{QuestionRecord, QuizDataset};

/// Name of a JSON value's type, for diagnostics.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Map a single answer letter to a zero-based option index.
///
/// Accepts upper or lower case and surrounding whitespace; anything that is
/// not exactly one ASCII letter is rejected.
pub(crate) fn answer_letter_index(raw: &str) -> Option<usize> {
    let trimmed = raw.trim();
    let mut chars = trimmed.chars();
    let first = chars.next()?;
    if chars.next().is_some() || !first.is_ascii_alphabetic() {
        return None;
    }
    Some(first.to_ascii_uppercase() as usize - 'A' as usize)
}

/// Extract one playable record, or `None` if the element is malformed.
fn record_from_value(raw: &Value) -> Option<QuestionRecord> {
    let obj = raw.as_object()?;

    let prompt = obj
        .get("question")
        .or_else(|| obj.get("raw_question"))?
        .as_str()?;
    if prompt.trim().is_empty() {
        return None;
    }

    let raw_options = obj
        .get("options")
        .or_else(|| obj.get("raw_options"))?
        .as_array()?;
    let mut options = Vec::with_capacity(raw_options.len());
    for option in raw_options {
        options.push(option.as_str()?.to_string());
    }

    let correct_option = match obj.get("correctOptionIndex") {
        Some(index) => index.as_u64()? as usize,
        None => {
            let letter = obj
                .get("raw_answer")
                .or_else(|| obj.get("answer"))?
                .as_str()?;
            answer_letter_index(letter)?
        }
    };

    // Tightened beyond shape: an index past the options (or no options at
    // all) would make the question unanswerable, so the record is dropped.
    if options.is_empty() || correct_option >= options.len() {
        return None;
    }

    Some(QuestionRecord {
        prompt: prompt.to_string(),
        options,
        correct_option,
    })
}

/// Filter a decoded document into a trusted [`QuizDataset`].
///
/// Never fails: a non-list document yields an empty dataset.
pub fn validate(raw: &Value) -> QuizDataset {
    let Some(items) = raw.as_array() else {
        warn!(got = json_type_name(raw), "quiz payload is not a list, keeping no records");
        return QuizDataset::default();
    };

    let mut kept = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        match record_from_value(item) {
            Some(record) => kept.push(record),
            None => warn!(index, "dropping malformed question record"),
        }
    }
    QuizDataset::new(kept)
}

/// Strict entry point for the embedded payload read once at startup.
///
/// Unlike [`validate`], the top-level shape is enforced here: text that is
/// not JSON, or JSON whose top level is not a list, is an error the caller
/// has to handle. Individual records still fail softly.
pub fn parse_dataset(json: &str) -> Result<QuizDataset, DatasetError> {
    let raw: Value = serde_json::from_str(json)?;
    if !raw.is_array() {
        return Err(DatasetError::NotAList(json_type_name(&raw)));
    }
    Ok(validate(&raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answer_letters_map_case_insensitively() {
        assert_eq!(answer_letter_index("A"), Some(0));
        assert_eq!(answer_letter_index(" b "), Some(1));
        assert_eq!(answer_letter_index("D"), Some(3));
        assert_eq!(answer_letter_index(""), None);
        assert_eq!(answer_letter_index("AB"), None);
        assert_eq!(answer_letter_index("3"), None);
    }

    #[test]
    fn non_list_document_yields_empty_dataset() {
        assert!(validate(&serde_json::json!({"questions": []})).is_empty());
        assert!(validate(&serde_json::json!("nope")).is_empty());
        assert!(validate(&serde_json::json!(null)).is_empty());
    }
}
