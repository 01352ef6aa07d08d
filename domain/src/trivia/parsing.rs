//! Trivia parsing from completion responses.
//!
//! The model is asked for raw JSON of the shape
//! `{"questions": [...], "answers": [...]}`, but replies sometimes wrap it in
//! a fenced code block or a sentence of prose. Accepted, in order:
//!
//! 1. the whole response as JSON
//! 2. the first ` ``` ` / ` ```json ` fenced block
//! 3. the slice from the first `{` to the last `}`

use super::set::TriviaSet;
use crate::core::error::DomainError;
use serde_json::Value;

/// Parse a completion response into a validated [`TriviaSet`].
pub fn parse_trivia_response(response: &str) -> Result<TriviaSet, DomainError> {
    let json = extract_json(response).ok_or_else(|| {
        DomainError::InvalidTriviaResponse("response does not contain a JSON object".to_string())
    })?;
    parse_trivia_json(&json)
}

/// Build a [`TriviaSet`] from an already parsed JSON value.
pub fn parse_trivia_json(json: &Value) -> Result<TriviaSet, DomainError> {
    let questions = string_array(json, "questions")?;
    let answers = string_array(json, "answers")?;
    TriviaSet::new(questions, answers)
}

fn extract_json(response: &str) -> Option<Value> {
    let trimmed = response.trim();

    if let Ok(value @ Value::Object(_)) = serde_json::from_str::<Value>(trimmed) {
        return Some(value);
    }

    if let Some(block) = fenced_block(trimmed) {
        if let Ok(value @ Value::Object(_)) = serde_json::from_str::<Value>(&block) {
            return Some(value);
        }
    }

    let start = trimmed.find('{')?;
    let end = trimmed.rfind('}')?;
    if end <= start {
        return None;
    }
    match serde_json::from_str::<Value>(&trimmed[start..=end]) {
        Ok(value @ Value::Object(_)) => Some(value),
        _ => None,
    }
}

fn fenced_block(response: &str) -> Option<String> {
    let mut in_block = false;
    let mut block = String::new();

    for line in response.lines() {
        let line_trimmed = line.trim();
        if !in_block && line_trimmed.starts_with("```") {
            in_block = true;
            block.clear();
        } else if in_block && line_trimmed == "```" {
            return Some(block);
        } else if in_block {
            block.push_str(line);
            block.push('\n');
        }
    }

    None
}

/// Strings stay as-is, numbers are stringified (`1945` → `"1945"`).
fn json_value_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn string_array(json: &Value, field: &str) -> Result<Vec<String>, DomainError> {
    let items = json
        .get(field)
        .and_then(Value::as_array)
        .ok_or_else(|| {
            DomainError::InvalidTriviaResponse(format!("missing '{}' array", field))
        })?;

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            json_value_to_string(item).ok_or_else(|| {
                DomainError::InvalidTriviaResponse(format!(
                    "'{}'[{}] is not a string",
                    field, index
                ))
            })
        })
        .collect()
}
