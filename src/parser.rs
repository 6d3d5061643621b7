use crate::ir::{BlockInput, BlockNode};
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid block JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected a block object or an array of blocks, found {0}")]
    Shape(&'static str),
}

/// Parses a block tree or a run of sibling blocks.
///
/// Strict JSON is tried first; JSON5 (comments, trailing commas, unquoted
/// keys) is accepted as a fallback. Blank input and `null` mean "nothing to
/// draw" and yield `Ok(None)`.
pub fn parse_blocks(input: &str) -> Result<Option<BlockInput>, ParseError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let value = match serde_json::from_str::<Value>(trimmed) {
        Ok(value) => value,
        Err(json_err) => match json5::from_str::<Value>(trimmed) {
            Ok(value) => value,
            Err(json5_err) => {
                tracing::debug!(error = %json5_err, "JSON5 fallback failed as well");
                return Err(ParseError::Json(json_err));
            }
        },
    };

    match value {
        Value::Null => Ok(None),
        Value::Object(_) | Value::Array(_) => Ok(Some(serde_json::from_value(value)?)),
        Value::Bool(_) => Err(ParseError::Shape("a boolean")),
        Value::Number(_) => Err(ParseError::Shape("a number")),
        Value::String(_) => Err(ParseError::Shape("a string")),
    }
}

/// Parses input for the flat list view; a single object becomes a one-item list.
pub fn parse_block_list(input: &str) -> Result<Vec<BlockNode>, ParseError> {
    Ok(match parse_blocks(input)? {
        Some(BlockInput::Many(nodes)) => nodes,
        Some(BlockInput::Single(node)) => vec![node],
        None => Vec::new(),
    })
}
