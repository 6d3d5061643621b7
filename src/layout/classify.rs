use once_cell::sync::Lazy;
use regex::Regex;

use crate::ir::{BlockKind, BlockNode};

// Naming conventions of the block definitions (`fileName`).
static EVENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"when_").unwrap());
static REPEAT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"repeat|^_if$|^if_else$").unwrap());
static BOOLEAN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"boolean").unwrap());
static GETTER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"get_|value").unwrap());
// Loop/conditional words in Korean labels: "repeat", "if", "if (alt.)".
static LOOP_WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"반복|만약|만일").unwrap());

/// Infers the shape kind of a block. Total: every node maps to exactly one kind.
pub fn classify(node: &BlockNode) -> BlockKind {
    if let Some(explicit) = node.explicit_type.as_deref() {
        match BlockKind::from_token(explicit) {
            Some(kind) => return kind,
            None => tracing::debug!(
                explicit_type = explicit,
                "ignoring unknown block type, falling back to heuristics"
            ),
        }
    }

    let category = node.category();
    let identifier = node.identifier();
    let name = node.name.as_deref().unwrap_or("");

    if category == "start" || EVENT_RE.is_match(identifier) {
        return BlockKind::Start;
    }

    if matches!(category, "flow" | "repeat")
        && (REPEAT_RE.is_match(identifier) || LOOP_WORD_RE.is_match(name))
    {
        return BlockKind::Container;
    }

    if category == "judgement" || BOOLEAN_RE.is_match(identifier) {
        return BlockKind::Judgement;
    }

    if matches!(category, "calc" | "variable") && GETTER_RE.is_match(identifier) {
        return BlockKind::Value;
    }

    BlockKind::Simple
}
