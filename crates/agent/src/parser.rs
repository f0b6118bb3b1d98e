// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Turning raw LLM text into a [`ParsedCommand`].

use regex::Regex;
use std::sync::LazyLock;
use vox_core::{ParsedCommand, RejectionKind};

/// First fenced block, with an optional language tag.
#[allow(clippy::expect_used)]
static FENCE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)```(?:\w*\n?)?(.*?)```").expect("constant regex pattern is valid")
});

/// Phrases that mark the model declining instead of answering with a command.
///
/// This is a plain phrase match: a command whose arguments contain one of
/// these phrases is rejected too.
#[allow(clippy::expect_used)]
static REFUSAL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)i(?:'m| am) (?:sorry|unable|not able)",
        r"(?i)(?:doesn't|does not|don't|do not) match",
        r"(?i)no (?:matching|available|valid) command",
        r"(?i)cannot (?:find|identify|determine)",
        r"(?i)i can(?:'t|not)",
    ]
    .into_iter()
    .map(|p| Regex::new(p).expect("constant regex pattern is valid"))
    .collect()
});

const EMPTY_REASON: &str = "Empty command output.";

/// Inner text of the first fenced block, or the input when there is none.
fn strip_fences(text: &str) -> &str {
    match FENCE_PATTERN.captures(text).and_then(|caps| caps.get(1)) {
        Some(inner) => inner.as_str(),
        None => text,
    }
}

fn is_refusal(text: &str) -> bool {
    REFUSAL_PATTERNS.iter().any(|p| p.is_match(text))
}

/// Parse raw LLM output into a command or a rejection.
///
/// Refusals carry the cleaned text itself as the rejection reason. `raw` is
/// preserved unchanged in every case.
pub fn parse_llm_output(raw: &str) -> ParsedCommand {
    let cleaned = strip_fences(raw).trim();

    if cleaned.is_empty() {
        tracing::debug!("llm output empty after cleaning");
        return ParsedCommand::rejected(raw, RejectionKind::EmptyOutput, EMPTY_REASON);
    }

    if is_refusal(cleaned) {
        tracing::info!(reason = cleaned, "llm output is a refusal");
        return ParsedCommand::rejected(raw, RejectionKind::Refusal, cleaned);
    }

    ParsedCommand::valid(raw, cleaned)
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
