// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Rewriting replies for spoken delivery.

use vox_adapters::{LlmBackend, LlmError};
use vox_core::Message;

use crate::prompt::{vars, PromptError, PromptStore};

pub const REFINEMENT_TEMPLATE: &str = "refinement_prompt";
const REFINE_REQUEST: &str = "Refine the source response above for audio delivery.";

fn fallback_prompt(response: &str) -> String {
    format!(
        "Rewrite the following response for spoken audio delivery. \
         Be succinct, use natural filler words, stay factually accurate, \
         and use a matter-of-fact tone. Do not add information that is \
         not in the original.\n\nSource response:\n{response}"
    )
}

/// Pass `response` through the LLM once more for audio delivery.
///
/// Blank input is returned unchanged without calling the LLM.
pub async fn refine_response(
    response: &str,
    llm: &dyn LlmBackend,
    prompts: &PromptStore,
) -> Result<String, LlmError> {
    if response.trim().is_empty() {
        return Ok(response.to_string());
    }

    let prompt = match prompts.render(REFINEMENT_TEMPLATE, &vars([("source_response", response)])) {
        Ok(prompt) => prompt,
        Err(PromptError::NotFound(_)) => fallback_prompt(response),
        Err(e) => {
            tracing::warn!(error = %e, "refinement template unusable, using built-in prompt");
            fallback_prompt(response)
        }
    };

    let messages = [Message::system(prompt), Message::user(REFINE_REQUEST)];
    llm.chat(&messages).await
}

#[cfg(test)]
#[path = "refine_tests.rs"]
mod tests;
