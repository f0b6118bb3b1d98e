// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! vox-adapters: LLM provider backends
//!
//! Each provider implements [`LlmBackend`]. Backends are built by name
//! through an explicitly constructed [`ProviderRegistry`].

pub mod llm;

pub use llm::{
    AnthropicBackend, LlmBackend, LlmError, LlmSettings, OllamaBackend, OpenAiCompatBackend,
    ProviderRegistry,
};

#[cfg(any(test, feature = "test-support"))]
pub use llm::ScriptedLlm;
