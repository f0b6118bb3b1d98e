// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bounded conversation history.

use vox_core::{Message, Role};

/// In-memory message list capped at `max_turns` user/assistant exchanges.
///
/// System messages are always kept, ahead of the rest, and do not count
/// toward the cap. A cap of zero keeps everything.
#[derive(Debug, Clone, Default)]
pub struct ConversationHistory {
    messages: Vec<Message>,
    max_turns: usize,
}

impl ConversationHistory {
    pub const DEFAULT_MAX_TURNS: usize = 20;

    pub fn new(max_turns: usize) -> Self {
        Self { messages: Vec::new(), max_turns }
    }

    pub fn max_turns(&self) -> usize {
        self.max_turns
    }

    pub fn push(&mut self, role: Role, content: impl Into<String>) {
        self.messages.push(Message::new(role, content));
        self.enforce_limit();
    }

    /// Messages in the order they are sent to the LLM.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    fn enforce_limit(&mut self) {
        if self.max_turns == 0 {
            return;
        }
        let (mut kept, rest): (Vec<_>, Vec<_>) =
            std::mem::take(&mut self.messages).into_iter().partition(|m| m.role == Role::System);
        let limit = self.max_turns * 2;
        let skip = rest.len().saturating_sub(limit);
        kept.extend(rest.into_iter().skip(skip));
        self.messages = kept;
    }
}

#[cfg(test)]
#[path = "history_tests.rs"]
mod tests;
