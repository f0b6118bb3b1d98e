// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! vox-core: value types shared by the vox voice assistant crates

pub mod macros;

pub mod command;
pub mod execution;
pub mod message;

pub use command::{ParsedCommand, RejectionKind};
pub use execution::{
    ExecOutcome, ExecutionResult, INTERNAL_FAILURE_CODE, NOT_EXECUTABLE_CODE, NOT_FOUND_CODE,
};
pub use message::{Message, Role};
