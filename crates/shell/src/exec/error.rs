// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Executor configuration errors.
//!
//! Command failures are never errors: they are reported as
//! [`vox_core::ExecutionResult`] values. Only a misconfigured executor is.

/// Invalid executor configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExecConfigError {
    #[error("timeout must be greater than zero")]
    ZeroTimeout,
}
