// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! vox-shell: argv command execution for voice agent commands
//!
//! Commands are split with quote-aware rules and spawned directly, never
//! through a shell. Strings containing shell metacharacters are refused
//! before splitting. `&&` chains run left to right and stop at the first
//! failing segment.

pub mod chain;
pub mod exec;
pub mod guard;
pub mod split;

pub use chain::{split_chain, CHAIN_OPERATOR};
pub use exec::{CommandExecutor, ExecConfigError};
pub use guard::find_disallowed;
pub use split::{split_command, SplitError, SplitStyle};
