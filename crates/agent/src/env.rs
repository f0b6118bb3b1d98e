// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.

use std::path::PathBuf;

/// Explicit configuration file path.
pub const CONFIG_ENV: &str = "VOX_CONFIG";

/// `tracing` filter directives for the binary.
pub const LOG_ENV: &str = "VOX_LOG";

/// Configuration file named by `VOX_CONFIG`, if set and non-empty.
pub fn config_override() -> Option<PathBuf> {
    std::env::var(CONFIG_ENV).ok().filter(|s| !s.is_empty()).map(PathBuf::from)
}

/// Default location: `<config_dir>/vox/config.toml`.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("vox").join("config.toml"))
}

/// Log filter from `VOX_LOG`, if set and non-empty.
pub fn log_filter() -> Option<String> {
    std::env::var(LOG_ENV).ok().filter(|s| !s.trim().is_empty())
}
