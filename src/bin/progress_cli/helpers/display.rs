// ABOUTME: Output formatting helpers for progress-cli
// ABOUTME: Writes analytics payloads to stdout as pretty-printed JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::io::{self, Write};

use progress_analytics::errors::{AppError, AppResult};
use serde_json::Value;

/// Print a payload as pretty JSON followed by a newline
pub fn print_json(payload: &Value) -> AppResult<()> {
    let rendered = serde_json::to_string_pretty(payload)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}")
        .map_err(|e| AppError::internal("Failed to write output").with_source(e))
}
