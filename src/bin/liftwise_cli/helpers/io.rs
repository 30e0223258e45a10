// ABOUTME: JSON file loading and output helpers for liftwise-cli
// ABOUTME: Reads records from a path or stdin, validates them, and prints pretty JSON to stdout
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Liftwise Contributors

use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use anyhow::{Context, Error, Result};
use liftwise::errors::{AppError, AppResult, ErrorResponse};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

/// Read and deserialize a JSON document; `-` reads stdin
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = if path == Path::new("-") {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read JSON from stdin")?;
        buffer
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?
    };

    debug!(path = %path.display(), bytes = raw.len(), "loaded input");

    serde_json::from_str(&raw)
        .map_err(AppError::from)
        .with_context(|| format!("Invalid JSON in {}", path.display()))
}

/// Run `validate` over every record, naming the offending index on failure
pub fn validate_all<T>(records: &[T], validate: impl Fn(&T) -> AppResult<()>) -> Result<()> {
    for (index, record) in records.iter().enumerate() {
        validate(record).with_context(|| format!("Record {index} failed validation"))?;
    }
    Ok(())
}

/// Print a value as pretty JSON followed by a newline
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let rendered = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::internal(format!("Failed to serialize command output: {e}")))?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}").context("Failed to write to stdout")?;
    Ok(())
}

/// Report a failed command on stderr: the full context chain, then the
/// structured error body when the failure came from an engine boundary check
pub fn report_error(error: &Error) {
    eprintln!("Error: {error:#}");
    if let Some(app_error) = error.chain().find_map(|cause| cause.downcast_ref::<AppError>()) {
        if let Ok(body) = serde_json::to_string(&ErrorResponse::from(app_error)) {
            eprintln!("{body}");
        }
    }
}
