//! Shared output layer for human/JSON parity across all CLI commands.
//!
//! Every command handler receives an [`OutputMode`] and formats its output
//! accordingly: indented text for humans, stable JSON for scripts. Errors
//! carry the machine code and hint from `orghier_core::ErrorCode`.

use std::io::{self, Write};

use orghier_core::{ErrorCode, HierarchyError};
use serde::Serialize;
use serde_json::json;

/// The two output modes supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-readable text.
    Human,
    /// Machine-readable JSON (one object or array per result).
    Json,
}

impl OutputMode {
    /// Returns `true` if JSON output was requested.
    pub fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }
}

/// Render a value: JSON in JSON mode, otherwise the given closure.
pub fn render<T, F>(mode: OutputMode, value: &T, human: F) -> anyhow::Result<()>
where
    T: Serialize,
    F: FnOnce(&T, &mut dyn Write) -> io::Result<()>,
{
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if mode.is_json() {
        serde_json::to_writer_pretty(&mut out, value)?;
        writeln!(out)?;
    } else {
        human(value, &mut out)?;
    }
    Ok(())
}

/// A CLI-facing error with a stable code and optional remediation hint.
#[derive(Debug, Clone, Serialize)]
pub struct CliError {
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl CliError {
    pub fn new(message: impl Into<String>, code: ErrorCode) -> Self {
        Self {
            error: message.into(),
            code: code.code().to_string(),
            hint: code.hint().map(str::to_string),
        }
    }
}

impl From<&HierarchyError> for CliError {
    fn from(err: &HierarchyError) -> Self {
        Self::new(err.to_string(), err.code())
    }
}

/// Render an error: JSON object on stdout in JSON mode, prose on stderr
/// otherwise. The caller still decides the exit status (usually by bailing).
pub fn render_error(mode: OutputMode, err: &CliError) -> anyhow::Result<()> {
    if mode.is_json() {
        let value = json!({ "error": err.error, "code": err.code, "hint": err.hint });
        println!("{}", serde_json::to_string_pretty(&value)?);
    } else {
        eprintln!("error[{}]: {}", err.code, err.error);
        if let Some(hint) = &err.hint {
            eprintln!("  hint: {hint}");
        }
    }
    Ok(())
}
