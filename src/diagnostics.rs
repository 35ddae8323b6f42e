//! Non-fatal diagnostics and the sinks that receive them.

use std::path::PathBuf;
use thiserror::Error;

/// A recoverable problem encountered while loading or applying env files.
///
/// None of these abort the load; every path degrades to "treat as absent".
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum Diagnostic {
    #[error("parsing {file} line {line}: '{text}' is not a valid KEY=VALUE entry")]
    MalformedLine {
        file: String,
        line: usize,
        text: String,
    },

    #[error("failed to read '{path}': {message}")]
    UnreadableFile { path: PathBuf, message: String },

    #[error("environment already defines '{key}={existing}', new value '{ignored}' is ignored")]
    ShadowedKey {
        key: String,
        existing: String,
        ignored: String,
    },
}

/// Receives diagnostics during a load.
///
/// Injected rather than written to a global logger so tests can capture
/// output deterministically.
pub trait DiagnosticSink {
    fn emit(&mut self, diagnostic: &Diagnostic);
}

/// Discards all diagnostics. Used when debug output is disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&mut self, _diagnostic: &Diagnostic) {}
}

/// Writes diagnostics to standard output with a fixed tag.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl StdoutSink {
    const TAG: &'static str = "[mode-env][debug]";
}

impl DiagnosticSink for StdoutSink {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        println!("{} {diagnostic}", Self::TAG);
    }
}

/// Routes diagnostics through the `tracing` facade at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        tracing::debug!(target: "mode_env", "{diagnostic}");
    }
}

/// Collects diagnostics for later inspection.
impl DiagnosticSink for Vec<Diagnostic> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.push(diagnostic.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let diag = Diagnostic::MalformedLine {
            file: ".env".into(),
            line: 3,
            text: "KEY=".into(),
        };
        assert_eq!(
            diag.to_string(),
            "parsing .env line 3: 'KEY=' is not a valid KEY=VALUE entry"
        );

        let diag = Diagnostic::ShadowedKey {
            key: "A".into(),
            existing: "preset".into(),
            ignored: "1".into(),
        };
        assert_eq!(
            diag.to_string(),
            "environment already defines 'A=preset', new value '1' is ignored"
        );
    }

    #[test]
    fn test_vec_sink_captures() {
        let mut sink: Vec<Diagnostic> = Vec::new();
        let diag = Diagnostic::UnreadableFile {
            path: ".env".into(),
            message: "not found".into(),
        };
        sink.emit(&diag);
        assert_eq!(sink, vec![diag]);
    }
}
