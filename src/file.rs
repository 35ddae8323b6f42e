//! File-based env source.

use std::path::Path;

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::parser::{parse_env, EnvMap};

/// Reads and parses an env file, resolved relative to the current working
/// directory.
///
/// Any read failure (missing file, permission error) is reported to `sink`
/// and yields an empty mapping; this never returns an error to the caller.
pub fn load_env_file(path: &Path, sink: &mut dyn DiagnosticSink) -> EnvMap {
    match std::fs::read_to_string(path) {
        Ok(contents) => parse_env(&path.display().to_string(), &contents, sink),
        Err(e) => {
            sink.emit(&Diagnostic::UnreadableFile {
                path: path.to_path_buf(),
                message: e.to_string(),
            });
            EnvMap::new()
        }
    }
}
