//! Merges env files into the process environment.

use std::path::{Path, PathBuf};

use crate::diagnostics::{Diagnostic, DiagnosticSink, NullSink, StdoutSink};
use crate::file::load_env_file;
use crate::process_env::{ProcessEnv, StdEnv};

/// Base file loaded on every run.
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Environment variable recording the active run mode.
pub const DEFAULT_MODE_KEY: &str = "RUN_MODE";

/// Builder for loading env files into the process environment.
///
/// The base file is always loaded; when a non-empty mode is set, a
/// `<base>.<mode>` file is loaded on top and wins per key. Merged entries
/// are written into the environment only for keys not already defined;
/// existing variables are never overwritten. Afterwards the mode-indicator
/// variable is set to the mode string if still undefined.
///
/// Nothing here fails: missing or unreadable files act as empty, and every
/// problem surfaces only as a diagnostic.
///
/// ## Example
///
/// ```no_run
/// use mode_env::EnvLoader;
///
/// EnvLoader::new()
///     .with_mode("production")
///     .with_debug(true)
///     .apply();
/// ```
#[derive(Debug, Default)]
#[must_use = "builders do nothing until .apply() is called"]
pub struct EnvLoader {
    base_file: Option<PathBuf>,
    mode: Option<String>,
    mode_key: Option<String>,
    debug: bool,
}

impl EnvLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the base file path (default `.env`, relative to the
    /// current working directory). The mode file name is derived from it.
    pub fn with_base_file(mut self, path: impl AsRef<Path>) -> Self {
        self.base_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the run mode. An empty mode behaves as if none was supplied:
    /// no mode file is loaded.
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }

    /// Overrides the mode-indicator variable name (default `RUN_MODE`).
    pub fn with_mode_key(mut self, key: impl Into<String>) -> Self {
        self.mode_key = Some(key.into());
        self
    }

    /// Enables diagnostic output on standard output for this load.
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Applies the merged env files to the real process environment.
    ///
    /// Diagnostics go to stdout when debug is enabled and are discarded
    /// otherwise.
    pub fn apply(self) {
        if self.debug {
            self.apply_to(&mut StdEnv, &mut StdoutSink);
        } else {
            self.apply_to(&mut StdEnv, &mut NullSink);
        }
    }

    /// Applies the merged env files to an arbitrary environment, reporting
    /// diagnostics to `sink`.
    pub fn apply_to(&self, env: &mut dyn ProcessEnv, sink: &mut dyn DiagnosticSink) {
        let base_file = self
            .base_file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ENV_FILE));

        let mut merged = load_env_file(&base_file, sink);

        // Mode entries override base entries for the same key.
        if let Some(mode) = self.mode.as_deref().filter(|m| !m.is_empty()) {
            let mode_file = PathBuf::from(format!("{}.{mode}", base_file.display()));
            merged.extend(load_env_file(&mode_file, sink));
        }

        for (key, value) in &merged {
            let value = value.to_string();
            match env.get(key) {
                None => env.set(key, &value),
                Some(existing) => sink.emit(&Diagnostic::ShadowedKey {
                    key: key.clone(),
                    existing,
                    ignored: value,
                }),
            }
        }

        // The mode indicator is set unconditionally when still undefined,
        // even to an empty string when no mode was supplied.
        let mode_key = self.mode_key.as_deref().unwrap_or(DEFAULT_MODE_KEY);
        if env.get(mode_key).is_none() {
            env.set(mode_key, self.mode.as_deref().unwrap_or(""));
        }
    }
}

/// Convenience entry point: loads `.env` (and `.env.<mode>` when a mode is
/// given) into the process environment.
pub fn apply(mode: Option<&str>, debug: bool) {
    let mut loader = EnvLoader::new().with_debug(debug);
    if let Some(mode) = mode {
        loader = loader.with_mode(mode);
    }
    loader.apply();
}
