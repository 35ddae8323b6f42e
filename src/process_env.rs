//! Injectable abstraction over the process environment.

use std::collections::BTreeMap;

/// A mutable string-to-string environment.
///
/// The loader writes through this trait instead of touching `std::env`
/// directly, so the merge logic can be exercised against an in-memory
/// environment in tests.
pub trait ProcessEnv {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// The real process environment, backed by `std::env`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdEnv;

impl ProcessEnv for StdEnv {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }

    fn set(&mut self, key: &str, value: &str) {
        std::env::set_var(key, value);
    }
}

/// An in-memory environment for tests and dry runs.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MapEnv {
    vars: BTreeMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seeds a variable, as if it were set before the loader ran.
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn vars(&self) -> &BTreeMap<String, String> {
        &self.vars
    }
}

impl ProcessEnv for MapEnv {
    fn get(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.vars.insert(key.to_string(), value.to_string());
    }
}
