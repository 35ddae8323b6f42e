use std::fmt;

/// A typed scalar parsed from an env-file value.
#[derive(Debug, Clone, PartialEq)]
pub enum EnvValue {
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl fmt::Display for EnvValue {
    /// Renders the plain string form used for environment assignment.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EnvValue::Bool(b) => write!(f, "{b}"),
            EnvValue::Integer(i) => write!(f, "{i}"),
            EnvValue::Float(x) => write!(f, "{x}"),
            EnvValue::String(s) => f.write_str(s),
        }
    }
}

/// Coerces a raw value to the most specific type:
/// boolean, integer, float, or string (fallback).
///
/// Only the literal texts `true` and `false` become booleans. Numeric
/// coercion requires the whole text to parse; anything else stays a string.
pub fn coerce(raw: &str) -> EnvValue {
    if raw == "true" {
        return EnvValue::Bool(true);
    }
    if raw == "false" {
        return EnvValue::Bool(false);
    }

    // Try integer (only if it looks like an integer: optional minus, then digits)
    if looks_like_integer(raw) {
        if let Ok(i) = raw.parse::<i64>() {
            return EnvValue::Integer(i);
        }
    }

    // Try float (if contains decimal point)
    if raw.contains('.') {
        if let Ok(f) = raw.parse::<f64>() {
            return EnvValue::Float(f);
        }
    }

    EnvValue::String(raw.to_string())
}

fn looks_like_integer(s: &str) -> bool {
    let s = s.strip_prefix('-').unwrap_or(s);
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}
