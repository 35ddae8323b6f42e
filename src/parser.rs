//! Env-file line parser.

use std::collections::BTreeMap;

use crate::diagnostics::{Diagnostic, DiagnosticSink};
use crate::value::{coerce, EnvValue};

/// A parsed mapping from key to typed value. Later occurrences of a key
/// overwrite earlier ones; iteration order carries no meaning.
pub type EnvMap = BTreeMap<String, EnvValue>;

const KEY_VALUE_SEPARATOR: char = '=';

/// Parses env-file content into a mapping.
///
/// Lines are delimited by `\n`, `\r`, or `\r\n`. Each line splits at the
/// first `=`; the value may itself contain `=`. Keys and values are trimmed.
/// Lines whose trimmed key starts with `#` are comments. A line where
/// exactly one of key/value is empty is malformed and reported to `sink`
/// with its 1-based line number; blank lines are ignored.
pub fn parse_env(source_name: &str, content: &str, sink: &mut dyn DiagnosticSink) -> EnvMap {
    let mut map = EnvMap::new();

    // Splitting on either character keeps line numbers identical for \r\n
    // input: the pair yields one interior empty line, which is ignored.
    for (index, line) in content.split(['\n', '\r']).enumerate() {
        let (key, value) = match line.split_once(KEY_VALUE_SEPARATOR) {
            Some((key, value)) => (key.trim(), value.trim()),
            None => (line.trim(), ""),
        };

        if key.starts_with('#') {
            continue;
        }

        if !key.is_empty() && !value.is_empty() {
            map.insert(key.to_string(), coerce(value));
        } else if !key.is_empty() || !value.is_empty() {
            sink.emit(&Diagnostic::MalformedLine {
                file: source_name.to_string(),
                line: index + 1,
                text: line.to_string(),
            });
        }
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::NullSink;

    fn parse(content: &str) -> (EnvMap, Vec<Diagnostic>) {
        let mut diags = Vec::new();
        let map = parse_env(".env", content, &mut diags);
        (map, diags)
    }

    #[test]
    fn test_well_formed_lines() {
        let (map, diags) = parse("HOST=localhost\nPORT=8080\nDEBUG=true\n");
        assert_eq!(map.get("HOST"), Some(&EnvValue::String("localhost".into())));
        assert_eq!(map.get("PORT"), Some(&EnvValue::Integer(8080)));
        assert_eq!(map.get("DEBUG"), Some(&EnvValue::Bool(true)));
        assert!(diags.is_empty());
    }

    #[test]
    fn test_value_keeps_later_separators() {
        let (map, _) = parse("URL=key=abc&mode=1");
        assert_eq!(
            map.get("URL"),
            Some(&EnvValue::String("key=abc&mode=1".into()))
        );
    }

    #[test]
    fn test_trims_whitespace() {
        let (map, diags) = parse("  KEY  =  value  ");
        assert_eq!(map.get("KEY"), Some(&EnvValue::String("value".into())));
        assert!(diags.is_empty());
    }

    #[test]
    fn test_last_occurrence_wins() {
        let (map, _) = parse("KEY=first\nKEY=second");
        assert_eq!(map.get("KEY"), Some(&EnvValue::String("second".into())));
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_comments_are_skipped_silently() {
        let (map, diags) = parse("# a comment\n#KEY=value\n  # indented\n");
        assert!(map.is_empty());
        assert!(diags.is_empty());
    }

    #[test]
    fn test_blank_lines_are_ignored() {
        let (map, diags) = parse("\n\n   \nKEY=value\n\n");
        assert_eq!(map.len(), 1);
        assert!(diags.is_empty());
    }

    #[test]
    fn test_missing_value_is_malformed() {
        let (map, diags) = parse("KEY=\n");
        assert!(map.is_empty());
        assert_eq!(
            diags,
            vec![Diagnostic::MalformedLine {
                file: ".env".into(),
                line: 1,
                text: "KEY=".into(),
            }]
        );
    }

    #[test]
    fn test_bare_key_is_malformed() {
        let (map, diags) = parse("JUSTAKEY");
        assert!(map.is_empty());
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn test_missing_key_is_malformed() {
        let (map, diags) = parse("=value");
        assert!(map.is_empty());
        assert_eq!(diags.len(), 1);
    }

    #[test]
    fn test_line_numbers_are_one_based() {
        let (_, diags) = parse("A=1\nB=2\nBAD\n");
        assert_eq!(
            diags,
            vec![Diagnostic::MalformedLine {
                file: ".env".into(),
                line: 3,
                text: "BAD".into(),
            }]
        );
    }

    #[test]
    fn test_crlf_and_cr_line_endings() {
        let (map, _) = parse("A=1\r\nB=2\rC=3");
        assert_eq!(map.get("A"), Some(&EnvValue::Integer(1)));
        assert_eq!(map.get("B"), Some(&EnvValue::Integer(2)));
        assert_eq!(map.get("C"), Some(&EnvValue::Integer(3)));
    }

    #[test]
    fn test_null_sink_accepts_everything() {
        let map = parse_env(".env", "BAD\nKEY=value", &mut NullSink);
        assert_eq!(map.len(), 1);
    }
}
