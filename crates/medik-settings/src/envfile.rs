//! `.env` file parsing.
//!
//! One `KEY=VALUE` per line. Blank lines and `#` lines are skipped, a `#` outside quotes starts a
//! trailing comment, and one pair of surrounding quotes is stripped from the value. Escapes are
//! only honoured for comment detection; backslashes are kept in the value as written.

use anyhow::Context;
use std::collections::BTreeMap;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Scan {
    Bare,
    Quoted(char),
    Escaped(char),
}

/// Parse env-file text into a map. Later assignments to the same key win.
pub fn parse_env_file(input: &str) -> anyhow::Result<BTreeMap<String, String>> {
    let mut vars = BTreeMap::new();

    for (idx, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let line = strip_comment(line);
        if line.is_empty() {
            continue;
        }

        let (key, value) =
            split_assignment(line).with_context(|| format!("env file line {}", idx + 1))?;
        vars.insert(key.to_string(), value.to_string());
    }

    Ok(vars)
}

fn strip_comment(line: &str) -> &str {
    let mut state = Scan::Bare;

    for (i, c) in line.char_indices() {
        state = match (state, c) {
            (Scan::Bare, '#') => return line[..i].trim(),
            (Scan::Bare, '\'' | '"') => Scan::Quoted(c),
            (Scan::Bare, _) => Scan::Bare,
            (Scan::Quoted(q), '\\') => Scan::Escaped(q),
            (Scan::Quoted(q), c) if c == q => Scan::Bare,
            (Scan::Quoted(q), _) => Scan::Quoted(q),
            (Scan::Escaped(q), _) => Scan::Quoted(q),
        };
    }

    line.trim()
}

fn split_assignment(line: &str) -> anyhow::Result<(&str, &str)> {
    let Some((key, value)) = line.split_once('=') else {
        anyhow::bail!("expected KEY=VALUE, got `{line}`");
    };

    let key = key.trim();
    if key.is_empty() {
        anyhow::bail!("missing variable name in `{line}`");
    }

    Ok((key, unquote(value.trim())))
}

fn unquote(value: &str) -> &str {
    let value = value.strip_prefix(['\'', '"']).unwrap_or(value);
    value.strip_suffix(['\'', '"']).unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn comments_outside_quotes_are_dropped() {
        assert_eq!(strip_comment("key=value"), "key=value");
        assert_eq!(strip_comment("key = value # comment"), "key = value");
        assert_eq!(strip_comment("key = # comment"), "key =");
        assert_eq!(strip_comment("key = \"a # b\" # c"), "key = \"a # b\"");
        assert_eq!(strip_comment(r##"key = "\'value"# comment"##), r#"key = "\'value""#);
        assert_eq!(strip_comment(r"key = '\'value'# comment"), r"key = '\'value'");
    }

    #[test]
    fn values_are_trimmed_and_unquoted() {
        let vars = parse_env_file(
            "\n# leading comment\n  FOO = bar baz  \nQUOTED=\"hello world\"\nSINGLE='x' # note\nEMPTY=\n",
        )
        .unwrap();

        assert_eq!(vars["FOO"], "bar baz");
        assert_eq!(vars["QUOTED"], "hello world");
        assert_eq!(vars["SINGLE"], "x");
        assert_eq!(vars["EMPTY"], "");
        assert_eq!(vars.len(), 4);
    }

    #[test]
    fn only_first_equals_splits() {
        let vars = parse_env_file("URL=postgres://u:p@h/db?sslmode=require").unwrap();
        assert_eq!(vars["URL"], "postgres://u:p@h/db?sslmode=require");
    }

    #[test]
    fn later_duplicates_win() {
        let vars = parse_env_file("A=1\nA=2\n").unwrap();
        assert_eq!(vars["A"], "2");
    }

    #[test]
    fn bad_lines_name_their_line_number() {
        let err = parse_env_file("A=1\n\nnot an assignment\n").unwrap_err();
        assert_eq!(err.to_string(), "env file line 3");
        assert!(format!("{err:#}").contains("expected KEY=VALUE"));

        let err = parse_env_file(" = value").unwrap_err();
        assert!(format!("{err:#}").contains("missing variable name"));
    }

    #[test]
    fn crlf_line_endings_are_accepted() {
        let vars = parse_env_file("A=1\r\nB=2\r\n").unwrap();
        assert_eq!(vars["A"], "1");
        assert_eq!(vars["B"], "2");
    }

    proptest! {
        #[test]
        fn never_panics(input in "\\PC{0,200}") {
            let _ = parse_env_file(&input);
        }

        #[test]
        fn simple_assignments_round_trip(
            key in "[A-Z_][A-Z0-9_]{0,15}",
            value in "[a-zA-Z0-9_./:-]{0,20}",
        ) {
            let vars = parse_env_file(&format!("{key}={value}\n")).unwrap();
            prop_assert_eq!(vars.get(&key), Some(&value));
        }
    }
}
