//! Command-line parsing.
//!
//! Pure functions: same text in, same result (or same failure) out. The
//! grammar covers a command name, the remaining argument text, and the
//! `name=value` / `name value` forms of `:set`.

use crate::errors::{CommandError, Result};
use crate::properties::{self, PropertyKind, PropertyValue};

/// Split a typed command line into `(name, rest)`. A leading `:` is
/// tolerated. Returns `None` for blank input.
pub fn parse_command_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim().trim_start_matches(':');
    let mut split = line.splitn(2, char::is_whitespace);
    let name = split.next().unwrap_or("");
    if name.is_empty() {
        return None;
    }
    Some((name, split.next().unwrap_or("").trim()))
}

/// Parse the argument of `:set` into a typed `(name, value)` pair.
///
/// Accepted forms:
/// - `name=value` and `name value` for string and number properties;
/// - bare `name` enables a boolean property, bare `noname` disables it.
///
/// Values are converted against the declared schema type (`"5"` for a
/// number property parses, a garbled number fails). Boolean properties take
/// no explicit value; giving one is a parse error.
pub fn parse_set_option(text: &str) -> Result<(String, PropertyValue)> {
    let text = text.trim();
    let (name, value) = split_option(text)?;

    let Some(value) = value else {
        // Bare name: boolean toggle, with the `no` prefix for disabling.
        return parse_bool_shorthand(name);
    };

    let def = properties::lookup(name)
        .ok_or_else(|| CommandError::UnknownProperty(name.to_string()))?;
    let value = match def.kind {
        PropertyKind::String => PropertyValue::Str(value.to_string()),
        PropertyKind::Number => {
            let n: f64 = value
                .parse()
                .map_err(|_| CommandError::Parse(text.to_string()))?;
            PropertyValue::Num(n)
        }
        // Booleans are set by presence, never by value.
        PropertyKind::Boolean => return Err(CommandError::Parse(text.to_string())),
    };
    Ok((name.to_string(), value))
}

/// Split on the first `=` or whitespace run. `name=` yields an empty value
/// (the reset form); a bare name yields `None`.
fn split_option(text: &str) -> Result<(&str, Option<&str>)> {
    let (name, value) = match text.split_once('=') {
        Some((name, value)) => (name.trim(), Some(value.trim())),
        None => match text.split_once(char::is_whitespace) {
            Some((name, value)) => (name, Some(value.trim())),
            None => (text, None),
        },
    };
    if name.is_empty() {
        return Err(CommandError::Parse(text.to_string()));
    }
    Ok((name, value))
}

fn parse_bool_shorthand(name: &str) -> Result<(String, PropertyValue)> {
    let (name, enabled) = match name.strip_prefix("no") {
        Some(rest) if properties::lookup(rest).is_some() => (rest, false),
        _ => (name, true),
    };
    let def = properties::lookup(name)
        .ok_or_else(|| CommandError::UnknownProperty(name.to_string()))?;
    if def.kind != PropertyKind::Boolean {
        return Err(CommandError::Parse(name.to_string()));
    }
    Ok((name.to_string(), PropertyValue::Bool(enabled)))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_split() {
        assert_eq!(parse_command_line("buffer 3"), Some(("buffer", "3")));
        assert_eq!(parse_command_line(":open  rust async"), Some(("open", "rust async")));
        assert_eq!(parse_command_line("quit"), Some(("quit", "")));
        assert_eq!(parse_command_line("   "), None);
        assert_eq!(parse_command_line(":"), None);
    }

    #[test]
    fn set_option_equals_form() {
        let (name, value) = parse_set_option("hintchars=asdf").unwrap();
        assert_eq!(name, "hintchars");
        assert_eq!(value, PropertyValue::Str("asdf".into()));
    }

    #[test]
    fn set_option_space_form() {
        let (name, value) = parse_set_option("hintchars asdf").unwrap();
        assert_eq!(name, "hintchars");
        assert_eq!(value, PropertyValue::Str("asdf".into()));
    }

    #[test]
    fn set_option_empty_value_is_reset_form() {
        let (name, value) = parse_set_option("hintchars=").unwrap();
        assert_eq!(name, "hintchars");
        assert_eq!(value, PropertyValue::Str(String::new()));
    }

    #[test]
    fn boolean_shorthand() {
        assert_eq!(
            parse_set_option("smoothscroll").unwrap(),
            ("smoothscroll".into(), PropertyValue::Bool(true))
        );
        assert_eq!(
            parse_set_option("nosmoothscroll").unwrap(),
            ("smoothscroll".into(), PropertyValue::Bool(false))
        );
    }

    #[test]
    fn boolean_with_explicit_value_rejected() {
        assert!(matches!(
            parse_set_option("smoothscroll=true"),
            Err(CommandError::Parse(_))
        ));
    }

    #[test]
    fn unknown_property_rejected() {
        assert!(matches!(
            parse_set_option("nope=1"),
            Err(CommandError::UnknownProperty(name)) if name == "nope"
        ));
        // A `no` prefix on an unknown name reports the name as typed.
        assert!(matches!(
            parse_set_option("nonope"),
            Err(CommandError::UnknownProperty(name)) if name == "nonope"
        ));
    }

    #[test]
    fn empty_name_rejected() {
        assert!(matches!(parse_set_option("=5"), Err(CommandError::Parse(_))));
    }

    #[test]
    fn deterministic() {
        let a = parse_set_option("hintchars=qwerty").unwrap();
        let b = parse_set_option("hintchars=qwerty").unwrap();
        assert_eq!(a, b);
    }
}
