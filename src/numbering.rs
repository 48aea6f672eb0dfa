//! Inventory Number Patterns
//!
//! Renders templates such as `{CODE}-{YYYY}-{SEQ:5}` into item numbers.

use std::sync::OnceLock;

use chrono::{DateTime, Datelike, Utc};
use regex::{Captures, Regex};

/// Sequence value shown in the numbering tab preview
pub const PREVIEW_SEQUENCE: u64 = 42;

static TOKEN_RE: OnceLock<Regex> = OnceLock::new();

fn token_regex() -> &'static Regex {
    TOKEN_RE.get_or_init(|| {
        Regex::new(r"\{(?:CODE|YYYY|YY|SEQ:(\d+))\}").expect("token pattern is valid")
    })
}

/// Values substituted into a pattern
#[derive(Debug, Clone, Copy)]
pub struct NumberContext<'a> {
    pub code: &'a str,
    pub seq: u64,
    pub now: DateTime<Utc>,
}

/// Substitute every recognised token in a single pass.
///
/// Unknown or malformed placeholders are left as they are, as is a
/// `{SEQ:n}` whose width does not fit in `usize`.
pub fn render_inventory_number(pattern: &str, ctx: &NumberContext<'_>) -> String {
    let year = ctx.now.year();
    token_regex()
        .replace_all(pattern, |caps: &Captures| -> String {
            match &caps[0] {
                "{CODE}" => ctx.code.to_string(),
                "{YYYY}" => format!("{:04}", year),
                "{YY}" => format!("{:02}", year.rem_euclid(100)),
                token => match seq_width(caps) {
                    Some(width) => format!("{:0>width$}", ctx.seq, width = width),
                    None => token.to_string(),
                },
            }
        })
        .into_owned()
}

fn seq_width(caps: &Captures) -> Option<usize> {
    caps.get(1).and_then(|w| w.as_str().parse::<usize>().ok())
}

/// Recognised tokens in order of appearance
pub fn pattern_tokens(pattern: &str) -> Vec<String> {
    token_regex()
        .captures_iter(pattern)
        .filter(|caps| caps.get(1).is_none() || seq_width(caps).is_some())
        .map(|caps| caps[0].to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn year(y: i32) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(&format!("{:04}-06-15T12:00:00Z", y))
            .unwrap()
            .with_timezone(&Utc)
    }

    fn render(pattern: &str, code: &str, seq: u64, y: i32) -> String {
        render_inventory_number(pattern, &NumberContext { code, seq, now: year(y) })
    }

    #[test]
    fn test_literal_pattern_unchanged() {
        assert_eq!(render("INV-plain text", "LAP", 7, 2025), "INV-plain text");
        assert_eq!(render("", "LAP", 7, 2025), "");
    }

    #[test]
    fn test_seq_padding() {
        assert_eq!(render("{SEQ:5}", "X", 42, 2025), "00042");
        assert_eq!(render("{SEQ:1}", "X", 42, 2025), "42");
    }

    #[test]
    fn test_full_pattern() {
        assert_eq!(render("{CODE}-{YYYY}-{SEQ:3}", "LAP", 7, 2025), "LAP-2025-007");
        assert_eq!(render("{YY}/{CODE}", "CAM", 1, 2009), "09/CAM");
    }

    #[test]
    fn test_seq_overflow_not_truncated() {
        assert_eq!(render("{SEQ:3}", "X", 123456, 2025), "123456");
    }

    #[test]
    fn test_unknown_and_malformed_pass_through() {
        assert_eq!(render("{FOO}-{SEQ:}-{seq:3}", "X", 1, 2025), "{FOO}-{SEQ:}-{seq:3}");
    }

    #[test]
    fn test_wide_seq_is_padded() {
        let out = render("{SEQ:65}", "X", 42, 2025);
        assert_eq!(out.len(), 65);
        assert!(out.ends_with("42"));
        assert!(out[..63].chars().all(|c| c == '0'));
        assert_eq!(render("{SEQ:999}", "X", 1, 2025).len(), 999);
    }

    #[test]
    fn test_width_beyond_usize_passes_through() {
        let token = "{SEQ:99999999999999999999999}";
        assert_eq!(render(token, "X", 1, 2025), token);
        assert!(pattern_tokens(token).is_empty());
    }

    #[test]
    fn test_substituted_text_not_rescanned() {
        assert_eq!(render("{CODE}-{SEQ:2}", "{YYYY}", 3, 2025), "{YYYY}-03");
    }

    #[test]
    fn test_rendering_is_stable() {
        let once = render("{CODE}-{YYYY}-{SEQ:4}", "HR", 12, 2024);
        assert_eq!(render(&once, "HR", 99, 2030), once);
    }

    #[test]
    fn test_pattern_tokens() {
        assert_eq!(
            pattern_tokens("{CODE}-{YY}-{NOPE}-{SEQ:5}"),
            vec!["{CODE}", "{YY}", "{SEQ:5}"]
        );
        assert!(pattern_tokens("plain").is_empty());
    }
}
