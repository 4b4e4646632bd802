//! Small helpers shared across the crate.

/// Create a regex that never matches anything.
///
/// Built-in patterns fall back to this when they fail to compile, so a broken
/// pattern degrades to "no match" instead of a panic.
///
/// # Panics
///
/// Panics if the fallback regex pattern `r"^\b$"` fails to compile, which
/// should never happen.
#[must_use]
pub fn never_matching_regex() -> regex::Regex {
  regex::Regex::new(r"[^\s\S]").unwrap_or_else(|_| {
    #[allow(clippy::unwrap_used, reason = "Pattern is a valid literal")]
    regex::Regex::new(r"^\b$").unwrap()
  })
}

/// Compile a pattern with multi-line mode enabled, so `^` and `$` match at
/// line boundaries the way placeholder and heading patterns expect. Both `\n`
/// and `\r\n` end a line, and `.` never matches `\r`.
///
/// # Errors
///
/// Returns an error if `pattern` is not a valid regular expression.
pub fn multiline_regex(pattern: &str) -> Result<regex::Regex, regex::Error> {
  regex::RegexBuilder::new(pattern)
    .multi_line(true)
    .crlf(true)
    .build()
}
