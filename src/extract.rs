//! Line-level key extraction.
//!
//! Two independent rules, both applied to a single physical line of already
//! decoded text: one for `.strings` declarations, one for
//! `NSLocalizedString`-style calls in source code. No grammar parsing; the
//! input formats are line-granular by convention.

use std::sync::LazyLock;

use regex::Regex;

// Matches a key declaration: "some.key" = "value";
// Only the key-quote-equals prefix matters; the rest of the line is ignored.
static TABLE_KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^\s*"(.*?)"\s*="#).unwrap());

// Matches the first string argument of NSLocalizedString-style calls,
// including the FromTable/WithDefaultValue variants. Lazy `.*?` so a line
// with several calls yields a match per call.
static CODE_KEY_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"NSLocalizedString.*?\(\s?@?"(.*?)","#).unwrap());

/// True if the line, ignoring surrounding whitespace, is a `//` comment.
/// Such lines are skipped entirely before either extraction rule runs.
pub fn is_comment_line(line: &str) -> bool {
    line.trim().starts_with("//")
}

/// Extract the declared key from a `.strings` line, if any.
///
/// A commented-out declaration whose key capture itself starts with `//` or
/// `/*` yields nothing.
pub fn extract_table_key(line: &str) -> Option<&str> {
    let captures = TABLE_KEY_REGEX.captures(line)?;
    let key = captures.get(1)?.as_str();

    if key.starts_with("//") || key.starts_with("/*") {
        return None;
    }

    Some(key)
}

/// Extract every localization key referenced on a source line.
pub fn extract_code_keys(line: &str) -> Vec<&str> {
    CODE_KEY_REGEX
        .captures_iter(line)
        .filter_map(|captures| captures.get(1))
        .map(|m| m.as_str())
        .collect()
}
