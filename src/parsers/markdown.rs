use std::sync::LazyLock;

use regex::Regex;

static HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#[ \t]+(.+)$").expect("heading pattern is valid"));

/// Text of the first level-1 heading (`# Title`), trimmed
///
/// Returns `None` when there is no heading or its text is blank.
pub fn first_heading(body: &str) -> Option<String> {
    let caps = HEADING_RE.captures(body)?;
    let title = caps.get(1)?.as_str().trim();
    if title.is_empty() { None } else { Some(title.to_string()) }
}
