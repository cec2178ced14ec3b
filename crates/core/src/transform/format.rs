//! Line-oriented prompt formatting

use once_cell::sync::Lazy;
use regex::Regex;

/// Indent placed in front of every bullet line
const BULLET_INDENT: &str = "  ";

/// A leading integer followed by a period, e.g. `12.`
static ORDERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d+\.").expect("ordered-list pattern is valid"));

/// Normalize the layout of a prompt
///
/// Each line is classified by its trimmed form, first match wins:
/// - ends with `:` -> section header, emitted trimmed and followed by a blank line
/// - starts with `-` or `•` -> bullet, re-indented to two spaces
/// - starts with `N.` -> ordered item, emitted trimmed
/// - anything else passes through untouched
///
/// A header already followed by a blank line does not get a second one,
/// so `format(format(t)) == format(t)`.
pub fn format(text: &str) -> String {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut out: Vec<String> = Vec::with_capacity(lines.len());

    for (idx, line) in lines.iter().enumerate() {
        let trimmed = line.trim();

        if trimmed.ends_with(':') {
            out.push(trimmed.to_string());
            let next_is_blank = lines
                .get(idx + 1)
                .is_some_and(|next| next.trim().is_empty());
            if !next_is_blank {
                out.push(String::new());
            }
        } else if trimmed.starts_with('-') || trimmed.starts_with('•') {
            out.push(format!("{}{}", BULLET_INDENT, trimmed));
        } else if ORDERED_ITEM.is_match(trimmed) {
            out.push(trimmed.to_string());
        } else {
            out.push(line.to_string());
        }
    }

    out.join("\n")
}
