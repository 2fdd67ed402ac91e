//! Label text utilities shared by the layout and export stages.
//!
//! Labels pass through two steps before they reach the SVG output:
//!
//! 1. [`trim_label`] collapses whitespace and truncates to a character
//!    budget, marking the cut with an ellipsis.
//! 2. [`wrap_label`] greedily packs the remaining words into a bounded
//!    number of lines.
//!
//! [`escape_xml`] is applied to every piece of user text at emission time.

/// Default character budget applied by [`trim_label`].
pub const DEFAULT_MAX_LABEL_CHARS: usize = 44;

/// Marker appended to truncated labels.
pub const ELLIPSIS: char = '…';

/// Collapses internal whitespace and truncates `text` to `max_chars` characters.
///
/// When truncation happens the result ends with [`ELLIPSIS`] and its character
/// count never exceeds `max_chars` (for any non-zero budget).
///
/// # Examples
///
/// ```
/// use mermaid_lite_core::label::{trim_label, ELLIPSIS};
///
/// assert_eq!(trim_label("  hello \n  world ", 44), "hello world");
///
/// let trimmed = trim_label("a label that is definitely longer than the budget", 20);
/// assert!(trimmed.ends_with(ELLIPSIS));
/// assert!(trimmed.chars().count() <= 20);
/// ```
pub fn trim_label(text: &str, max_chars: usize) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= max_chars {
        return collapsed;
    }

    let mut truncated: String = collapsed
        .chars()
        .take(max_chars.saturating_sub(1))
        .collect();
    truncated.truncate(truncated.trim_end().len());
    truncated.push(ELLIPSIS);
    truncated
}

/// Greedily packs whitespace-delimited words into at most `max_lines` lines.
///
/// A line grows while the next word still fits within `max_chars_per_line`
/// characters. A single word longer than the budget occupies a line on its
/// own and is not split. Words that do not fit once `max_lines` lines are
/// full are dropped.
///
/// # Examples
///
/// ```
/// use mermaid_lite_core::label::wrap_label;
///
/// let lines = wrap_label("validate the incoming request payload", 18, 3);
/// assert_eq!(lines, vec!["validate the", "incoming request", "payload"]);
/// ```
pub fn wrap_label(text: &str, max_chars_per_line: usize, max_lines: usize) -> Vec<String> {
    let mut lines = Vec::new();
    if max_lines == 0 {
        return lines;
    }

    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }

        let candidate_len = current.chars().count() + 1 + word.chars().count();
        if candidate_len <= max_chars_per_line {
            current.push(' ');
            current.push_str(word);
            continue;
        }

        lines.push(std::mem::take(&mut current));
        if lines.len() == max_lines {
            return lines;
        }
        current.push_str(word);
    }

    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Escapes the five XML special characters.
///
/// # Examples
///
/// ```
/// use mermaid_lite_core::label::escape_xml;
///
/// assert_eq!(escape_xml("<script>"), "&lt;script&gt;");
/// assert_eq!(escape_xml(r#"a & "b" 'c'"#), "a &amp; &quot;b&quot; &apos;c&apos;");
/// ```
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
