//! Statement splitting.

const COMMENT_MARKER: &str = "%%";

/// Splits diagram source into trimmed, non-empty, non-comment statements.
///
/// Lines are split first, then each line on `;`. Statements borrow from
/// `source`.
pub(crate) fn split_statements(source: &str) -> Vec<&str> {
    source
        .lines()
        .flat_map(|line| line.split(';'))
        .map(str::trim)
        .filter(|statement| !statement.is_empty() && !statement.starts_with(COMMENT_MARKER))
        .collect()
}

/// Returns the first whitespace-delimited word of a statement.
pub(crate) fn first_word(statement: &str) -> &str {
    statement.split_whitespace().next().unwrap_or("")
}
