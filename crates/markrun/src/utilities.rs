//! Utility functions for run assembly.

use markrun_core::{LINE_SEPARATOR, PREFIX_SEPARATOR};

/// Replace embedded newlines with line separators
///
/// Leading and trailing newlines are dropped so a block's own terminating
/// newline does not turn into an extra line.
pub fn replace_newlines_with_line_separators(text: &str) -> String {
    let trimmed = text.trim_matches(|c| c == '\n' || c == '\r');
    let mut result = String::with_capacity(trimmed.len());
    let mut chars = trimmed.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                result.push_str(LINE_SEPARATOR);
            }
            '\n' => result.push_str(LINE_SEPARATOR),
            _ => result.push(c),
        }
    }

    result
}

/// Text of a list item prefix run
pub fn prefix_text(prefix: &str) -> String {
    format!("{}{}", prefix, PREFIX_SEPARATOR)
}
