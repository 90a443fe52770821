//! Display-width aware padding and wrapping for fixed-width tables.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Count the display width of a string, accounting for wide Unicode characters
pub(crate) fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Left-justify `s` in `width` columns.
pub(crate) fn pad_right(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(display_width(s));
    format!("{}{}", s, " ".repeat(padding))
}

/// Right-justify `s` in `width` columns.
pub(crate) fn pad_left(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(display_width(s));
    format!("{}{}", " ".repeat(padding), s)
}

/// The longest prefix of `s` that fits in `width` columns.
pub(crate) fn truncate(s: &str, width: usize) -> &str {
    let mut current = 0;
    for (i, c) in s.char_indices() {
        let c_width = UnicodeWidthChar::width(c).unwrap_or(0);
        if current + c_width > width {
            return &s[..i];
        }
        current += c_width;
    }
    s
}

/// Greedy word wrap to `width` columns. Words wider than a line are split.
pub(crate) fn wrap(s: &str, width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    if width == 0 {
        return lines;
    }
    let mut line = String::new();
    for word in s.split_whitespace() {
        let mut word = word;
        loop {
            let line_width = display_width(&line);
            let sep = if line.is_empty() { 0 } else { 1 };
            if line_width + sep + display_width(word) <= width {
                if sep == 1 {
                    line.push(' ');
                }
                line.push_str(word);
                break;
            }
            if !line.is_empty() {
                lines.push(std::mem::take(&mut line));
                continue;
            }
            // The word alone is too wide for a line.
            let head = truncate(word, width);
            let head = if head.is_empty() {
                // a single character wider than the whole line
                let end = word.chars().next().map_or(word.len(), char::len_utf8);
                &word[..end]
            } else {
                head
            };
            lines.push(head.to_string());
            word = &word[head.len()..];
            if word.is_empty() {
                break;
            }
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}
