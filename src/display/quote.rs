//! Renders a quote as a bordered, centered text block.

use unicode_width::UnicodeWidthStr;

use super::{INDENT, theme};
use crate::catalog::Quote;

/// Maximum width of a wrapped quote line, in display columns.
const MAX_LINE_WIDTH: usize = 50;

/// Format `quote` as a box: word-wrapped text, then the author line,
/// all centered and framed with line-drawing characters. Pure string
/// building; the author line carries the only styling.
pub fn format_quote(quote: &Quote) -> String {
    let lines = wrap_words(quote.text, MAX_LINE_WIDTH);
    let longest = lines.iter().map(|line| line.width()).max().unwrap_or(0);
    let box_width = longest + 6;

    // Border spans the same total width as the content rows.
    let border: String = "─".repeat(box_width + 2);

    let mut out = format!("{INDENT}╭{border}╮\n");
    for line in &lines {
        let (left, right) = center_padding(line.width(), box_width);
        out.push_str(&format!(
            "{INDENT}│ {}{line}{} │\n",
            " ".repeat(left),
            " ".repeat(right)
        ));
    }

    let author = format!("- {}", quote.author);
    let (left, right) = center_padding(author.width(), box_width);
    out.push_str(&format!(
        "{INDENT}│ {}{}{} │\n",
        " ".repeat(left),
        theme::author().apply(&author),
        " ".repeat(right)
    ));
    out.push_str(&format!("{INDENT}╰{border}╯\n"));
    out
}

/// Split padding for centering `content_width` inside `box_width`,
/// with the odd leftover column going to the right.
fn center_padding(content_width: usize, box_width: usize) -> (usize, usize) {
    let total = box_width.saturating_sub(content_width);
    (total / 2, total - total / 2)
}

/// Greedy word wrap. A word wider than `max_width` still gets its own
/// line; nothing is truncated mid-word.
fn wrap_words(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if !current.is_empty() && current.width() + 1 + word.width() > max_width {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::QUOTES;

    /// Drop `ESC [ ... m` sequences so display width can be measured.
    fn strip_ansi(s: &str) -> String {
        let mut out = String::new();
        let mut chars = s.chars();
        while let Some(c) = chars.next() {
            if c == '\x1b' {
                for c in chars.by_ref() {
                    if c == 'm' {
                        break;
                    }
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    #[test]
    fn every_line_has_the_same_width() {
        for quote in QUOTES {
            let plain = strip_ansi(&format_quote(quote));
            let widths: Vec<usize> = plain.lines().map(UnicodeWidthStr::width).collect();
            assert!(!widths.is_empty());
            assert!(
                widths.iter().all(|w| *w == widths[0]),
                "uneven box for {:?}: {widths:?}",
                quote.author
            );
        }
    }

    #[test]
    fn wraps_at_the_limit() {
        let lines = wrap_words(
            "Life is not measured by the breaths we take, but by the moments that take our breath away.",
            MAX_LINE_WIDTH,
        );
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line.width() <= MAX_LINE_WIDTH, "too wide: {line:?}");
        }
    }

    #[test]
    fn overlong_word_gets_its_own_line() {
        let word = "a".repeat(60);
        let text = format!("breathe {word} out");
        let lines = wrap_words(&text, MAX_LINE_WIDTH);
        assert_eq!(lines, vec!["breathe".to_string(), word, "out".to_string()]);
    }

    #[test]
    fn single_short_quote_is_one_line() {
        assert_eq!(wrap_words("Smile, breathe, and go slowly.", MAX_LINE_WIDTH).len(), 1);
    }

    #[test]
    fn author_centering_is_off_by_at_most_one() {
        let (left, right) = center_padding(7, 20);
        assert!(right - left <= 1);
        assert_eq!(left + right + 7, 20);
        let (left, right) = center_padding(8, 20);
        assert_eq!(left, right);
    }

    #[test]
    fn box_contains_text_and_author() {
        let quote = Quote {
            text: "Peace begins with a smile.",
            author: "Mother Teresa",
        };
        let plain = strip_ansi(&format_quote(&quote));
        assert!(plain.contains("Peace begins with a smile."));
        assert!(plain.contains("- Mother Teresa"));
        assert!(plain.starts_with("    ╭"));
        assert!(plain.trim_end().ends_with('╯'));
    }
}
