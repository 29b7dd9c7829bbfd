//! Keyword highlighting shared by the source and generated-code panes
//!
//! A character-level splitter, not a lexer: words are matched against a
//! keyword list, digit runs are numbers, `"..."` spans are strings and a word
//! directly followed by `(` is treated as a call.

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

/// Words highlighted in ye/bol source
pub const SCRIPT_KEYWORDS: [&str; 13] = [
    "ye", "bol", "agar", "warna", "jabtak", "switch", "case", "default", "array", "file", "end",
    "read", "write",
];

/// Words highlighted in generated Go
pub const GO_KEYWORDS: [&str; 11] = [
    "package", "import", "func", "const", "var", "if", "else", "for", "switch", "case", "default",
];

/// Border style for a pane, brighter when focused
pub fn border_style(is_focused: bool) -> Style {
    if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    }
}

/// Split `line` into styled spans
pub fn highlight_line(line: &str, keywords: &[&str]) -> Line<'static> {
    let mut spans = Vec::new();
    let mut current_word = String::new();
    let chars: Vec<char> = line.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c == '"' {
            flush_word(&mut spans, &mut current_word, keywords, false);
            let mut end = i + 1;
            while end < chars.len() && chars[end] != '"' {
                end += if chars[end] == '\\' { 2 } else { 1 };
            }
            let end = (end + 1).min(chars.len());
            spans.push(Span::styled(
                chars[i..end].iter().collect::<String>(),
                Style::default().fg(DEFAULT_THEME.string),
            ));
            i = end;
            continue;
        }

        if !c.is_alphanumeric() && c != '_' {
            flush_word(&mut spans, &mut current_word, keywords, c == '(');

            let style = match c {
                '{' | '}' | '(' | ')' | '[' | ']' => Style::default().fg(DEFAULT_THEME.primary),
                _ => Style::default().fg(DEFAULT_THEME.fg),
            };
            spans.push(Span::styled(c.to_string(), style));
            i += 1;
            continue;
        }

        current_word.push(c);
        i += 1;
    }

    flush_word(&mut spans, &mut current_word, keywords, false);
    Line::from(spans)
}

fn flush_word(
    spans: &mut Vec<Span<'static>>,
    word: &mut String,
    keywords: &[&str],
    is_call: bool,
) {
    if word.is_empty() {
        return;
    }
    let style = word_style(word, keywords, is_call);
    spans.push(Span::styled(std::mem::take(word), style));
}

fn word_style(word: &str, keywords: &[&str], is_call: bool) -> Style {
    if keywords.contains(&word) {
        Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD)
    } else if word.chars().all(|c| c.is_ascii_digit()) {
        Style::default().fg(DEFAULT_THEME.number)
    } else if is_call {
        Style::default().fg(DEFAULT_THEME.function)
    } else {
        Style::default().fg(DEFAULT_THEME.fg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spans_cover_line() {
        let line = highlight_line("fmt.Println(\"hi\") // ok", &GO_KEYWORDS);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "fmt.Println(\"hi\") // ok");
    }

    #[test]
    fn test_keyword_is_bold() {
        let line = highlight_line("agar x", &SCRIPT_KEYWORDS);
        assert_eq!(line.spans[0].content, "agar");
        assert!(line.spans[0].style.add_modifier.contains(Modifier::BOLD));
        assert!(!line.spans[2].style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_unterminated_string() {
        let line = highlight_line("bol \"open", &SCRIPT_KEYWORDS);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "bol \"open");
    }
}
