//! Generated Go pane
//!
//! Shows the translation of the whole script. The lines produced by the
//! statement about to run are highlighted; the view follows them unless the
//! user has scrolled this pane manually.

use super::highlight::{border_style, highlight_line, GO_KEYWORDS};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use std::ops::Range;

/// Render the generated Go pane.
///
/// `highlighted` is a range of zero-based line indices into `generated_code`.
pub fn render_generated_pane(
    frame: &mut Frame,
    area: Rect,
    generated_code: &str,
    highlighted: Option<Range<usize>>,
    is_focused: bool,
    scroll_offset: &mut usize,
    follow_current: bool,
) {
    let block = Block::default()
        .title(" Generated Go ")
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    let lines: Vec<&str> = generated_code.lines().collect();
    if lines.is_empty() {
        let paragraph = Paragraph::new("(nothing generated)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    if follow_current {
        if let Some(range) = &highlighted {
            // Keep the whole range on screen when it fits
            if range.start < *scroll_offset {
                *scroll_offset = range.start;
            } else if range.end > *scroll_offset + visible_height {
                *scroll_offset = range.end.saturating_sub(visible_height).min(range.start);
            }
        }
    }
    *scroll_offset = (*scroll_offset).min(lines.len().saturating_sub(visible_height));

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let is_current = highlighted.as_ref().is_some_and(|r| r.contains(&idx));
            let marker = if is_current {
                Span::styled(
                    "▶ ",
                    Style::default()
                        .fg(DEFAULT_THEME.secondary)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                Span::raw("  ")
            };

            // Tabs render as a single cell otherwise
            let expanded = line.replace('\t', "    ");
            let mut content = highlight_line(&expanded, &GO_KEYWORDS);
            if is_current {
                let current_bg = Style::default().bg(DEFAULT_THEME.current_line_bg);
                for span in &mut content.spans {
                    span.style = span.style.patch(current_bg);
                }
            }

            let mut spans = vec![marker];
            spans.extend(content.spans);
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(visible_lines).block(block), area);
}
