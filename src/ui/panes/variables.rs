//! Variables pane: the demonstration run's table in declaration order

use super::highlight::border_style;
use crate::eval::VariableTable;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the variables pane
pub fn render_variables_pane(
    frame: &mut Frame,
    area: Rect,
    variables: &VariableTable,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = Block::default()
        .title(format!(" Variables ({}) ", variables.len()))
        .borders(Borders::ALL)
        .border_style(border_style(is_focused));

    if variables.is_empty() {
        let paragraph = Paragraph::new("(none declared)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let width = variables.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    *scroll_offset = (*scroll_offset).min(variables.len().saturating_sub(visible_height));

    let items: Vec<ListItem> = variables
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(name, value)| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:width$}", name, width = width),
                    Style::default().fg(DEFAULT_THEME.variable_name),
                ),
                Span::styled(" = ", Style::default().fg(DEFAULT_THEME.comment)),
                Span::styled(value.to_string(), Style::default().fg(DEFAULT_THEME.number)),
            ]))
        })
        .collect();

    let list = List::new(items).block(block.padding(Padding::new(1, 0, 0, 0)));
    frame.render_widget(list, area);
}
