use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::content::key_bindings;
use crate::widgets::popup::{centered_popup, clear_area};

/// Render the help popup centered over the frame
pub fn render_help(frame: &mut Frame) {
    let bindings = key_bindings();
    let key_width = bindings.iter().map(|(keys, _)| keys.len()).max().unwrap_or(0);

    let lines: Vec<Line> = bindings
        .iter()
        .map(|(keys, action)| {
            Line::from(vec![
                Span::styled(
                    format!(" {keys:key_width$}  "),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(*action),
            ])
        })
        .collect();

    let width = (lines
        .iter()
        .map(Line::width)
        .max()
        .unwrap_or(0) as u16)
        .saturating_add(4);
    let height = lines.len() as u16 + 2;

    let area = centered_popup(frame.area(), width, height);
    clear_area(frame, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
