use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::state::Notice;
use crate::widgets::popup::{centered_popup, clear_area};

/// Width of the notice popup, clamped to the frame
const NOTICE_WIDTH: u16 = 52;

/// Render the blocking modal notice centered over the whole frame
pub fn render_notification(frame: &mut Frame, notice: &Notice) {
    let frame_area = frame.area();

    let width = NOTICE_WIDTH.min(frame_area.width.saturating_sub(4)).max(20);
    let inner_width = width.saturating_sub(2) as usize;

    // Rough wrapped-line count to size the popup height
    let message_lines: usize = notice
        .message
        .lines()
        .map(|line| line.chars().count().div_ceil(inner_width.max(1)).max(1))
        .sum();
    let height = (message_lines as u16 + 4).min(frame_area.height.saturating_sub(2));

    let area = centered_popup(frame_area, width, height);
    clear_area(frame, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", notice.title))
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .title_bottom(Line::from(" Enter to dismiss ").right_aligned())
        .border_style(Style::default().fg(Color::Yellow));

    let body = Paragraph::new(notice.message.as_str())
        .block(block)
        .wrap(Wrap { trim: false })
        .style(Style::default().fg(Color::White));

    frame.render_widget(body, area);
}
