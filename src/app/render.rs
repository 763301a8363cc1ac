use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::state::{App, Focus};
use crate::help::render_help;
use crate::notification::render_notification;
use crate::prefs::QUICK_PREFS;

/// Rendered lines per restaurant card (name, address, description, gap)
const CARD_HEIGHT: u16 = 4;

impl App {
    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(3), // preference entry
            Constraint::Length(3), // quick-select chips
            Constraint::Length(3), // location bar
            Constraint::Min(4),    // results
            Constraint::Length(1), // status line
        ])
        .split(frame.area());

        self.render_preferences(frame, layout[0]);
        self.render_chips(frame, layout[1]);
        self.render_location(frame, layout[2]);
        self.render_results(frame, layout[3]);
        self.render_status(frame, layout[4]);

        if self.help.visible {
            render_help(frame);
        }
        if let Some(notice) = self.notification.current() {
            render_notification(frame, notice);
        }
    }

    fn render_preferences(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(&self.prefs.textarea, area);
    }

    /// Render the quick-select chip row, truncating with an ellipsis when the
    /// chips outgrow the pane
    fn render_chips(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::QuickSelect;
        let block = pane_block(" Quick select ", focused);
        let inner_width = area.width.saturating_sub(2) as usize;

        let mut spans: Vec<Span> = Vec::new();
        let mut used = 0usize;
        let chip_count = QUICK_PREFS.len() + 1; // labels plus Clear

        for index in 0..chip_count {
            let (text, mut style) = if index < QUICK_PREFS.len() {
                let label = QUICK_PREFS[index];
                let style = if self.prefs.is_active(label) {
                    Style::default().fg(Color::Black).bg(Color::Green)
                } else {
                    Style::default().fg(Color::Gray)
                };
                (format!(" {label} "), style)
            } else {
                (" Clear ".to_string(), Style::default().fg(Color::Red))
            };

            if focused && self.prefs.chip_cursor == index {
                style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
            }

            let chip_width = text.width() + 1;
            if used + chip_width > inner_width {
                spans.push(Span::styled("…", Style::default().fg(Color::DarkGray)));
                break;
            }
            used += chip_width;

            spans.push(Span::styled(text, style));
            spans.push(Span::raw(" "));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }

    fn render_location(&self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::Location;
        let block = pane_block(" Location ", focused);

        let line = if self.location.postal.active {
            Line::from(vec![
                Span::raw("Postal code: "),
                Span::styled(
                    format!("{}▏", self.location.postal.code),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    "  Enter to submit · Esc to cancel",
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        } else if self.location.loading {
            Line::from(Span::styled(
                "Locating…",
                Style::default().fg(Color::Yellow),
            ))
        } else if let Some(coordinate) = self.location.coordinate {
            Line::from(Span::styled(
                format!(
                    "Location found - Lat: {:.4}, Lng: {:.4}",
                    coordinate.latitude, coordinate.longitude
                ),
                Style::default().fg(Color::Green),
            ))
        } else {
            Line::from(Span::styled(
                "No location yet - press g to detect, p for postal code",
                Style::default().fg(Color::DarkGray),
            ))
        };

        frame.render_widget(Paragraph::new(line).block(block), area);
    }

    fn render_results(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self.focus == Focus::Results;
        let title = if self.suggest.loading {
            " Recommended restaurants - searching… "
        } else {
            " Recommended restaurants "
        };
        let block = pane_block(title, focused);

        self.results_viewport_height = area.height.saturating_sub(2);

        let lines = if self.suggest.restaurants.is_empty() {
            self.results_scroll = 0;
            empty_results_lines(self.suggest.loading)
        } else {
            self.clamp_results_scroll();
            self.restaurant_lines()
        };

        let body = Paragraph::new(lines)
            .block(block)
            .scroll((self.results_scroll, 0));
        frame.render_widget(body, area);
    }

    /// Keep the selected card inside the viewport
    fn clamp_results_scroll(&mut self) {
        let viewport = self.results_viewport_height.max(1);
        let card_top = self.suggest.selected as u16 * CARD_HEIGHT;
        let card_bottom = card_top + CARD_HEIGHT - 1; // trailing gap included

        if card_top < self.results_scroll {
            self.results_scroll = card_top;
        } else if card_bottom >= self.results_scroll + viewport {
            self.results_scroll = card_bottom + 1 - viewport;
        }
    }

    fn restaurant_lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        for (index, restaurant) in self.suggest.restaurants.iter().enumerate() {
            let selected = self.focus == Focus::Results && index == self.suggest.selected;
            let background = if selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };

            let mut name_spans = vec![Span::styled(
                restaurant.name.clone(),
                background.add_modifier(Modifier::BOLD),
            )];
            if let Some(rating) = &restaurant.rating {
                name_spans.push(Span::styled(
                    format!("  ★ {rating}"),
                    background.fg(Color::Yellow),
                ));
            }
            lines.push(Line::from(name_spans));

            lines.push(Line::from(Span::styled(
                format!("  {}", restaurant.address),
                background.fg(Color::Gray),
            )));
            lines.push(Line::from(Span::styled(
                format!("  {}", restaurant.description),
                background,
            )));
            lines.push(Line::from(""));
        }

        lines
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let line = if !self.configured {
            Line::from(Span::styled(
                " API key missing - set GEMINI_API_KEY or [api] key in the config file",
                Style::default().fg(Color::Yellow),
            ))
        } else if self.suggest.loading {
            Line::from(Span::styled(
                " Finding great places for you…",
                Style::default().fg(Color::Yellow),
            ))
        } else {
            Line::from(vec![
                Span::styled(
                    " Tab panes · F1 help · q quit",
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("  [{}]", self.model()),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        };

        frame.render_widget(Paragraph::new(line), area);
    }
}

fn pane_block(title: &str, focused: bool) -> Block<'_> {
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(border)
}

fn empty_results_lines(loading: bool) -> Vec<Line<'static>> {
    if loading {
        vec![Line::from(Span::styled(
            "Finding great places for you…",
            Style::default().fg(Color::Yellow),
        ))]
    } else {
        vec![
            Line::from(Span::styled(
                "No results yet",
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(Span::styled(
                "Enter your dietary preferences, detect your location,",
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(
                "then press Enter to find restaurants.",
                Style::default().fg(Color::Gray),
            )),
        ]
    }
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod render_tests;
