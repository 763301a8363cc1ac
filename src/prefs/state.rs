use ratatui::{
    style::{Color, Style},
    widgets::{Block, Borders},
};
use tui_textarea::TextArea;

/// Quick-select chip labels, in display order
pub const QUICK_PREFS: [&str; 6] = [
    "Vegan",
    "Vegetarian",
    "Gluten-free",
    "Halal",
    "Kosher",
    "Keto",
];

/// Compute the preference string after toggling a label's membership.
///
/// Tokens are the comma-separated pieces of `current`, trimmed, with empties
/// dropped. Membership is case-insensitive. Toggle-off removes every matching
/// token; toggle-on appends the lowercased label. Manually typed duplicates
/// are left alone; only the toggle path deduplicates.
pub fn toggle_preference(current: &str, label: &str) -> String {
    let lower = label.to_lowercase();
    let tokens: Vec<&str> = current
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect();

    if tokens.iter().any(|t| t.to_lowercase() == lower) {
        tokens
            .into_iter()
            .filter(|t| t.to_lowercase() != lower)
            .collect::<Vec<_>>()
            .join(", ")
    } else {
        let mut next: Vec<String> = tokens.into_iter().map(str::to_string).collect();
        next.push(lower);
        let joined = next.join(", ");
        // Strip a leading comma-space artifact, should one ever appear
        match joined.strip_prefix(',') {
            Some(rest) => rest.trim_start().to_string(),
            None => joined,
        }
    }
}

/// Whether a label is currently part of the preference string
pub fn is_preference_active(current: &str, label: &str) -> bool {
    let lower = label.to_lowercase();
    current
        .split(',')
        .map(|t| t.trim().to_lowercase())
        .any(|t| t == lower)
}

/// Preference entry state: the text line plus the chip cursor
pub struct PrefsState {
    pub textarea: TextArea<'static>,
    /// Highlighted chip in the quick-select row; `QUICK_PREFS.len()` is Clear
    pub chip_cursor: usize,
}

impl PrefsState {
    pub fn new() -> Self {
        let mut textarea = TextArea::default();

        textarea.set_placeholder_text("e.g., vegan, gluten-free, halal, keto, vegetarian...");
        textarea.set_cursor_line_style(Style::default());

        let mut state = Self {
            textarea,
            chip_cursor: 0,
        };
        state.set_focused(false);
        state
    }

    /// The raw preference text (single line)
    pub fn text(&self) -> &str {
        self.textarea.lines()[0].as_ref()
    }

    /// True when the text is blank, which blocks a search
    pub fn is_empty(&self) -> bool {
        self.text().trim().is_empty()
    }

    /// Replace the whole preference line
    pub fn set_text(&mut self, text: &str) {
        self.textarea.move_cursor(tui_textarea::CursorMove::Head);
        self.textarea.delete_line_by_end();
        self.textarea.insert_str(text);
    }

    /// Named transition: toggle-preference
    pub fn toggle(&mut self, label: &str) {
        let next = toggle_preference(self.text(), label);
        self.set_text(&next);
    }

    pub fn is_active(&self, label: &str) -> bool {
        is_preference_active(self.text(), label)
    }

    pub fn clear(&mut self) {
        self.set_text("");
    }

    /// Restyle the entry border to reflect focus
    pub fn set_focused(&mut self, focused: bool) {
        let border = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        self.textarea.set_block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Dietary preferences ")
                .border_style(border),
        );
    }

    /// Move the chip cursor left, saturating at the first chip
    pub fn chip_previous(&mut self) {
        self.chip_cursor = self.chip_cursor.saturating_sub(1);
    }

    /// Move the chip cursor right, saturating at the Clear chip
    pub fn chip_next(&mut self) {
        if self.chip_cursor < QUICK_PREFS.len() {
            self.chip_cursor += 1;
        }
    }

    /// Activate the chip under the cursor: a label toggle, or Clear
    pub fn activate_chip(&mut self) {
        if self.chip_cursor < QUICK_PREFS.len() {
            self.toggle(QUICK_PREFS[self.chip_cursor]);
        } else {
            self.clear();
        }
    }
}

impl Default for PrefsState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
