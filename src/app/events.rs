use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io;

use super::state::{App, Focus};
use crate::prefs::QUICK_PREFS;

impl App {
    /// Handle events and update application state
    pub fn handle_events(&mut self) -> io::Result<()> {
        match event::read()? {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event);
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle key press events
    pub(crate) fn handle_key_event(&mut self, key: KeyEvent) {
        // Blocking modal notice: swallow everything except dismissal
        if self.notification.is_visible() {
            if matches!(
                key.code,
                KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') | KeyCode::Char('q')
            ) {
                self.notification.dismiss();
            }
            return;
        }

        // Help popup blocks other keys while visible
        if self.help.visible {
            match key.code {
                KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?') | KeyCode::Char('q') => {
                    self.help.close();
                }
                _ => {}
            }
            return;
        }

        // Ctrl+C: exit application, even mid postal entry
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        // Postal entry captures typing while active
        if self.focus == Focus::Location && self.location.postal.active {
            self.handle_postal_key(key);
            return;
        }

        if self.handle_global_keys(key) {
            return;
        }

        match self.focus {
            Focus::Preferences => self.handle_preferences_key(key),
            Focus::QuickSelect => self.handle_quick_select_key(key),
            Focus::Location => self.handle_location_key(key),
            Focus::Results => self.handle_results_key(key),
        }
    }

    /// Handle global keys that work regardless of focus
    /// Returns true if key was handled, false otherwise
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::F(1) => {
                self.help.toggle();
                true
            }
            KeyCode::Tab => {
                self.focus_next();
                true
            }
            KeyCode::BackTab => {
                self.focus_previous();
                true
            }
            // 'q' and '?' act globally except while typing preferences
            KeyCode::Char('q') if self.focus != Focus::Preferences => {
                self.should_quit = true;
                true
            }
            KeyCode::Char('?') if self.focus != Focus::Preferences => {
                self.help.toggle();
                true
            }
            _ => false,
        }
    }

    /// Keys while the preference entry is focused: Enter searches, the rest
    /// goes to the textarea
    fn handle_preferences_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.start_search(),
            KeyCode::Esc => {}
            _ => {
                self.prefs.textarea.input(key);
            }
        }
    }

    fn handle_quick_select_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.prefs.chip_previous(),
            KeyCode::Right | KeyCode::Char('l') => self.prefs.chip_next(),
            KeyCode::Enter | KeyCode::Char(' ') => self.prefs.activate_chip(),
            KeyCode::Char('c') => self.prefs.clear(),
            KeyCode::Char('s') => self.start_search(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let slot = c.to_digit(10).map(|d| d as usize).unwrap_or(0);
                if (1..=QUICK_PREFS.len()).contains(&slot) {
                    self.prefs.toggle(QUICK_PREFS[slot - 1]);
                }
            }
            _ => {}
        }
    }

    fn handle_location_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char('g') => self.acquire_location(),
            KeyCode::Char('p') => self.location.postal.begin(),
            KeyCode::Char('s') => self.start_search(),
            _ => {}
        }
    }

    /// Keys while the postal entry is active
    fn handle_postal_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.location.postal.cancel(),
            KeyCode::Enter => self.submit_postal_code(),
            KeyCode::Backspace => self.location.postal.backspace(),
            KeyCode::Tab => {
                self.location.postal.cancel();
                self.focus_next();
            }
            KeyCode::BackTab => {
                self.location.postal.cancel();
                self.focus_previous();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.location.postal.push_char(c);
            }
            _ => {}
        }
    }

    fn handle_results_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => self.suggest.select_next(),
            KeyCode::Up | KeyCode::Char('k') => self.suggest.select_previous(),
            KeyCode::Enter | KeyCode::Char('o') => self.open_selected_in_maps(),
            KeyCode::Char('r') => self.refresh(),
            KeyCode::Char('s') => self.start_search(),
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "events_tests.rs"]
mod events_tests;
