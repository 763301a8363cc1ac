/// A single modal notice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

/// Blocking modal notification state.
///
/// Only one notice exists at a time; showing a new one replaces the old.
pub struct NotificationState {
    current: Option<Notice>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self { current: None }
    }

    pub fn show(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.current = Some(Notice {
            title: title.into(),
            message: message.into(),
        });
    }

    pub fn dismiss(&mut self) {
        self.current = None;
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}

impl Default for NotificationState {
    fn default() -> Self {
        Self::new()
    }
}
