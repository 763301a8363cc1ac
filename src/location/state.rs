use super::provider::Coordinate;

/// Upper bound on typed postal code length
const POSTAL_MAX_LEN: usize = 10;

/// Location pane state
pub struct LocationState {
    /// Last resolved coordinate; survives failed acquisitions
    pub coordinate: Option<Coordinate>,
    /// Whether an acquisition is outstanding (disables the trigger)
    pub loading: bool,
    /// Inline postal code entry
    pub postal: PostalEntry,
    /// Monotonically increasing acquisition id
    request_id: u64,
    /// Id of the outstanding acquisition, if any
    in_flight_request_id: Option<u64>,
}

impl LocationState {
    pub fn new() -> Self {
        Self {
            coordinate: None,
            loading: false,
            postal: PostalEntry::new(),
            request_id: 0,
            in_flight_request_id: None,
        }
    }

    pub fn has_coordinate(&self) -> bool {
        self.coordinate.is_some()
    }

    /// Begin an acquisition: bump the id and mark the trigger busy.
    /// Returns the id to attach to the worker request.
    pub fn start_request(&mut self) -> u64 {
        self.loading = true;
        self.request_id = self.request_id.wrapping_add(1);
        self.in_flight_request_id = Some(self.request_id);
        self.request_id
    }

    /// Named transition: set-location. Replaces the coordinate wholesale.
    pub fn set_coordinate(&mut self, coordinate: Coordinate) {
        self.coordinate = Some(coordinate);
        self.loading = false;
        self.in_flight_request_id = None;
    }

    /// Acquisition failed; the prior coordinate is left untouched.
    pub fn fail_request(&mut self) {
        self.loading = false;
        self.in_flight_request_id = None;
    }

    /// Whether a response id matches the outstanding acquisition
    pub fn is_current(&self, request_id: u64) -> bool {
        self.in_flight_request_id == Some(request_id)
    }
}

impl Default for LocationState {
    fn default() -> Self {
        Self::new()
    }
}

/// Inline postal code entry. Resolution is stubbed: submitting never yields
/// a coordinate, only a "coming soon" notice.
pub struct PostalEntry {
    pub active: bool,
    pub code: String,
}

impl PostalEntry {
    pub fn new() -> Self {
        Self {
            active: false,
            code: String::new(),
        }
    }

    pub fn begin(&mut self) {
        self.active = true;
        self.code.clear();
    }

    pub fn cancel(&mut self) {
        self.active = false;
        self.code.clear();
    }

    /// Accept a typed character; postal codes are short alphanumerics
    pub fn push_char(&mut self, c: char) {
        if !self.active || self.code.len() >= POSTAL_MAX_LEN {
            return;
        }
        if c.is_ascii_alphanumeric() || c == ' ' || c == '-' {
            self.code.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.code.pop();
    }

    /// End the entry and hand back the typed code
    pub fn take(&mut self) -> String {
        self.active = false;
        std::mem::take(&mut self.code)
    }
}

impl Default for PostalEntry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
