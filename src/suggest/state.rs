//! Suggestion fetch state
//!
//! Tracks the result list and the in-flight request. Every request carries a
//! monotonically increasing id; only the response matching the outstanding id
//! may update visible state, so a superseded fetch can never clobber a newer
//! one. Starting a new request also cancels the previous HTTP future through
//! its token; best effort, the id filter is what guarantees correctness.

use tokio_util::sync::CancellationToken;

use super::restaurant::Restaurant;

/// Suggestion list and fetch bookkeeping
pub struct SuggestState {
    /// Current result list, wholly replaced on each successful fetch
    pub restaurants: Vec<Restaurant>,
    /// Selected row in the results pane
    pub selected: usize,
    /// Whether a fetch is outstanding (disables the trigger)
    pub loading: bool,
    /// Message of the last failed fetch, cleared when a new one starts
    pub error: Option<String>,
    /// Monotonically increasing request id
    request_id: u64,
    /// Id of the outstanding request, if any
    in_flight_request_id: Option<u64>,
    /// Token cancelling the outstanding request's HTTP future
    cancel_token: Option<CancellationToken>,
}

impl SuggestState {
    pub fn new() -> Self {
        Self {
            restaurants: Vec::new(),
            selected: 0,
            loading: false,
            error: None,
            request_id: 0,
            in_flight_request_id: None,
            cancel_token: None,
        }
    }

    /// Named transition: start-fetch.
    ///
    /// Cancels any in-flight request, bumps the id, and hands back the id and
    /// cancellation token to attach to the worker request.
    pub fn start_request(&mut self) -> (u64, CancellationToken) {
        if let Some(token) = self.cancel_token.take() {
            log::debug!("cancelling superseded request {:?}", self.in_flight_request_id);
            token.cancel();
        }

        self.error = None;
        self.loading = true;
        self.request_id = self.request_id.wrapping_add(1);
        self.in_flight_request_id = Some(self.request_id);

        let token = CancellationToken::new();
        self.cancel_token = Some(token.clone());
        (self.request_id, token)
    }

    /// Named transition: receive-results. The list is replaced wholesale;
    /// there are no merge or append semantics.
    pub fn receive_results(&mut self, restaurants: Vec<Restaurant>) {
        self.restaurants = restaurants;
        self.selected = 0;
        self.finish_request();
    }

    /// Named transition: receive-error. The prior list stays visible.
    pub fn receive_error(&mut self, message: String) {
        self.error = Some(message);
        self.finish_request();
    }

    fn finish_request(&mut self) {
        self.loading = false;
        self.in_flight_request_id = None;
        self.cancel_token = None;
    }

    /// Whether a response id matches the outstanding request
    pub fn is_current(&self, request_id: u64) -> bool {
        self.in_flight_request_id == Some(request_id)
    }

    pub fn has_in_flight_request(&self) -> bool {
        self.in_flight_request_id.is_some()
    }

    /// Current request id (used by tests to check monotonicity)
    pub fn current_request_id(&self) -> u64 {
        self.request_id
    }

    pub fn selected_restaurant(&self) -> Option<&Restaurant> {
        self.restaurants.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if !self.restaurants.is_empty() && self.selected + 1 < self.restaurants.len() {
            self.selected += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

impl Default for SuggestState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
