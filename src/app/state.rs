use std::sync::mpsc::{Receiver, Sender};

use crate::config::Config;
use crate::help::HelpState;
use crate::location::{Coordinate, LocationState};
use crate::maps;
use crate::notification::NotificationState;
use crate::prefs::PrefsState;
use crate::suggest::{SuggestState, build_prompt};
use crate::worker::{WorkerRequest, WorkerResponse};

/// Which pane has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Preferences,
    QuickSelect,
    Location,
    Results,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Preferences => Focus::QuickSelect,
            Focus::QuickSelect => Focus::Location,
            Focus::Location => Focus::Results,
            Focus::Results => Focus::Preferences,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Focus::Preferences => Focus::Results,
            Focus::QuickSelect => Focus::Preferences,
            Focus::Location => Focus::QuickSelect,
            Focus::Results => Focus::Location,
        }
    }
}

/// Application state
pub struct App {
    pub focus: Focus,
    pub prefs: PrefsState,
    pub location: LocationState,
    pub suggest: SuggestState,
    pub notification: NotificationState,
    pub help: HelpState,
    pub results_scroll: u16,
    pub results_viewport_height: u16,
    pub should_quit: bool,
    /// Whether an API key was available at startup (status line hint)
    pub configured: bool,
    model: String,
    request_tx: Option<Sender<WorkerRequest>>,
    response_rx: Option<Receiver<WorkerResponse>>,
}

impl App {
    /// Create a new App instance from loaded configuration
    pub fn new(config: &Config) -> Self {
        let mut prefs = PrefsState::new();
        prefs.set_focused(true);

        Self {
            focus: Focus::Preferences,
            prefs,
            location: LocationState::new(),
            suggest: SuggestState::new(),
            notification: NotificationState::new(),
            help: HelpState::new(),
            results_scroll: 0,
            results_viewport_height: 0, // Set during first render
            should_quit: false,
            configured: config
                .api
                .key
                .as_ref()
                .is_some_and(|k| !k.trim().is_empty()),
            model: config.api.model.clone(),
            request_tx: None,
            response_rx: None,
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Set the channel handles for communication with the worker thread
    pub fn set_channels(
        &mut self,
        request_tx: Sender<WorkerRequest>,
        response_rx: Receiver<WorkerResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    /// Move focus to the given pane, cleaning up pane-local entry state
    pub fn set_focus(&mut self, focus: Focus) {
        if self.focus == Focus::Location && focus != Focus::Location {
            self.location.postal.cancel();
        }
        self.focus = focus;
        self.prefs.set_focused(focus == Focus::Preferences);
    }

    pub fn focus_next(&mut self) {
        self.set_focus(self.focus.next());
    }

    pub fn focus_previous(&mut self) {
        self.set_focus(self.focus.previous());
    }

    /// Named transition: set-location (also used for the CLI preset)
    pub fn set_location(&mut self, coordinate: Coordinate) {
        self.location.set_coordinate(coordinate);
    }

    /// Kick off a one-shot location read.
    ///
    /// The trigger is disabled while a read is outstanding; that is the only
    /// guard against double-taps.
    pub fn acquire_location(&mut self) {
        if self.location.loading {
            return;
        }

        let request_id = self.location.start_request();
        if !self.send_request(WorkerRequest::Locate { request_id }) {
            self.location.fail_request();
            self.notification.show("Error", "Failed to get location");
        }
    }

    /// Kick off a restaurant search.
    ///
    /// Preconditions are checked client-side before any network call: the
    /// preference text must be non-empty and a coordinate must be resolved.
    pub fn start_search(&mut self) {
        if self.suggest.loading {
            return;
        }
        if self.prefs.is_empty() {
            self.notification
                .show("Missing info", "Please enter your dietary preferences");
            return;
        }
        let Some(coordinate) = self.location.coordinate else {
            self.notification
                .show("Missing location", "Please get your location first");
            return;
        };

        let prompt = build_prompt(coordinate.latitude, coordinate.longitude, self.prefs.text());
        log::debug!("prompt built ({} chars)", prompt.len());

        let (request_id, cancel) = self.suggest.start_request();
        log::debug!("search request {request_id} queued");

        if !self.send_request(WorkerRequest::Search {
            prompt,
            request_id,
            cancel,
        }) {
            self.suggest.receive_error("worker unavailable".to_string());
            self.notification
                .show("Error", "Failed to find restaurants: worker unavailable");
        }
    }

    /// Pull-to-refresh analog: re-run the search, silently skipping when the
    /// preconditions are not met
    pub fn refresh(&mut self) {
        if self.prefs.is_empty() || !self.location.has_coordinate() {
            return;
        }
        self.start_search();
    }

    /// Submit the typed postal code. Resolution is stubbed: this never
    /// produces a coordinate.
    pub fn submit_postal_code(&mut self) {
        let code = self.location.postal.take();
        if code.trim().is_empty() {
            return;
        }
        log::debug!("postal code lookup requested for {code:?}");
        self.notification.show(
            "Coming soon",
            "Postal code lookup is not available yet. Use location detection instead.",
        );
    }

    /// Open the selected restaurant in the external map application
    pub fn open_selected_in_maps(&self) {
        if let Some(restaurant) = self.suggest.selected_restaurant() {
            maps::open_in_maps(restaurant);
        }
    }

    fn send_request(&self, request: WorkerRequest) -> bool {
        self.request_tx
            .as_ref()
            .is_some_and(|tx| tx.send(request).is_ok())
    }

    /// Drain worker responses. Called once per tick from the main loop.
    pub fn poll_worker(&mut self) {
        let mut responses = Vec::new();
        if let Some(rx) = &self.response_rx {
            while let Ok(response) = rx.try_recv() {
                responses.push(response);
            }
        }
        for response in responses {
            self.apply_worker_response(response);
        }
    }

    /// Apply one worker response, dropping anything stale.
    ///
    /// Only the response matching the latest outstanding request id for its
    /// kind may touch visible state.
    pub(crate) fn apply_worker_response(&mut self, response: WorkerResponse) {
        match response {
            WorkerResponse::Position {
                coordinate,
                request_id,
            } => {
                if !self.location.is_current(request_id) {
                    log::debug!("dropping stale position response {request_id}");
                    return;
                }
                self.set_location(coordinate);
                self.notification.show(
                    "Location found!",
                    format!(
                        "Lat: {:.4}, Lng: {:.4}",
                        coordinate.latitude, coordinate.longitude
                    ),
                );
            }
            WorkerResponse::PositionFailed {
                message,
                request_id,
            } => {
                if !self.location.is_current(request_id) {
                    log::debug!("dropping stale position failure {request_id}");
                    return;
                }
                log::warn!("location acquisition failed: {message}");
                self.location.fail_request();
                self.notification.show("Error", "Failed to get location");
            }
            WorkerResponse::Restaurants {
                restaurants,
                request_id,
            } => {
                if !self.suggest.is_current(request_id) {
                    log::debug!("dropping stale search response {request_id}");
                    return;
                }
                let count = restaurants.len();
                self.suggest.receive_results(restaurants);
                self.results_scroll = 0;
                self.notification
                    .show("Success!", format!("Found {count} restaurants"));
            }
            WorkerResponse::SearchFailed {
                message,
                request_id,
            } => {
                if !self.suggest.is_current(request_id) {
                    log::debug!("dropping stale search failure {request_id}");
                    return;
                }
                self.suggest.receive_error(message.clone());
                self.notification
                    .show("Error", format!("Failed to find restaurants: {message}"));
            }
            WorkerResponse::Cancelled { request_id } => {
                // Superseded request; the newer one owns the state now
                log::debug!("search request {request_id} confirmed cancelled");
            }
        }
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;
