//! Application controller
//!
//! The screen state is an explicit view-model owned here; every mutation goes
//! through a named transition (toggle-preference, set-location, start-fetch,
//! receive-results, receive-error) so the state machine stays testable
//! without rendering.

mod events;
mod render;
mod state;

// Re-export public types
pub use state::{App, Focus};
