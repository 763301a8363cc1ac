//! Dietary preference state
//!
//! Holds the free-text preference line and the quick-select chip row. The
//! text is the single source of truth: chips derive their active state from
//! it, and toggling a chip rewrites it.

mod state;

pub use state::{PrefsState, QUICK_PREFS, is_preference_active, toggle_preference};
