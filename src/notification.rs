//! Notification module for platepal
//!
//! Every failure and every confirmation goes through one blocking modal
//! notice, the terminal analog of the platform alert dialog. While a notice
//! is visible, all keys except dismissal are swallowed.

mod render;
mod state;

pub use render::render_notification;
pub use state::{Notice, NotificationState};
