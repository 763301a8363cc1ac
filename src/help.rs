//! Help popup listing the key bindings

mod content;
mod render;
mod state;

pub use render::render_help;
pub use state::HelpState;
