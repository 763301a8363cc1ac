//! platepal: terminal restaurant finder
//!
//! Dietary preferences plus a coordinate go in; a model-generated restaurant
//! list comes out, with a map handoff per result. The UI thread owns all
//! state; network IO runs on a background worker and answers over channels,
//! tagged with request ids so stale responses never win.

pub mod app;
pub mod config;
pub mod error;
pub mod help;
pub mod location;
pub mod maps;
pub mod notification;
pub mod prefs;
pub mod suggest;
pub mod widgets;
pub mod worker;
