//! External map application handoff
//!
//! Builds a search deep link from a suggestion record and hands it to the
//! platform opener. Fire-and-forget: nothing observes whether the link
//! actually opened; failures are only logged.

use std::process::{Command, Stdio};

use crate::suggest::Restaurant;

/// Search URL for a record: URL-encoded `"{name} {address}"` against the
/// platform map application (Apple Maps on macOS, Google Maps elsewhere).
pub fn maps_search_url(restaurant: &Restaurant) -> String {
    let raw = format!("{} {}", restaurant.name, restaurant.address);
    let query = urlencoding::encode(raw.trim());

    if cfg!(target_os = "macos") {
        format!("http://maps.apple.com/?q={query}")
    } else {
        format!("https://www.google.com/maps/search/?api=1&query={query}")
    }
}

/// Open a record in the external map application
pub fn open_in_maps(restaurant: &Restaurant) {
    let url = maps_search_url(restaurant);
    log::debug!("opening maps link: {url}");

    if let Err(e) = open_url(&url) {
        log::warn!("failed to open maps link: {e}");
    }
}

fn open_url(url: &str) -> std::io::Result<()> {
    opener_command(url)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
}

fn opener_command(url: &str) -> Command {
    if cfg!(target_os = "macos") {
        let mut command = Command::new("open");
        command.arg(url);
        command
    } else if cfg!(target_os = "windows") {
        let mut command = Command::new("cmd");
        command.args(["/C", "start", ""]).arg(url);
        command
    } else {
        let mut command = Command::new("xdg-open");
        command.arg(url);
        command
    }
}
