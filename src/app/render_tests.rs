//! Rendering tests against a test backend

use ratatui::{Terminal, backend::TestBackend};

use crate::app::{App, Focus};
use crate::config::Config;
use crate::location::Coordinate;
use crate::suggest::Restaurant;

fn app() -> App {
    App::new(&Config::default())
}

fn draw(app: &mut App, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| app.render(frame)).unwrap();

    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn restaurant(name: &str, rating: Option<&str>) -> Restaurant {
    Restaurant {
        name: name.to_string(),
        address: "1 Main St".to_string(),
        description: "vegan-friendly".to_string(),
        rating: rating.map(str::to_string),
    }
}

#[test]
fn test_frame_shows_all_panes() {
    let mut app = app();
    let text = draw(&mut app, 80, 24);

    assert!(text.contains("Dietary preferences"));
    assert!(text.contains("Quick select"));
    assert!(text.contains("Location"));
    assert!(text.contains("Recommended restaurants"));
}

#[test]
fn test_chips_row_lists_labels() {
    let mut app = app();
    let text = draw(&mut app, 80, 24);

    assert!(text.contains("Vegan"));
    assert!(text.contains("Keto"));
    assert!(text.contains("Clear"));
}

#[test]
fn test_narrow_frame_truncates_chips_with_ellipsis() {
    let mut app = app();
    let text = draw(&mut app, 30, 24);

    assert!(text.contains('…'));
    assert!(!text.contains("Clear"));
}

#[test]
fn test_empty_state_hint() {
    let mut app = app();
    let text = draw(&mut app, 80, 24);

    assert!(text.contains("No results yet"));
    assert!(text.contains("No location yet"));
}

#[test]
fn test_coordinate_is_shown_with_four_decimals() {
    let mut app = app();
    app.set_location(Coordinate {
        latitude: 52.52,
        longitude: 13.405,
    });

    let text = draw(&mut app, 80, 24);
    assert!(text.contains("Lat: 52.5200, Lng: 13.4050"));
}

#[test]
fn test_results_cards_show_all_fields() {
    let mut app = app();
    app.suggest.restaurants = vec![restaurant("Green Bowl", Some("4.5/5"))];

    let text = draw(&mut app, 80, 24);
    assert!(text.contains("Green Bowl"));
    assert!(text.contains("4.5/5"));
    assert!(text.contains("1 Main St"));
    assert!(text.contains("vegan-friendly"));
}

#[test]
fn test_missing_rating_renders_without_badge() {
    let mut app = app();
    app.suggest.restaurants = vec![restaurant("Green Bowl", None)];

    let text = draw(&mut app, 80, 24);
    assert!(text.contains("Green Bowl"));
    assert!(!text.contains('★'));
}

#[test]
fn test_loading_title_and_status() {
    let mut app = app();
    app.suggest.loading = true;
    app.configured = true;

    let text = draw(&mut app, 80, 24);
    assert!(text.contains("searching"));
    assert!(text.contains("Finding great places for you"));
}

#[test]
fn test_status_warns_when_unconfigured() {
    let mut app = app();
    assert!(!app.configured);

    let text = draw(&mut app, 80, 24);
    assert!(text.contains("API key missing"));
}

#[test]
fn test_notification_overlays_frame() {
    let mut app = app();
    app.notification.show("Missing info", "Please enter your dietary preferences");

    let text = draw(&mut app, 80, 24);
    assert!(text.contains("Missing info"));
    assert!(text.contains("Please enter your dietary preferences"));
    assert!(text.contains("Enter to dismiss"));
}

#[test]
fn test_help_overlay_lists_bindings() {
    let mut app = app();
    app.help.visible = true;

    let text = draw(&mut app, 80, 24);
    assert!(text.contains("Help"));
    assert!(text.contains("Quit"));
}

#[test]
fn test_postal_entry_is_rendered() {
    let mut app = app();
    app.set_focus(Focus::Location);
    app.location.postal.begin();
    app.location.postal.push_char('1');
    app.location.postal.push_char('0');

    let text = draw(&mut app, 80, 24);
    assert!(text.contains("Postal code: 10"));
}

#[test]
fn test_scroll_keeps_selection_visible() {
    let mut app = app();
    app.set_focus(Focus::Results);
    app.suggest.restaurants = (0..8)
        .map(|i| restaurant(&format!("Restaurant-{i}"), None))
        .collect();
    app.suggest.selected = 7;

    let text = draw(&mut app, 80, 20);
    assert!(text.contains("Restaurant-7"));
}

#[test]
fn test_tiny_frame_does_not_panic() {
    let mut app = app();
    app.suggest.restaurants = vec![restaurant("A", Some("4.0/5"))];
    draw(&mut app, 10, 5);
    draw(&mut app, 1, 1);
}
