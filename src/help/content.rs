/// Key bindings shown in the help popup, as (keys, action) pairs
pub fn key_bindings() -> &'static [(&'static str, &'static str)] {
    &[
        ("Tab / Shift+Tab", "Cycle focus between panes"),
        ("Enter (preferences)", "Search for restaurants"),
        ("1-6 / Space (chips)", "Toggle a quick-select preference"),
        ("c (chips)", "Clear all preferences"),
        ("g / Enter (location)", "Detect current location"),
        ("p (location)", "Enter a postal code"),
        ("j/k or arrows (results)", "Select a restaurant"),
        ("o / Enter (results)", "Open selection in maps"),
        ("r (results)", "Refresh the search"),
        ("F1 / ?", "Toggle this help"),
        ("q / Ctrl+C", "Quit"),
    ]
}
