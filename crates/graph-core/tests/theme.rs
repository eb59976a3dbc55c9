// File: crates/graph-core/tests/theme.rs
// Purpose: Built-in theme names, the default preset and name lookup fallback.

use graph_core::theme::{self, Color, Theme};

#[test]
fn preset_names_and_default() {
    let names: Vec<&str> = theme::presets().iter().map(|t| t.name).collect();
    assert_eq!(names, ["light", "dark", "solarized-light"]);
    assert_eq!(Theme::default(), Theme::light());
}

#[test]
fn find_is_case_insensitive_and_falls_back_to_light() {
    assert_eq!(theme::find("Solarized-Light").name, "solarized-light");
    assert_eq!(theme::find("DARK").name, "dark");
    assert_eq!(theme::find("solarized_light").name, "light");
    assert_eq!(theme::find("").name, "light");
}

#[test]
fn color_hex_round_trips_through_display() {
    let c = Color::from_hex("1f77b4").expect("valid hex");
    assert_eq!(c.to_string(), "1f77b4");
}
