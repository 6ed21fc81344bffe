// Host-side tests for the key bindings.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod keymap {
    include!("../src/events/keymap.rs");
}

use book_core::Route;
use keymap::*;

#[test]
fn open_toggle_keys() {
    assert_eq!(action_for_key("o"), Some(KeyAction::ToggleOpen));
    assert_eq!(action_for_key("O"), Some(KeyAction::ToggleOpen));
    assert_eq!(action_for_key("Enter"), Some(KeyAction::ToggleOpen));
}

#[test]
fn escape_dismisses() {
    assert_eq!(action_for_key("Escape"), Some(KeyAction::Dismiss));
}

#[test]
fn menu_and_spin_keys() {
    assert_eq!(action_for_key("m"), Some(KeyAction::ToggleMenu));
    assert_eq!(action_for_key(" "), Some(KeyAction::StopSpin));
}

#[test]
fn digits_select_routes_in_menu_order() {
    let keys = ["1", "2", "3", "4", "5"];
    for (key, route) in keys.iter().zip(Route::ALL) {
        assert_eq!(action_for_key(key), Some(KeyAction::SelectRoute(route)));
    }
    assert_eq!(route_for_digit("6"), None);
    assert_eq!(route_for_digit("0"), None);
}

#[test]
fn unbound_keys_are_ignored() {
    for key in ["x", "Tab", "ArrowLeft", "", "oo"] {
        assert_eq!(action_for_key(key), None, "{key:?}");
    }
}
