// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use book_core::layout::{BOOK_PARTS, COVER_PIVOT};
use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_are_within_reasonable_bounds() {
    assert!(CLICK_TRAVEL_PX > 0.0);
    assert!(WHEEL_LINE_PX > 0.0);
    assert!(AMBIENT_INTENSITY > 0.0);
    assert!(KEY_LIGHT_INTENSITY > 0.0);
    assert!(PAGE_LIGHT_HEIGHT > 0.0);
    assert!(GROUND_SIZE > 0.0);
    for c in CLEAR_RGB {
        assert!((0.0..=1.0).contains(&c));
    }
    for c in GROUND_RGB {
        assert!((0.0..=1.0).contains(&c));
    }
}

#[test]
fn key_light_cutoff_matches_cone_angle() {
    assert!((KEY_LIGHT_COS_CUTOFF - 0.3_f32.cos()).abs() < 1e-6);
}

#[test]
fn ground_sits_under_the_bottom_cover() {
    let lowest = BOOK_PARTS
        .iter()
        .filter(|p| !p.on_cover)
        .map(|p| p.center.y - p.size.y * 0.5)
        .fold(f32::MAX, f32::min);
    assert!((lowest - GROUND_Y).abs() < 1e-5, "book bottom {lowest} vs ground {GROUND_Y}");
    assert!(COVER_PIVOT.y > GROUND_Y);
}

#[test]
fn dom_ids_are_distinct() {
    let ids = [
        CANVAS_ID,
        TITLE_ID,
        OPEN_BUTTON_ID,
        INDEX_BUTTON_ID,
        SIDE_MENU_ID,
        MENU_TOGGLE_ID,
    ];
    for (i, a) in ids.iter().enumerate() {
        assert!(!a.is_empty());
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}
