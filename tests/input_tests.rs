// Host-side tests for pure input functions.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod input {
    include!("../src/input.rs");
}

use glam::{Vec2, Vec3};
use input::*;

#[test]
fn ray_sphere_intersection_basic() {
    let t = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, 5.0), 2.0);
    assert_eq!(t, Some(3.0));
}

#[test]
fn ray_sphere_intersection_miss() {
    let t = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(5.0, 0.0, 5.0), 2.0);
    assert!(t.is_none());
}

#[test]
fn ray_sphere_behind_origin() {
    let t = ray_sphere(Vec3::ZERO, Vec3::Z, Vec3::new(0.0, 0.0, -5.0), 2.0);
    assert!(t.is_none());
}

#[test]
fn short_press_is_a_click() {
    let mut drag = DragState::default();
    drag.begin(Vec2::new(100.0, 100.0), false);
    drag.update(Vec2::new(102.0, 101.0));
    assert!(drag.end(Vec2::new(101.0, 100.0), 5.0));
    assert!(!drag.active);
}

#[test]
fn drag_that_returns_is_not_a_click() {
    let mut drag = DragState::default();
    drag.begin(Vec2::new(0.0, 0.0), false);
    drag.update(Vec2::new(40.0, 0.0));
    assert!(!drag.end(Vec2::new(0.0, 0.0), 5.0));
    assert!(drag.travel >= 40.0);
}

#[test]
fn drag_update_returns_incremental_delta() {
    let mut drag = DragState::default();
    drag.begin(Vec2::new(10.0, 10.0), true);
    assert!(drag.panning);
    assert_eq!(drag.update(Vec2::new(15.0, 12.0)), Vec2::new(5.0, 2.0));
    assert_eq!(drag.update(Vec2::new(14.0, 12.0)), Vec2::new(-1.0, 0.0));
}

#[test]
fn click_threshold_is_strict() {
    assert!(is_click(4.9, 5.0));
    assert!(!is_click(5.0, 5.0));
}

#[test]
fn wheel_modes_scale_to_pixels() {
    assert_eq!(wheel_delta_px(3.0, 0, 16.0, 800.0), 3.0);
    assert_eq!(wheel_delta_px(3.0, 1, 16.0, 800.0), 48.0);
    assert_eq!(wheel_delta_px(-1.0, 2, 16.0, 800.0), -800.0);
}
