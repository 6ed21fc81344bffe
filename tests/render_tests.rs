// Host-side tests for projection helpers and book geometry.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod camera {
    include!("../src/camera.rs");
}
mod mesh {
    include!("../src/render/mesh.rs");
}

use book_core::layout::{BOOK_PARTS, TITLE_ANCHOR};
use book_core::{BookScene, CameraParams, CameraPose, FixedStepClock, SceneParams};
use glam::{Vec2, Vec3};
use mesh::*;

const W: f32 = 1280.0;
const H: f32 = 720.0;

fn entry_camera() -> book_core::Camera {
    let params = CameraParams::default();
    camera::camera_for_viewport(
        CameraPose::new(params.entry_eye, params.entry_target),
        params.fovy_radians,
        W,
        H,
    )
}

#[test]
fn target_projects_to_screen_centre() {
    let cam = entry_camera();
    let p = camera::world_to_screen(&cam, Vec3::ZERO, W, H).expect("visible");
    assert!((p - Vec2::new(W * 0.5, H * 0.5)).length() < 0.5);
}

#[test]
fn screen_ray_round_trips_through_projection() {
    let cam = entry_camera();
    let world = Vec3::new(2.0, 1.17, 3.0);
    let px = camera::world_to_screen(&cam, world, W, H).expect("visible");
    let (ro, rd) = camera::screen_to_world_ray(&cam, px.x, px.y, W, H);
    let to_point = (world - ro).normalize();
    assert!(rd.dot(to_point) > 0.9999);
}

#[test]
fn off_screen_points_are_hidden() {
    let cam = entry_camera();
    assert!(camera::world_to_screen(&cam, Vec3::new(500.0, 0.0, 0.0), W, H).is_none());
    assert!(camera::world_to_screen(&cam, Vec3::new(0.0, 10.0, 60.0), W, H).is_none());
}

#[test]
fn title_anchor_is_on_screen_at_entry() {
    let cam = entry_camera();
    let p = camera::world_to_screen(&cam, TITLE_ANCHOR, W, H).expect("visible");
    assert!(p.x > 0.0 && p.x < W && p.y > 0.0 && p.y < H);
}

#[test]
fn cube_faces_wind_outward() {
    let v = cube_vertices();
    let idx = cube_indices();
    for tri in idx.chunks(3) {
        let a = Vec3::from(v[tri[0] as usize].position);
        let b = Vec3::from(v[tri[1] as usize].position);
        let c = Vec3::from(v[tri[2] as usize].position);
        let n = Vec3::from(v[tri[0] as usize].normal);
        let face = (b - a).cross(c - a).normalize();
        assert!(face.dot(n) > 0.99, "triangle {tri:?} winds inward");
    }
    for vert in v {
        for c in vert.position {
            assert_eq!(c.abs(), 0.5);
        }
    }
}

#[test]
fn page_content_instances_follow_visibility() {
    let mut scene = BookScene::new(SceneParams::default(), 1).expect("valid");
    let mut out = Vec::new();
    mesh::book_instances(&scene.frame(), &mut out);
    let content_parts = BOOK_PARTS.iter().filter(|p| p.emissive > 0.0).count();
    assert_eq!(out.len(), MAX_INSTANCES - content_parts);

    let mut clock = FixedStepClock::from_hz(60.0);
    let mut events = Vec::new();
    while !scene.book().has_settled {
        scene.advance(&mut clock, &mut events);
    }
    scene.open();
    while !scene.page_content_visible() {
        scene.advance(&mut clock, &mut events);
    }
    mesh::book_instances(&scene.frame(), &mut out);
    assert_eq!(out.len(), MAX_INSTANCES);
    assert!(out.iter().all(|i| i.model.iter().flatten().all(|x| x.is_finite())));
}

#[test]
fn ground_instance_comes_first() {
    let scene = BookScene::new(SceneParams::default(), 1).expect("valid");
    let mut out = Vec::new();
    mesh::book_instances(&scene.frame(), &mut out);
    let ground_top = out[0].model[3][1] + out[0].model[1][1] * 0.5;
    assert!((ground_top - constants::GROUND_Y).abs() < 1e-5);
}
