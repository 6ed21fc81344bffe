use book_core::layout::{self, INDEX_ANCHOR, OPEN_BUTTON_ANCHOR, TITLE_ANCHOR};
use book_core::{
    Camera, CameraDirector, CameraIntent, CameraParams, CameraPose, DirectorEvent, DirectorInput,
    OrbitControls, OrbitParams, CAMERA_ZFAR, CAMERA_ZNEAR,
};
use glam::{Quat, Vec3};

const DT: f32 = 1.0 / 60.0;

fn entry_camera(aspect: f32) -> Camera {
    let params = CameraParams::default();
    let pose = CameraPose::new(params.entry_eye, params.entry_target);
    Camera::from_pose(pose, aspect, params.fovy_radians, CAMERA_ZNEAR, CAMERA_ZFAR)
}

fn input(now: f64, open: bool, settled: bool, page_ready: bool) -> DirectorInput {
    DirectorInput {
        now,
        dt_sec: DT,
        open_intent: open,
        settled,
        page_ready,
        page_anchor: layout::SPREAD_CENTER,
        book_yaw: 0.0,
    }
}

/// Drive the director at 60 Hz from `t0` for `secs`, returning the end time.
fn run(
    dir: &mut CameraDirector,
    t0: f64,
    secs: f64,
    open: bool,
    page_ready: bool,
    events: &mut Vec<DirectorEvent>,
) -> f64 {
    let mut t = t0;
    let end = t0 + secs;
    while t < end {
        t += DT as f64;
        dir.update(input(t, open, true, page_ready), events);
    }
    t
}

#[test]
fn anchors_project_inside_viewport_at_entry() {
    let cam = entry_camera(16.0 / 9.0);
    for anchor in [TITLE_ANCHOR, OPEN_BUTTON_ANCHOR] {
        let ndc = cam.project_ndc(anchor).expect("anchor in front of camera");
        assert!(ndc.x.abs() < 1.0 && ndc.y.abs() < 1.0, "{anchor} -> {ndc}");
        assert!((0.0..1.0).contains(&ndc.z));
    }
}

#[test]
fn points_behind_camera_do_not_project() {
    let cam = entry_camera(1.0);
    assert!(cam.project_ndc(Vec3::new(0.0, 10.0, 40.0)).is_none());
}

#[test]
fn centre_ray_points_at_target() {
    let cam = entry_camera(1.5);
    let (origin, dir) = cam.ndc_ray(0.0, 0.0);
    let expected = (cam.target - cam.eye).normalize();
    assert!(origin.distance(cam.eye) < 1e-5);
    assert!(dir.dot(expected) > 0.9999);
}

#[test]
fn orbit_preserves_radius_and_respects_polar_band() {
    let params = OrbitParams::default();
    let controls = OrbitControls::new(params.clone());
    let mut pose = CameraPose::new(Vec3::new(0.0, 10.0, 20.0), Vec3::ZERO);
    let radius = pose.eye.length();
    for _ in 0..200 {
        controls.rotate(&mut pose, 7.0, 9.0);
    }
    assert!((pose.eye.length() - radius).abs() < 1e-3);
    let polar = (pose.eye.y / radius).acos();
    assert!(polar <= params.max_polar + 1e-4 && polar >= params.min_polar - 1e-4);
}

#[test]
fn orbit_from_top_down_view_does_not_snap() {
    let controls = OrbitControls::new(OrbitParams::default());
    let mut pose = CameraPose::new(Vec3::new(0.0, 22.0, 2.0), Vec3::ZERO);
    let before = pose.eye;
    controls.rotate(&mut pose, 0.0, 1.0);
    assert!(pose.eye.distance(before) < 0.2, "camera jumped to {}", pose.eye);
}

#[test]
fn zoom_is_clamped() {
    let params = OrbitParams::default();
    let controls = OrbitControls::new(params.clone());
    let mut pose = CameraPose::new(Vec3::new(0.0, 10.0, 20.0), Vec3::ZERO);
    controls.zoom(&mut pose, 1.0e6);
    assert!((pose.eye.length() - params.max_radius).abs() < 1e-3);
    controls.zoom(&mut pose, -1.0e6);
    assert!((pose.eye.length() - params.min_radius).abs() < 1e-3);
}

#[test]
fn pan_moves_eye_and_target_together() {
    let controls = OrbitControls::new(OrbitParams::default());
    let mut pose = CameraPose::new(Vec3::new(0.0, 10.0, 20.0), Vec3::ZERO);
    let offset = pose.eye - pose.target;
    controls.pan(&mut pose, 30.0, -12.0);
    assert!(pose.target.length() > 0.0);
    assert!((pose.eye - pose.target - offset).length() < 1e-4);
}

#[test]
fn idle_until_settled_then_free() {
    let mut dir = CameraDirector::new(CameraParams::default());
    let mut events = Vec::new();
    dir.update(input(0.1, false, false, false), &mut events);
    assert_eq!(dir.intent(), CameraIntent::Idle);
    assert!(!dir.orbit(10.0, 0.0));
    dir.update(input(0.2, false, true, false), &mut events);
    assert_eq!(dir.intent(), CameraIntent::Free);
    assert_eq!(
        events,
        vec![DirectorEvent::IntentChanged {
            from: CameraIntent::Idle,
            to: CameraIntent::Free
        }]
    );
    assert!(dir.orbit(10.0, 0.0));
}

#[test]
fn controls_follow_intent() {
    let mut dir = CameraDirector::new(CameraParams::default());
    let mut events = Vec::new();
    let t = run(&mut dir, 0.0, 0.1, false, false, &mut events);
    assert!(dir.controls_enabled());
    let t = run(&mut dir, t, 0.6, true, true, &mut events);
    assert_eq!(dir.intent(), CameraIntent::FocusingOnPage);
    assert!(!dir.controls_enabled());
    assert!(!dir.zoom(100.0));
    assert!(!dir.pan(5.0, 5.0));
    run(&mut dir, t, 1.6, true, true, &mut events);
    assert_eq!(dir.intent(), CameraIntent::Free);
    assert!(dir.controls_enabled());
}

#[test]
fn focus_waits_for_page_ready() {
    let mut dir = CameraDirector::new(CameraParams::default());
    let mut events = Vec::new();
    let t = run(&mut dir, 0.0, 2.0, true, false, &mut events);
    assert_ne!(dir.intent(), CameraIntent::FocusingOnPage);
    // The delay has already run out, so focus starts on the first ready frame.
    dir.update(input(t + DT as f64, true, true, true), &mut events);
    assert_eq!(dir.intent(), CameraIntent::FocusingOnPage);
}

#[test]
fn focus_ends_near_reading_pose() {
    let mut dir = CameraDirector::new(CameraParams::default());
    let mut events = Vec::new();
    run(&mut dir, 0.0, 2.5, true, true, &mut events);
    assert!(dir.initial_focus_complete());
    assert!(events.contains(&DirectorEvent::InitialFocusComplete));
    let goal = dir.reading_pose(layout::SPREAD_CENTER, 0.0);
    // 1.5 s at rate 3 leaves about 1% of the starting gap.
    assert!(dir.pose().distance_to(&goal) < 0.5);
}

#[test]
fn reading_pose_turns_with_the_book() {
    let dir = CameraDirector::new(CameraParams::default());
    let straight = dir.reading_pose(Vec3::ZERO, 0.0);
    let turned = dir.reading_pose(Vec3::ZERO, std::f32::consts::FRAC_PI_2);
    let expected = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2) * straight.eye;
    assert!(turned.eye.distance(expected) < 1e-4);
    assert_eq!(turned.target, Vec3::ZERO);
}

#[test]
fn close_after_focus_resets_to_exact_entry_pose() {
    let mut dir = CameraDirector::new(CameraParams::default());
    let mut events = Vec::new();
    let t = run(&mut dir, 0.0, 2.5, true, true, &mut events);
    events.clear();
    dir.update(input(t + DT as f64, false, true, false), &mut events);
    assert_eq!(dir.intent(), CameraIntent::Resetting);
    assert!(!dir.orbit(3.0, 3.0));
    run(&mut dir, t, 5.0, false, false, &mut events);
    assert_eq!(dir.intent(), CameraIntent::Free);
    assert_eq!(dir.pose(), dir.entry_pose());
    assert!(!dir.initial_focus_complete());
}

#[test]
fn close_without_focus_keeps_free_camera() {
    let mut dir = CameraDirector::new(CameraParams::default());
    let mut events = Vec::new();
    let t = run(&mut dir, 0.0, 0.1, false, false, &mut events);
    assert!(dir.orbit(40.0, 0.0));
    let moved = dir.pose();
    let t = run(&mut dir, t, 0.2, true, false, &mut events);
    run(&mut dir, t, 1.0, false, false, &mut events);
    assert_eq!(dir.intent(), CameraIntent::Free);
    assert_eq!(dir.pose(), moved);
}
