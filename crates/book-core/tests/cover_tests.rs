use book_core::{CoverArticulation, CoverParams, PageEvent, PageParams, PageSequencer};
use std::f32::consts::PI;

const DT: f32 = 1.0 / 60.0;

#[test]
fn cover_waits_for_settle() {
    let mut cover = CoverArticulation::new(CoverParams::default());
    cover.set_open(true);
    for _ in 0..120 {
        cover.step(DT, false);
    }
    assert_eq!(cover.angle(), 0.0);
    cover.step(DT, true);
    assert!(cover.angle() > 0.0);
}

#[test]
fn opening_is_monotonic_and_snaps_to_pi() {
    let mut cover = CoverArticulation::new(CoverParams::default());
    cover.set_open(true);
    let mut prev = 0.0;
    for _ in 0..600 {
        cover.step(DT, true);
        let a = cover.angle();
        assert!(a >= prev, "cover went backwards: {a} < {prev}");
        assert!(a <= PI);
        prev = a;
    }
    assert_eq!(cover.angle(), PI);
}

#[test]
fn angle_stays_in_range_under_rapid_toggling() {
    let mut cover = CoverArticulation::new(CoverParams::default());
    for i in 0..2000 {
        if i % 7 == 0 {
            cover.set_open(i % 14 == 0);
        }
        // Mix in frame spikes.
        let dt = if i % 13 == 0 { 0.1 } else { DT };
        cover.step(dt, true);
        let a = cover.angle();
        assert!((0.0..=PI).contains(&a), "angle {a} out of range");
    }
}

#[test]
fn per_frame_swing_is_capped() {
    let params = CoverParams::default();
    let cap = params.alpha_cap;
    let mut cover = CoverArticulation::new(params);
    cover.set_open(true);
    cover.step(10.0, true);
    assert!(cover.angle() <= PI * cap + 1e-5);
}

#[test]
fn bad_deltas_leave_cover_alone() {
    let mut cover = CoverArticulation::new(CoverParams::default());
    cover.set_open(true);
    for dt in [f32::NAN, -1.0, 0.0, f32::INFINITY] {
        cover.step(dt, true);
    }
    assert_eq!(cover.angle(), 0.0);
}

#[test]
fn ready_threshold_tracks_ninety_percent_of_target() {
    let mut cover = CoverArticulation::new(CoverParams::default());
    cover.set_open(true);
    while !cover.is_past_ready() {
        cover.step(DT, true);
    }
    assert!(cover.angle() > 0.9 * PI);
    cover.set_open(false);
    assert!(!cover.is_past_ready());
}

#[test]
fn sequencer_reveals_then_hides() {
    let mut seq = PageSequencer::new(PageParams::default());
    assert_eq!(seq.update(DT, true, true, false), None);
    assert_eq!(seq.update(DT, true, true, true), Some(PageEvent::Revealed));
    assert!(seq.page_ready());
    assert!(seq.content_visible(true));
    assert_eq!(seq.update(DT, false, true, true), Some(PageEvent::Hidden));
    assert!(!seq.page_ready());
}

#[test]
fn sequencer_needs_settled_book() {
    let mut seq = PageSequencer::new(PageParams::default());
    for _ in 0..10 {
        assert_eq!(seq.update(DT, true, false, true), None);
    }
    assert!(!seq.page_ready());
    assert!(!seq.content_visible(false));
}

#[test]
fn page_light_ramps_toward_max() {
    let params = PageParams::default();
    let max = params.light_max;
    let mut seq = PageSequencer::new(params);
    let mut prev = 0.0;
    for _ in 0..240 {
        seq.update(DT, true, true, true);
        assert!(seq.light_intensity() >= prev);
        prev = seq.light_intensity();
    }
    assert!((seq.light_intensity() - max).abs() < 0.01);
    assert!(seq.hide());
    assert!(!seq.hide());
    for _ in 0..240 {
        seq.update(DT, false, true, false);
    }
    assert!(seq.light_intensity() < 0.01);
}
