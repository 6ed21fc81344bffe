use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, PI};

// Shared tuning constants for the book scene. `SceneParams::default()` is
// built from these; front-ends may override individual fields.

// Frame clock
pub const MAX_FRAME_DT_SEC: f32 = 0.1; // longer frames (tab resume) are clamped

// Drop and bounce
pub const GRAVITY: f32 = 9.8;
pub const DROP_HEIGHT: f32 = 16.0;
pub const BOUNCE_THRESHOLD: f32 = 0.2; // impact speed below this rests instead of bouncing
pub const RESTITUTION: f32 = 0.4;
pub const BOUNCE_JITTER_MIN: f32 = 0.8;
pub const BOUNCE_JITTER_MAX: f32 = 1.2;
pub const GROUND_FRICTION: f32 = 0.7;

// Tumble while airborne
pub const WOBBLE_IMPULSE: f32 = 0.6; // rad/s added per frame, uniformly in [-0.5, 0.5] * impulse
pub const WOBBLE_DAMPING: f32 = 0.85; // per frame
pub const LEVEL_RATE_PER_SEC: f32 = 8.0;
pub const LEVEL_TOLERANCE_RAD: f32 = 0.01;

// Idle turn about the vertical axis until the user interacts
pub const IDLE_SPIN_RATE: f32 = 0.5; // rad/s
pub const INITIAL_YAW: f32 = 0.2;

// Cover
pub const COVER_OPEN_ANGLE: f32 = PI;
pub const COVER_RATE_PER_SEC: f32 = 6.0;
pub const COVER_ALPHA_CAP: f32 = 0.2; // max fraction of the remaining angle per frame
pub const COVER_SNAP_EPS: f32 = 1e-4;
pub const PAGE_READY_FRACTION: f32 = 0.9;

// Page light
pub const PAGE_LIGHT_MAX: f32 = 3.0;
pub const PAGE_LIGHT_RATE_PER_SEC: f32 = 4.0;

// Camera
pub const ENTRY_EYE: Vec3 = Vec3::new(0.0, 10.0, 20.0);
pub const ENTRY_TARGET: Vec3 = Vec3::ZERO;
pub const CAMERA_FOVY_DEG: f32 = 45.0;
pub const CAMERA_ZNEAR: f32 = 0.1;
pub const CAMERA_ZFAR: f32 = 200.0;
pub const READING_HEIGHT: f32 = 22.0; // above the open spread
pub const READING_PULLBACK: f32 = 2.0; // towards the viewer, keeps look-at off the pole
pub const CAMERA_EASE_RATE_PER_SEC: f32 = 3.0;
pub const RESET_EPSILON: f32 = 0.05;
pub const FOCUS_DELAY_SEC: f64 = 0.5;
pub const FOCUS_SETTLE_SEC: f64 = 1.5;

// Orbit controls
pub const ORBIT_MIN_POLAR: f32 = FRAC_PI_2 - 0.8;
pub const ORBIT_MAX_POLAR: f32 = FRAC_PI_2 + 0.8;
pub const ORBIT_ROTATE_SPEED: f32 = 0.005; // rad per pixel
pub const ORBIT_PAN_SPEED: f32 = 0.0015; // world units per pixel per unit of radius
pub const ORBIT_ZOOM_SENSITIVITY: f32 = 0.001; // per wheel delta unit
pub const ORBIT_MIN_RADIUS: f32 = 6.0;
pub const ORBIT_MAX_RADIUS: f32 = 60.0;

// Chrome
pub const DEFAULT_TITLE: &str = "Chethan";
pub const TYPEWRITER_CHAR_SEC: f32 = 0.15;
pub const ABOUT_NAV_DELAY_SEC: f64 = 1.2;
