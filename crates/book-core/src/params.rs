//! Tunable parameters for the scene, grouped by the subsystem that reads them.
//!
//! Defaults come from [`crate::constants`]. The bounce and settle thresholds
//! were tuned by eye, so they are kept configurable rather than derived.

use crate::constants::*;
use crate::error::ParamsError;
use glam::Vec3;

#[derive(Clone, Debug, PartialEq)]
pub struct PhysicsParams {
    pub gravity: f32,
    pub drop_height: f32,
    pub max_frame_dt: f32,
    pub bounce_threshold: f32,
    pub restitution: f32,
    pub bounce_jitter: (f32, f32),
    pub friction: f32,
    pub wobble_impulse: f32,
    pub wobble_damping: f32,
    pub level_rate: f32,
    pub level_tolerance: f32,
    pub idle_spin_rate: f32,
    pub initial_yaw: f32,
}

impl Default for PhysicsParams {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            drop_height: DROP_HEIGHT,
            max_frame_dt: MAX_FRAME_DT_SEC,
            bounce_threshold: BOUNCE_THRESHOLD,
            restitution: RESTITUTION,
            bounce_jitter: (BOUNCE_JITTER_MIN, BOUNCE_JITTER_MAX),
            friction: GROUND_FRICTION,
            wobble_impulse: WOBBLE_IMPULSE,
            wobble_damping: WOBBLE_DAMPING,
            level_rate: LEVEL_RATE_PER_SEC,
            level_tolerance: LEVEL_TOLERANCE_RAD,
            idle_spin_rate: IDLE_SPIN_RATE,
            initial_yaw: INITIAL_YAW,
        }
    }
}

impl PhysicsParams {
    /// Worst-case ratio between consecutive impact speeds.
    pub fn max_bounce_decay(&self) -> f32 {
        self.restitution * self.bounce_jitter.1 * self.friction
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CoverParams {
    pub rate: f32,
    pub alpha_cap: f32,
    pub ready_fraction: f32,
}

impl Default for CoverParams {
    fn default() -> Self {
        Self {
            rate: COVER_RATE_PER_SEC,
            alpha_cap: COVER_ALPHA_CAP,
            ready_fraction: PAGE_READY_FRACTION,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CameraParams {
    pub entry_eye: Vec3,
    pub entry_target: Vec3,
    pub fovy_radians: f32,
    pub reading_height: f32,
    pub reading_pullback: f32,
    pub ease_rate: f32,
    pub reset_epsilon: f32,
    pub focus_delay_sec: f64,
    pub focus_settle_sec: f64,
    pub orbit: OrbitParams,
}

impl Default for CameraParams {
    fn default() -> Self {
        Self {
            entry_eye: ENTRY_EYE,
            entry_target: ENTRY_TARGET,
            fovy_radians: CAMERA_FOVY_DEG.to_radians(),
            reading_height: READING_HEIGHT,
            reading_pullback: READING_PULLBACK,
            ease_rate: CAMERA_EASE_RATE_PER_SEC,
            reset_epsilon: RESET_EPSILON,
            focus_delay_sec: FOCUS_DELAY_SEC,
            focus_settle_sec: FOCUS_SETTLE_SEC,
            orbit: OrbitParams::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct OrbitParams {
    pub min_polar: f32,
    pub max_polar: f32,
    pub rotate_speed: f32,
    pub pan_speed: f32,
    pub zoom_sensitivity: f32,
    pub min_radius: f32,
    pub max_radius: f32,
}

impl Default for OrbitParams {
    fn default() -> Self {
        Self {
            min_polar: ORBIT_MIN_POLAR,
            max_polar: ORBIT_MAX_POLAR,
            rotate_speed: ORBIT_ROTATE_SPEED,
            pan_speed: ORBIT_PAN_SPEED,
            zoom_sensitivity: ORBIT_ZOOM_SENSITIVITY,
            min_radius: ORBIT_MIN_RADIUS,
            max_radius: ORBIT_MAX_RADIUS,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageParams {
    pub light_max: f32,
    pub light_rate: f32,
}

impl Default for PageParams {
    fn default() -> Self {
        Self {
            light_max: PAGE_LIGHT_MAX,
            light_rate: PAGE_LIGHT_RATE_PER_SEC,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneParams {
    pub physics: PhysicsParams,
    pub cover: CoverParams,
    pub camera: CameraParams,
    pub page: PageParams,
    pub title: String,
    pub typewriter_char_sec: f32,
    pub about_nav_delay_sec: f64,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            physics: PhysicsParams::default(),
            cover: CoverParams::default(),
            camera: CameraParams::default(),
            page: PageParams::default(),
            title: DEFAULT_TITLE.to_string(),
            typewriter_char_sec: TYPEWRITER_CHAR_SEC,
            about_nav_delay_sec: ABOUT_NAV_DELAY_SEC,
        }
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ParamsError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ParamsError::NotPositive { name, value })
    }
}

fn in_range(name: &'static str, value: f32, min: f32, max: f32) -> Result<(), ParamsError> {
    if value >= min && value < max {
        Ok(())
    } else {
        Err(ParamsError::OutOfRange {
            name,
            value,
            min,
            max,
        })
    }
}

impl SceneParams {
    /// Check every parameter the state machines rely on for convergence.
    pub fn validate(&self) -> Result<(), ParamsError> {
        let p = &self.physics;
        positive("gravity", p.gravity)?;
        positive("drop_height", p.drop_height)?;
        positive("max_frame_dt", p.max_frame_dt)?;
        positive("bounce_threshold", p.bounce_threshold)?;
        positive("restitution", p.restitution)?;
        positive("friction", p.friction)?;
        positive("bounce_jitter.min", p.bounce_jitter.0)?;
        positive("level_rate", p.level_rate)?;
        positive("level_tolerance", p.level_tolerance)?;
        in_range("wobble_damping", p.wobble_damping, 0.0, 1.0)?;
        if p.bounce_jitter.0 > p.bounce_jitter.1 {
            return Err(ParamsError::EmptyJitterRange {
                min: p.bounce_jitter.0,
                max: p.bounce_jitter.1,
            });
        }
        let product = p.max_bounce_decay();
        if product >= 1.0 {
            return Err(ParamsError::NonConvergentBounce { product });
        }

        let c = &self.cover;
        positive("cover.rate", c.rate)?;
        in_range("cover.alpha_cap", c.alpha_cap, f32::MIN_POSITIVE, 1.0)?;
        in_range("cover.ready_fraction", c.ready_fraction, f32::MIN_POSITIVE, 1.0)?;

        let cam = &self.camera;
        positive("camera.fovy_radians", cam.fovy_radians)?;
        positive("camera.ease_rate", cam.ease_rate)?;
        positive("camera.reset_epsilon", cam.reset_epsilon)?;
        positive("camera.reading_height", cam.reading_height)?;
        positive("camera.focus_settle_sec", cam.focus_settle_sec as f32)?;
        if cam.orbit.min_polar > cam.orbit.max_polar {
            return Err(ParamsError::InvertedPolarLimits {
                min: cam.orbit.min_polar,
                max: cam.orbit.max_polar,
            });
        }
        positive("orbit.min_radius", cam.orbit.min_radius)?;
        positive("orbit.max_radius", cam.orbit.max_radius)?;
        if cam.orbit.min_radius > cam.orbit.max_radius {
            return Err(ParamsError::InvertedRadiusLimits {
                min: cam.orbit.min_radius,
                max: cam.orbit.max_radius,
            });
        }

        positive("page.light_rate", self.page.light_rate)?;
        positive("typewriter_char_sec", self.typewriter_char_sec)?;
        Ok(())
    }
}
