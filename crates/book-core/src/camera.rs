//! Camera description, projection helpers and user orbit controls.
//!
//! These types avoid platform-specific APIs. The web front-end builds its
//! view-projection matrix from [`Camera`] and feeds pointer deltas into
//! [`OrbitControls`] through the scene.

use crate::params::OrbitParams;
use glam::{Mat4, Vec3, Vec4};

/// Where the camera sits and what it looks at. Up is always +Y.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub eye: Vec3,
    pub target: Vec3,
}

impl CameraPose {
    pub fn new(eye: Vec3, target: Vec3) -> Self {
        Self { eye, target }
    }

    /// Summed eye and target separation; zero only for identical poses.
    pub fn distance_to(&self, other: &CameraPose) -> f32 {
        self.eye.distance(other.eye) + self.target.distance(other.target)
    }

    pub fn lerp(&self, other: &CameraPose, t: f32) -> CameraPose {
        CameraPose {
            eye: self.eye.lerp(other.eye, t),
            target: self.target.lerp(other.target, t),
        }
    }
}

/// Right-handed camera with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    pub fn from_pose(
        pose: CameraPose,
        aspect: f32,
        fovy_radians: f32,
        znear: f32,
        zfar: f32,
    ) -> Self {
        Self {
            eye: pose.eye,
            target: pose.target,
            up: Vec3::Y,
            aspect: aspect.max(1e-3),
            fovy_radians,
            znear,
            zfar,
        }
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Project a world point to normalized device coordinates.
    /// Returns `None` for points behind the camera.
    pub fn project_ndc(&self, world: Vec3) -> Option<Vec3> {
        let clip = self.view_projection() * world.extend(1.0);
        if clip.w <= 1e-6 {
            return None;
        }
        Some(clip.truncate() / clip.w)
    }

    /// World-space ray through an NDC position: `(origin, direction)`.
    pub fn ndc_ray(&self, ndc_x: f32, ndc_y: f32) -> (Vec3, Vec3) {
        let inv = self.view_projection().inverse();
        let p_far = inv * Vec4::new(ndc_x, ndc_y, 1.0, 1.0);
        let far: Vec3 = p_far.truncate() / p_far.w;
        (self.eye, (far - self.eye).normalize_or_zero())
    }
}

/// Rotate/zoom/pan around the pose target.
///
/// The polar limit is enforced as a one-way clamp: a pose that starts outside
/// the band (e.g. the top-down reading view) can move back into it but not
/// further out, so the first drag never snaps the camera.
#[derive(Clone, Debug)]
pub struct OrbitControls {
    params: OrbitParams,
}

impl OrbitControls {
    pub fn new(params: OrbitParams) -> Self {
        Self { params }
    }

    pub fn rotate(&self, pose: &mut CameraPose, dx_px: f32, dy_px: f32) {
        let offset = pose.eye - pose.target;
        let radius = offset.length();
        if radius <= 1e-6 {
            return;
        }
        let polar = (offset.y / radius).clamp(-1.0, 1.0).acos();
        let azimuth = offset.x.atan2(offset.z);

        let lo = self.params.min_polar.min(polar);
        let hi = self.params.max_polar.max(polar);
        let polar = (polar - dy_px * self.params.rotate_speed)
            .clamp(lo, hi)
            .clamp(1e-3, std::f32::consts::PI - 1e-3);
        let azimuth = azimuth - dx_px * self.params.rotate_speed;

        let dir = Vec3::new(
            polar.sin() * azimuth.sin(),
            polar.cos(),
            polar.sin() * azimuth.cos(),
        );
        pose.eye = pose.target + dir * radius;
    }

    /// Positive `delta` (wheel down) moves away from the target.
    pub fn zoom(&self, pose: &mut CameraPose, delta: f32) {
        let offset = pose.eye - pose.target;
        let radius = offset.length();
        if radius <= 1e-6 {
            return;
        }
        let new_radius = (radius * (delta * self.params.zoom_sensitivity).exp())
            .clamp(self.params.min_radius, self.params.max_radius);
        pose.eye = pose.target + offset * (new_radius / radius);
    }

    pub fn pan(&self, pose: &mut CameraPose, dx_px: f32, dy_px: f32) {
        let forward = pose.target - pose.eye;
        let radius = forward.length();
        let right = forward.cross(Vec3::Y).normalize_or_zero();
        let up = right.cross(forward).normalize_or_zero();
        let shift = (-right * dx_px + up * dy_px) * radius * self.params.pan_speed;
        pose.eye += shift;
        pose.target += shift;
    }
}
