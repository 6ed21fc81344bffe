use book_core::{Camera, CameraPose, CAMERA_ZFAR, CAMERA_ZNEAR};
use glam::{Vec2, Vec3};

/// Build the scene camera for a viewport of `width` x `height` pixels.
#[inline]
pub fn camera_for_viewport(pose: CameraPose, fovy_radians: f32, width: f32, height: f32) -> Camera {
    let aspect = width / height.max(1.0);
    Camera::from_pose(pose, aspect, fovy_radians, CAMERA_ZNEAR, CAMERA_ZFAR)
}

#[inline]
/// Compute a world-space ray from viewport pixel coordinates.
///
/// - `sx`, `sy`: pixel coordinates, origin top-left
/// - `width`, `height`: viewport size in the same pixel units
///
/// Returns `(ray_origin, ray_direction)` in world space.
pub fn screen_to_world_ray(
    camera: &Camera,
    sx: f32,
    sy: f32,
    width: f32,
    height: f32,
) -> (Vec3, Vec3) {
    let ndc_x = (2.0 * sx / width.max(1.0)) - 1.0;
    let ndc_y = 1.0 - (2.0 * sy / height.max(1.0));
    camera.ndc_ray(ndc_x, ndc_y)
}

/// Project a world point to viewport pixels (origin top-left).
///
/// Returns `None` when the point is behind the camera or outside the view
/// volume, so overlays can hide instead of sticking to the screen edge.
pub fn world_to_screen(camera: &Camera, world: Vec3, width: f32, height: f32) -> Option<Vec2> {
    let ndc = camera.project_ndc(world)?;
    if !(0.0..=1.0).contains(&ndc.z) || ndc.x.abs() > 1.0 || ndc.y.abs() > 1.0 {
        return None;
    }
    Some(Vec2::new(
        (ndc.x + 1.0) * 0.5 * width,
        (1.0 - ndc.y) * 0.5 * height,
    ))
}
