//! Book geometry in book-local space.
//!
//! The book origin is the centre of the closed page block; the spine runs
//! along Z at `x = -6`. Parts flagged `on_cover` are expressed relative to
//! the cover hinge and follow the cover angle.

use glam::{Mat4, Quat, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BookPart {
    pub center: Vec3,
    pub size: Vec3,
    pub color: [f32; 3],
    pub on_cover: bool,
    pub emissive: f32,
}

const fn part(center: [f32; 3], size: [f32; 3], color: [f32; 3]) -> BookPart {
    BookPart {
        center: Vec3::new(center[0], center[1], center[2]),
        size: Vec3::new(size[0], size[1], size[2]),
        color,
        on_cover: false,
        emissive: 0.0,
    }
}

const fn cover_part(center: [f32; 3], size: [f32; 3], color: [f32; 3], emissive: f32) -> BookPart {
    BookPart {
        center: Vec3::new(center[0], center[1], center[2]),
        size: Vec3::new(size[0], size[1], size[2]),
        color,
        on_cover: true,
        emissive,
    }
}

const COVER_RGB: [f32; 3] = [0.165, 0.165, 0.165];
const PAGE_EDGE_RGB: [f32; 3] = [0.941, 0.941, 0.941];
const PAGE_MID_RGB: [f32; 3] = [0.961, 0.961, 0.961];
const PAGE_TOP_RGB: [f32; 3] = [1.0, 1.0, 1.0];
const FORE_EDGE_OUTER_RGB: [f32; 3] = [0.878, 0.878, 0.878];
const FORE_EDGE_MID_RGB: [f32; 3] = [0.91, 0.91, 0.91];
const LINE_RGB: [f32; 3] = [0.816, 0.816, 0.816];

/// Hinge of the top cover in book space.
pub const COVER_PIVOT: Vec3 = Vec3::new(-6.0, 0.9, 0.0);

pub const BOOK_PARTS: &[BookPart] = &[
    // bottom cover and spine
    part([0.0, -0.9, 0.0], [12.0, 0.5, 14.5], COVER_RGB),
    part([-6.0, 0.0, 0.0], [0.7, 2.3, 14.5], COVER_RGB),
    // page block
    part([0.0, -0.5, 0.0], [11.8, 0.22, 14.0], PAGE_EDGE_RGB),
    part([0.0, -0.25, 0.0], [11.8, 0.22, 14.0], PAGE_MID_RGB),
    part([0.0, 0.0, 0.0], [11.8, 0.22, 14.0], PAGE_TOP_RGB),
    part([0.0, 0.25, 0.0], [11.8, 0.22, 14.0], PAGE_MID_RGB),
    part([0.0, 0.5, 0.0], [11.8, 0.22, 14.0], PAGE_EDGE_RGB),
    // fore edge
    part([6.0, -0.5, 0.0], [0.3, 0.22, 14.0], FORE_EDGE_OUTER_RGB),
    part([6.0, -0.25, 0.0], [0.3, 0.22, 14.0], FORE_EDGE_MID_RGB),
    part([6.0, 0.0, 0.0], [0.3, 0.22, 14.0], PAGE_EDGE_RGB),
    part([6.0, 0.25, 0.0], [0.3, 0.22, 14.0], FORE_EDGE_MID_RGB),
    part([6.0, 0.5, 0.0], [0.3, 0.22, 14.0], FORE_EDGE_OUTER_RGB),
    // line shadows on the pages
    part([0.0, -0.4, -2.0], [9.0, 0.02, 0.4], LINE_RGB),
    part([0.0, 0.1, -1.0], [9.0, 0.02, 0.4], LINE_RGB),
    part([0.0, 0.4, -3.0], [9.0, 0.02, 0.4], LINE_RGB),
    // top cover and the index page glued to its inside
    cover_part([6.0, 0.0, 0.0], [12.0, 0.5, 14.5], COVER_RGB, 0.0),
    cover_part([6.0, -0.26, 0.0], [11.0, 0.01, 14.0], PAGE_TOP_RGB, 1.0),
];

// Overlay anchors in book space
pub const TITLE_ANCHOR: Vec3 = Vec3::new(0.0, 1.17, -2.0);
pub const OPEN_BUTTON_ANCHOR: Vec3 = Vec3::new(1.0, 1.17, 4.0);
/// Centre of the open spread; the camera reads the book from above it.
pub const SPREAD_CENTER: Vec3 = Vec3::new(-6.0, 0.9, 0.0);
/// Centre of the index page once the cover lies open.
pub const INDEX_ANCHOR: Vec3 = Vec3::new(-12.0, 1.17, 0.0);

pub const BOOK_BOUNDING_RADIUS: f32 = 9.5;

pub fn book_rotation(yaw: f32, tilt_x: f32, tilt_z: f32) -> Quat {
    Quat::from_euler(glam::EulerRot::XYZ, tilt_x, yaw, tilt_z)
}

pub fn book_transform(position: Vec3, rotation: Quat) -> Mat4 {
    Mat4::from_rotation_translation(rotation, position)
}

/// Cover hinge transform in book space for a cover angle.
pub fn cover_transform(angle: f32) -> Mat4 {
    Mat4::from_translation(COVER_PIVOT) * Mat4::from_rotation_z(angle)
}

/// Local model matrix of a part (book space), including its scale.
pub fn part_transform(part: &BookPart, cover_angle: f32) -> Mat4 {
    let local = Mat4::from_translation(part.center) * Mat4::from_scale(part.size);
    if part.on_cover {
        cover_transform(cover_angle) * local
    } else {
        local
    }
}
