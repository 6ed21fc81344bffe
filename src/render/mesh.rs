// Unit cube geometry and per-part instance data for the book.

use crate::constants::{GROUND_RGB, GROUND_SIZE, GROUND_Y};
use book_core::layout::{self, BOOK_PARTS};
use book_core::SceneFrame;
use glam::{Mat4, Vec3};

#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// One drawn box: world matrix plus rgb colour; `color[3]` is the emissive
/// weight scaled by the page light.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct InstanceData {
    pub model: [[f32; 4]; 4],
    pub color: [f32; 4],
}

/// Instances drawn per frame: the ground plus every book part.
pub const MAX_INSTANCES: usize = BOOK_PARTS.len() + 1;

const GROUND_THICKNESS: f32 = 0.02;

/// Unit cube centred on the origin, four vertices per face so normals stay
/// flat.
pub fn cube_vertices() -> [Vertex; 24] {
    const FACES: [([f32; 3], [f32; 3], [f32; 3]); 6] = [
        // normal, u axis, v axis (u x v == normal)
        ([1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]),
        ([-1.0, 0.0, 0.0], [0.0, 0.0, 1.0], [0.0, 1.0, 0.0]),
        ([0.0, 1.0, 0.0], [0.0, 0.0, 1.0], [1.0, 0.0, 0.0]),
        ([0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]),
        ([0.0, 0.0, 1.0], [1.0, 0.0, 0.0], [0.0, 1.0, 0.0]),
        ([0.0, 0.0, -1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]),
    ];
    let mut out = [Vertex {
        position: [0.0; 3],
        normal: [0.0; 3],
    }; 24];
    for (f, (n, u, v)) in FACES.iter().enumerate() {
        let (n, u, v) = (Vec3::from(*n), Vec3::from(*u), Vec3::from(*v));
        let corners = [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)];
        for (c, (su, sv)) in corners.iter().enumerate() {
            let p = (n + u * *su + v * *sv) * 0.5;
            out[f * 4 + c] = Vertex {
                position: p.to_array(),
                normal: n.to_array(),
            };
        }
    }
    out
}

/// Two counter-clockwise triangles per face.
pub fn cube_indices() -> [u16; 36] {
    let mut out = [0u16; 36];
    for f in 0..6u16 {
        let base = f * 4;
        let i = f as usize * 6;
        out[i..i + 6].copy_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
    }
    out
}

fn instance(model: Mat4, rgb: [f32; 3], emissive: f32) -> InstanceData {
    InstanceData {
        model: model.to_cols_array_2d(),
        color: [rgb[0], rgb[1], rgb[2], emissive],
    }
}

/// Fill `out` with the ground and the book parts for `frame`.
///
/// Parts that carry page content (emissive > 0) are drawn only while the
/// page is visible, and glow in proportion to the page light.
pub fn book_instances(frame: &SceneFrame<'_>, out: &mut Vec<InstanceData>) {
    out.clear();
    let ground = Mat4::from_translation(Vec3::new(0.0, GROUND_Y - GROUND_THICKNESS * 0.5, 0.0))
        * Mat4::from_scale(Vec3::new(GROUND_SIZE, GROUND_THICKNESS, GROUND_SIZE));
    out.push(instance(ground, GROUND_RGB, 0.0));

    let book = frame.book_matrix();
    let glow = (frame.page_light / book_core::PAGE_LIGHT_MAX).clamp(0.0, 1.0);
    for part in BOOK_PARTS {
        if part.emissive > 0.0 && !frame.page_visible {
            continue;
        }
        let model = book * layout::part_transform(part, frame.cover_angle);
        out.push(instance(model, part.color, part.emissive * glow));
    }
}
