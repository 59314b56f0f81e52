//! A fixed picture of a cockatiel perched on a branch, drawn straight from a constant table of
//! triangles. It never goes through the [`Scene`](crate::Scene).

use crate::geometry::{Geometry, Topology};
use crate::target::DrawTarget;
use crate::vertex::Vertex;
use crate::Color;
use smallvec::SmallVec;
use tracing::debug;

/// One literal triangle of the fixed picture, in normalized device coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PictureTriangle {
    pub points: [[f32; 2]; 3],
    pub color: Color,
}

impl PictureTriangle {
    const fn new(coords: [f32; 6], color: Color) -> Self {
        Self {
            points: [
                [coords[0], coords[1]],
                [coords[2], coords[3]],
                [coords[4], coords[5]],
            ],
            color,
        }
    }

    pub fn geometry(&self) -> Geometry {
        let vertices: SmallVec<[Vertex; 6]> = self
            .points
            .iter()
            .map(|[x, y]| Vertex::new(*x, *y))
            .collect();

        Geometry {
            vertices,
            topology: Topology::TriangleList,
        }
    }
}

// Plumage
const YELLOW: Color = Color([1.0, 0.92, 0.18, 1.0]);
const YELLOW_SHADE: Color = Color([0.92, 0.82, 0.10, 1.0]);
const CHEEK: Color = Color([0.95, 0.35, 0.20, 1.0]);
const DARK: Color = Color([0.10, 0.10, 0.10, 1.0]);

// Branch
const BARK: Color = Color([0.55, 0.32, 0.14, 1.0]);
const BARK_SHADE: Color = Color([0.45, 0.26, 0.12, 1.0]);

// Leaves
const LEAF_LIGHT: Color = Color([0.72, 0.84, 0.62, 1.0]);
const LEAF: Color = Color([0.45, 0.70, 0.36, 1.0]);
const LEAF_DARK: Color = Color([0.30, 0.55, 0.28, 1.0]);

// Body
const GREY_LIGHT: Color = Color([0.80, 0.80, 0.80, 1.0]);
const GREY: Color = Color([0.62, 0.62, 0.62, 1.0]);
const GREY_DARK: Color = Color([0.50, 0.50, 0.50, 1.0]);

/// Every triangle of the picture in paint order.
pub const COCKATIEL: [PictureTriangle; 45] = [
    // branch
    PictureTriangle::new([-0.95, -0.12, 0.98, -0.12, -0.95, -0.22], BARK),
    PictureTriangle::new([0.98, -0.12, -0.95, -0.22, 0.98, -0.22], BARK_SHADE),
    PictureTriangle::new([0.42, -0.12, 0.70, -0.06, 0.42, -0.22], BARK_SHADE),
    PictureTriangle::new([0.70, -0.06, 0.42, -0.22, 0.74, -0.18], BARK),
    // leaves
    PictureTriangle::new([0.62, 0.02, 0.82, 0.16, 0.66, 0.22], LEAF_LIGHT),
    PictureTriangle::new([0.62, 0.02, 0.66, 0.22, 0.52, 0.12], LEAF),
    PictureTriangle::new([0.74, 0.02, 0.96, 0.02, 0.80, 0.12], LEAF_LIGHT),
    PictureTriangle::new([0.74, 0.02, 0.80, 0.12, 0.62, 0.08], LEAF_DARK),
    PictureTriangle::new([0.62, -0.20, 0.90, -0.28, 0.76, -0.06], LEAF_LIGHT),
    PictureTriangle::new([0.62, -0.20, 0.76, -0.06, 0.54, -0.02], LEAF),
    PictureTriangle::new([0.46, -0.04, 0.58, 0.10, 0.44, 0.18], LEAF_LIGHT),
    PictureTriangle::new([0.46, -0.04, 0.44, 0.18, 0.34, 0.06], LEAF_DARK),
    // tail
    PictureTriangle::new([-0.98, -0.78, -0.44, -0.28, -0.26, -0.56], GREY_DARK),
    PictureTriangle::new([-0.26, -0.56, -0.44, -0.28, -0.08, -0.44], GREY),
    PictureTriangle::new([-0.44, -0.28, -0.18, -0.18, -0.08, -0.44], GREY_LIGHT),
    PictureTriangle::new([-1.10, -0.86, -0.98, -0.78, -0.94, -0.74], GREY),
    PictureTriangle::new([-1.18, -0.92, -1.10, -0.86, -1.06, -0.82], GREY_DARK),
    // body
    PictureTriangle::new([-0.42, -0.20, -0.12, 0.24, 0.22, -0.12], GREY_LIGHT),
    PictureTriangle::new([-0.42, -0.20, 0.22, -0.12, -0.10, -0.44], GREY),
    PictureTriangle::new([-0.10, -0.44, 0.22, -0.12, 0.10, -0.50], GREY_DARK),
    PictureTriangle::new([-0.12, 0.24, 0.06, 0.20, -0.02, 0.04], GREY_LIGHT),
    PictureTriangle::new([-0.12, 0.24, -0.02, 0.04, -0.18, 0.08], GREY),
    // wing
    PictureTriangle::new([-0.26, -0.06, -0.02, 0.10, -0.06, -0.22], GREY_DARK),
    PictureTriangle::new([-0.06, -0.22, -0.02, 0.10, 0.16, -0.10], GREY),
    PictureTriangle::new([-0.22, -0.30, 0.02, -0.34, -0.10, -0.50], GREY_LIGHT),
    PictureTriangle::new([0.02, -0.34, 0.16, -0.10, -0.10, -0.50], GREY),
    PictureTriangle::new([-0.08, -0.18, 0.12, -0.18, 0.06, -0.06], GREY),
    PictureTriangle::new([0.06, -0.06, 0.12, -0.18, 0.22, -0.12], GREY_DARK),
    // neck
    PictureTriangle::new([0.06, 0.22, 0.20, 0.18, 0.14, 0.06], GREY_LIGHT),
    PictureTriangle::new([0.14, 0.06, 0.20, 0.18, 0.28, 0.10], GREY),
    PictureTriangle::new([0.02, 0.18, 0.06, 0.22, 0.14, 0.06], GREY_DARK),
    // head
    PictureTriangle::new([0.14, 0.50, 0.40, 0.42, 0.22, 0.24], YELLOW),
    PictureTriangle::new([0.14, 0.50, 0.22, 0.24, 0.06, 0.36], YELLOW_SHADE),
    PictureTriangle::new([0.40, 0.42, 0.34, 0.26, 0.22, 0.24], YELLOW_SHADE),
    // crest
    PictureTriangle::new([0.10, 0.54, 0.22, 0.82, 0.16, 0.52], YELLOW),
    PictureTriangle::new([0.16, 0.52, 0.30, 0.74, 0.22, 0.48], YELLOW_SHADE),
    PictureTriangle::new([0.04, 0.52, 0.14, 0.70, 0.10, 0.48], YELLOW_SHADE),
    // cheek
    PictureTriangle::new([0.18, 0.38, 0.30, 0.34, 0.22, 0.24], CHEEK),
    PictureTriangle::new([0.18, 0.38, 0.22, 0.24, 0.14, 0.30], CHEEK),
    // beak
    PictureTriangle::new([0.38, 0.38, 0.52, 0.32, 0.36, 0.26], DARK),
    PictureTriangle::new([0.36, 0.26, 0.52, 0.32, 0.46, 0.20], DARK),
    // eye
    PictureTriangle::new([0.28, 0.40, 0.30, 0.42, 0.32, 0.40], DARK),
    PictureTriangle::new([0.28, 0.40, 0.32, 0.40, 0.30, 0.38], DARK),
    // feet
    PictureTriangle::new([0.00, -0.20, 0.10, -0.20, 0.04, -0.12], GREY_DARK),
    PictureTriangle::new([0.12, -0.20, 0.24, -0.20, 0.18, -0.12], GREY_DARK),
];

/// Clears `target` and draws the fixed picture, one draw call per triangle.
pub fn draw_fixed_picture<T: DrawTarget + ?Sized>(target: &mut T) {
    debug!("Drawing fixed picture ({} triangles)", COCKATIEL.len());

    target.clear();
    for triangle in COCKATIEL.iter() {
        target.draw(&triangle.geometry(), triangle.color);
    }
}
