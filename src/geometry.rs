//! The `geometry` module turns placed shape descriptors into vertex lists the renderer can
//! upload as-is.
//!
//! Every shape is described in normalized device coordinates, but its size is given in pixels,
//! so generation needs the size of the canvas the shape is going to be drawn on.
//!
//! # Examples
//!
//! ```rust
//! use paintstamp::{generate, Color, ShapeDescriptor, Topology};
//!
//! let circle = ShapeDescriptor::circle((0.0, 0.0), Color::WHITE, 20.0, 12);
//! let geometry = generate(&circle, (400, 300));
//!
//! // Center, twelve boundary vertices and the vertex that closes the fan
//! assert_eq!(geometry.vertices.len(), 14);
//! assert_eq!(geometry.topology, Topology::TriangleFan);
//! ```

use crate::vertex::Vertex;
use crate::Color;
use lyon::math::Point;
use smallvec::SmallVec;
use std::f32::consts::TAU;

/// Circles with fewer segments than this are drawn with this many.
pub const MIN_SEGMENTS: u32 = 3;

/// How the renderer assembles uploaded vertices into triangles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// Every three consecutive vertices form one triangle.
    TriangleList,
    /// Vertex 0 is shared by all triangles; each further pair of neighbours closes one triangle
    /// with it.
    TriangleFan,
}

impl Topology {
    /// Number of triangles `vertex_count` vertices produce under this topology.
    pub fn triangle_count(&self, vertex_count: usize) -> usize {
        match self {
            Topology::TriangleList => vertex_count / 3,
            Topology::TriangleFan => vertex_count.saturating_sub(2),
        }
    }
}

/// The vertices of one shape together with the topology to draw them with.
#[derive(Debug, Clone, PartialEq)]
pub struct Geometry {
    pub vertices: SmallVec<[Vertex; 6]>,
    pub topology: Topology,
}

/// The kind of a placed shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    /// An axis-aligned square made of two triangles.
    Square,
    /// An upward pointing isosceles triangle.
    Triangle,
    /// A circle approximated by a triangle fan with `segments` wedges.
    Circle { segments: u32 },
}

impl ShapeKind {
    /// Number of vertices [`generate`] emits for this kind.
    pub fn vertex_count(&self) -> usize {
        match self {
            ShapeKind::Square => 6,
            ShapeKind::Triangle => 3,
            // center + one vertex per segment + the closing vertex
            ShapeKind::Circle { segments } => (*segments).max(MIN_SEGMENTS) as usize + 2,
        }
    }

    pub fn topology(&self) -> Topology {
        match self {
            ShapeKind::Square | ShapeKind::Triangle => Topology::TriangleList,
            ShapeKind::Circle { .. } => Topology::TriangleFan,
        }
    }
}

/// An immutable record fully specifying one placed shape.
///
/// # Examples
///
/// ```rust
/// use paintstamp::{Color, ShapeDescriptor, ShapeKind};
///
/// let circle = ShapeDescriptor::circle((0.5, -0.5), Color::BLACK, 10.0, 1);
/// assert_eq!(circle.kind(), ShapeKind::Circle { segments: 3 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeDescriptor {
    kind: ShapeKind,
    position: Point,
    color: Color,
    size: f32,
}

impl ShapeDescriptor {
    /// Creates a descriptor of the given kind. Circle segment counts below [`MIN_SEGMENTS`] are
    /// raised to it.
    pub fn new(kind: ShapeKind, position: impl Into<Point>, color: Color, size: f32) -> Self {
        let kind = match kind {
            ShapeKind::Circle { segments } => ShapeKind::Circle {
                segments: segments.max(MIN_SEGMENTS),
            },
            other => other,
        };

        Self {
            kind,
            position: position.into(),
            color,
            size,
        }
    }

    pub fn square(position: impl Into<Point>, color: Color, size: f32) -> Self {
        Self::new(ShapeKind::Square, position, color, size)
    }

    pub fn triangle(position: impl Into<Point>, color: Color, size: f32) -> Self {
        Self::new(ShapeKind::Triangle, position, color, size)
    }

    pub fn circle(position: impl Into<Point>, color: Color, size: f32, segments: u32) -> Self {
        Self::new(ShapeKind::Circle { segments }, position, color, size)
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// Center of the shape in normalized device coordinates.
    pub fn position(&self) -> Point {
        self.position
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Size of the shape in pixels.
    pub fn size(&self) -> f32 {
        self.size
    }
}

/// Half extents of a shape of `size` pixels, in normalized device units.
///
/// The full extent is `size / dimension * 2`, so the half extent is `size / dimension`.
pub fn half_extents(size: f32, canvas_size: (u32, u32)) -> (f32, f32) {
    let width = canvas_size.0.max(1) as f32;
    let height = canvas_size.1.max(1) as f32;
    (size / width, size / height)
}

/// Generates the vertices for `shape` drawn on a canvas of `canvas_size` physical pixels.
pub fn generate(shape: &ShapeDescriptor, canvas_size: (u32, u32)) -> Geometry {
    let (hx, hy) = half_extents(shape.size, canvas_size);
    let (x, y) = (shape.position.x, shape.position.y);

    let mut vertices = SmallVec::with_capacity(shape.kind.vertex_count());

    match shape.kind {
        ShapeKind::Square => {
            vertices.extend([
                Vertex::new(x - hx, y - hy),
                Vertex::new(x + hx, y - hy),
                Vertex::new(x + hx, y + hy),
                Vertex::new(x - hx, y - hy),
                Vertex::new(x + hx, y + hy),
                Vertex::new(x - hx, y + hy),
            ]);
        }
        ShapeKind::Triangle => {
            vertices.extend([
                Vertex::new(x, y + hy),
                Vertex::new(x - hx, y - hy),
                Vertex::new(x + hx, y - hy),
            ]);
        }
        ShapeKind::Circle { segments } => {
            let radius = hx.min(hy);
            let segments = segments.max(MIN_SEGMENTS);

            vertices.push(Vertex::new(x, y));
            // i == segments lands back on angle 0 and closes the fan
            vertices.extend((0..=segments).map(|i| {
                let angle = TAU * i as f32 / segments as f32;
                Vertex::new(x + radius * angle.cos(), y + radius * angle.sin())
            }));
        }
    }

    Geometry {
        vertices,
        topology: shape.kind.topology(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANVAS: (u32, u32) = (400, 300);

    fn assert_close(actual: f32, expected: f32) {
        assert!(
            (actual - expected).abs() < 1e-5,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn square_is_two_triangles_around_the_center() {
        let square = ShapeDescriptor::square((0.0, 0.0), Color::WHITE, 20.0);
        let geometry = generate(&square, CANVAS);

        assert_eq!(geometry.topology, Topology::TriangleList);
        assert_eq!(geometry.vertices.len(), 6);

        let min_x = geometry.vertices.iter().map(Vertex::x).fold(f32::MAX, f32::min);
        let max_x = geometry.vertices.iter().map(Vertex::x).fold(f32::MIN, f32::max);
        let min_y = geometry.vertices.iter().map(Vertex::y).fold(f32::MAX, f32::min);
        let max_y = geometry.vertices.iter().map(Vertex::y).fold(f32::MIN, f32::max);

        assert_close(min_x, -0.05);
        assert_close(max_x, 0.05);
        assert_close(min_y, -20.0 / 300.0);
        assert_close(max_y, 20.0 / 300.0);
    }

    #[test]
    fn triangle_points_up() {
        let triangle = ShapeDescriptor::triangle((0.25, -0.5), Color::WHITE, 40.0);
        let geometry = generate(&triangle, CANVAS);

        assert_eq!(geometry.vertices.len(), 3);
        let apex = geometry.vertices[0];
        assert_close(apex.x(), 0.25);
        assert_close(apex.y(), -0.5 + 40.0 / 300.0);
        assert_close(geometry.vertices[1].y(), geometry.vertices[2].y());
        assert!(geometry.vertices[1].x() < geometry.vertices[2].x());
    }

    #[test]
    fn vertex_count_depends_only_on_kind_and_segments() {
        for size in [1.0, 20.0, 333.0] {
            for position in [(0.0, 0.0), (-1.0, 1.0), (0.3, 0.7)] {
                let square = ShapeDescriptor::square(position, Color::BLACK, size);
                let triangle = ShapeDescriptor::triangle(position, Color::BLACK, size);
                assert_eq!(generate(&square, CANVAS).vertices.len(), 6);
                assert_eq!(generate(&triangle, CANVAS).vertices.len(), 3);

                for segments in [0, 1, 3, 12, 100] {
                    let circle = ShapeDescriptor::circle(position, Color::BLACK, size, segments);
                    let expected = segments.max(MIN_SEGMENTS) as usize + 2;
                    assert_eq!(generate(&circle, CANVAS).vertices.len(), expected);
                    assert_eq!(circle.kind().vertex_count(), expected);
                }
            }
        }
    }

    #[test]
    fn circle_fan_closes_on_its_first_boundary_vertex() {
        for segments in [3, 7, 12, 64] {
            let circle = ShapeDescriptor::circle((0.1, 0.2), Color::WHITE, 50.0, segments);
            let geometry = generate(&circle, CANVAS);

            let first = geometry.vertices[1];
            let last = geometry.vertices[geometry.vertices.len() - 1];
            assert_close(first.x(), last.x());
            assert_close(first.y(), last.y());
        }
    }

    #[test]
    fn circle_radius_uses_the_smaller_half_extent() {
        let circle = ShapeDescriptor::circle((0.0, 0.0), Color::WHITE, 30.0, 4);
        let geometry = generate(&circle, CANVAS);

        let center = geometry.vertices[0];
        assert_close(center.x(), 0.0);
        assert_close(center.y(), 0.0);

        // 30 / 400 is smaller than 30 / 300
        let radius = 30.0 / 400.0;
        assert_close(geometry.vertices[1].x(), radius);
        assert_close(geometry.vertices[2].y(), radius);
    }

    #[test]
    fn segments_below_three_are_clamped() {
        let circle = ShapeDescriptor::circle((0.0, 0.0), Color::WHITE, 10.0, 0);
        assert_eq!(circle.kind(), ShapeKind::Circle { segments: 3 });
    }

    #[test]
    fn fan_triangle_count() {
        assert_eq!(Topology::TriangleFan.triangle_count(14), 12);
        assert_eq!(Topology::TriangleList.triangle_count(6), 2);
        assert_eq!(Topology::TriangleFan.triangle_count(1), 0);
    }
}
