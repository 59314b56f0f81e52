use paintstamp::{Color, DrawTarget, Geometry, Topology, Vertex};

/// One draw call as seen by a [`RecordingTarget`].
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedDraw {
    pub topology: Topology,
    pub vertices: Vec<Vertex>,
    pub color: Color,
}

/// A [`DrawTarget`] that rasterizes nothing and remembers every call instead, so draw order and
/// draw counts can be checked without a GPU.
#[derive(Debug, Clone)]
pub struct RecordingTarget {
    size: (u32, u32),
    /// Number of `clear` calls so far
    pub clears: usize,
    /// Draw calls issued since the last clear, in order
    pub draws: Vec<RecordedDraw>,
}

impl RecordingTarget {
    pub fn new(size: (u32, u32)) -> Self {
        Self {
            size,
            clears: 0,
            draws: Vec::new(),
        }
    }

    pub fn colors(&self) -> Vec<Color> {
        self.draws.iter().map(|draw| draw.color).collect()
    }
}

impl DrawTarget for RecordingTarget {
    fn size(&self) -> (u32, u32) {
        self.size
    }

    fn clear(&mut self) {
        self.clears += 1;
        self.draws.clear();
    }

    fn draw(&mut self, geometry: &Geometry, color: Color) {
        self.draws.push(RecordedDraw {
            topology: geometry.topology,
            vertices: geometry.vertices.to_vec(),
            color,
        });
    }
}
