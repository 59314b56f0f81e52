use crate::geometry::{generate, Geometry};
use crate::{Color, Scene};

/// Something shapes can be rasterized onto.
///
/// [`Renderer`](crate::Renderer) is the GPU implementation. Each [`DrawTarget::draw`] call is one
/// independent draw call; implementations must not batch or reorder them.
pub trait DrawTarget {
    /// Size of the drawable area in physical pixels.
    fn size(&self) -> (u32, u32);

    /// Fills the whole target with its clear color.
    fn clear(&mut self);

    /// Draws `geometry` filled with a single flat `color`.
    fn draw(&mut self, geometry: &Geometry, color: Color);

    /// Clears the target and draws every shape of `scene` in insertion order, one draw call per
    /// shape.
    fn redraw(&mut self, scene: &Scene) {
        self.clear();

        let size = self.size();
        for shape in scene.all() {
            let geometry = generate(shape, size);
            self.draw(&geometry, shape.color());
        }
    }
}
