use crate::ShapeDescriptor;

/// The ordered list of shapes placed on the canvas.
///
/// Insertion order is paint order: later shapes are drawn on top of earlier ones. Shapes can only
/// be appended, and the only way to remove them is [`Scene::clear`].
///
/// # Examples
///
/// ```rust
/// use paintstamp::{Color, Scene, ShapeDescriptor};
///
/// let mut scene = Scene::new();
/// scene.append(ShapeDescriptor::square((0.0, 0.0), Color::WHITE, 20.0));
/// scene.append(ShapeDescriptor::triangle((0.5, 0.5), Color::BLACK, 10.0));
/// assert_eq!(scene.len(), 2);
///
/// scene.clear();
/// assert!(scene.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Scene {
    shapes: Vec<ShapeDescriptor>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn append(&mut self, shape: ShapeDescriptor) {
        self.shapes.push(shape);
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// All placed shapes in paint order.
    #[inline]
    pub fn all(&self) -> &[ShapeDescriptor] {
        &self.shapes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

impl Extend<ShapeDescriptor> for Scene {
    fn extend<T: IntoIterator<Item = ShapeDescriptor>>(&mut self, iter: T) {
        self.shapes.extend(iter);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color;

    #[test]
    fn all_returns_shapes_in_append_order() {
        let mut scene = Scene::new();
        let shapes: Vec<_> = (0..10)
            .map(|i| ShapeDescriptor::square((i as f32 / 10.0, 0.0), Color::WHITE, i as f32))
            .collect();

        for shape in &shapes {
            scene.append(*shape);
        }

        assert_eq!(scene.all(), shapes.as_slice());
    }

    #[test]
    fn clear_drops_everything_and_allows_reuse() {
        let mut scene = Scene::new();
        scene.extend([
            ShapeDescriptor::square((0.0, 0.0), Color::WHITE, 5.0),
            ShapeDescriptor::circle((0.0, 0.0), Color::WHITE, 5.0, 8),
        ]);
        scene.clear();
        assert!(scene.is_empty());

        let triangle = ShapeDescriptor::triangle((0.1, 0.1), Color::BLACK, 5.0);
        scene.append(triangle);
        assert_eq!(scene.all(), &[triangle]);
    }
}
