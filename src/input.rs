//! Pointer handling: converts pixel positions into normalized device coordinates and decides
//! where new shapes are stamped.
//!
//! The controller is a two state machine. A pointer press stamps one shape and starts a drag;
//! every move while the primary button is held stamps shapes along the straight segment from the
//! previous position, no farther apart than the stroke step; release or leaving the canvas ends
//! the drag.

use crate::geometry::{ShapeDescriptor, ShapeKind, MIN_SEGMENTS};
use crate::{Color, Scene};
use lyon::math::Point;
use smallvec::SmallVec;
use tracing::trace;

/// Default distance between consecutive stamps of a drag, in normalized device units.
pub const DEFAULT_STROKE_STEP: f32 = 0.02;

/// Smallest accepted stroke step. A 1 px move on a 400 px wide canvas is 0.005 units.
pub const MIN_STROKE_STEP: f32 = 0.001;

/// Stamp color of a new session.
pub const DEFAULT_COLOR: Color = Color([0.5, 0.5, 1.0, 1.0]);

/// Stamp size of a new session, in pixels.
pub const DEFAULT_SIZE: f32 = 20.0;

/// Circle segment count of a new session.
pub const DEFAULT_SEGMENTS: u32 = 12;

// Absorbs the rounding of `distance / step` so a segment that is an exact multiple of the step
// does not get an extra stamp.
const STEP_EPSILON: f32 = 1e-4;

/// The set of pointer buttons held while an event was delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct PointerButtons(pub u8);

impl PointerButtons {
    pub const NONE: Self = Self(0);
    /// Usually the left mouse button.
    pub const PRIMARY: Self = Self(1);
    /// Usually the right mouse button.
    pub const SECONDARY: Self = Self(1 << 1);
    /// Usually the middle mouse button.
    pub const AUXILIARY: Self = Self(1 << 2);

    #[inline]
    pub fn contains(&self, other: PointerButtons) -> bool {
        self.0 & other.0 == other.0
    }

    #[inline]
    pub fn insert(&mut self, other: PointerButtons) {
        self.0 |= other.0;
    }

    #[inline]
    pub fn remove(&mut self, other: PointerButtons) {
        self.0 &= !other.0;
    }

    #[inline]
    pub fn is_primary_held(&self) -> bool {
        self.contains(Self::PRIMARY)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    Down,
    Move,
    Up,
    Leave,
}

/// A pointer event in pixels relative to the top-left corner of the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub x: f32,
    pub y: f32,
    pub buttons: PointerButtons,
}

impl PointerEvent {
    pub fn new(kind: PointerEventKind, x: f32, y: f32, buttons: PointerButtons) -> Self {
        Self {
            kind,
            x,
            y,
            buttons,
        }
    }

    pub fn down(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Down, x, y, PointerButtons::PRIMARY)
    }

    pub fn moved(x: f32, y: f32, buttons: PointerButtons) -> Self {
        Self::new(PointerEventKind::Move, x, y, buttons)
    }

    pub fn up(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Up, x, y, PointerButtons::NONE)
    }

    pub fn leave() -> Self {
        Self::new(PointerEventKind::Leave, 0.0, 0.0, PointerButtons::NONE)
    }
}

/// The shape type new stamps are created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    Square,
    Triangle,
    Circle,
}

impl Tool {
    pub fn shape_kind(&self, segments: u32) -> ShapeKind {
        match self {
            Tool::Square => ShapeKind::Square,
            Tool::Triangle => ShapeKind::Triangle,
            Tool::Circle => ShapeKind::Circle { segments },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Dragging {
        /// Last position a shape was stamped at.
        last: Point,
    },
}

/// Maps a pixel position relative to the canvas top-left corner to normalized device
/// coordinates. The Y axis is flipped so +Y points up.
///
/// # Examples
///
/// ```rust
/// use lyon::math::point;
/// use paintstamp::pixel_to_ndc;
///
/// assert_eq!(pixel_to_ndc((200.0, 150.0), (400, 300)), point(0.0, 0.0));
/// assert_eq!(pixel_to_ndc((0.0, 0.0), (400, 300)), point(-1.0, 1.0));
/// ```
pub fn pixel_to_ndc(pixel: (f32, f32), canvas_size: (u32, u32)) -> Point {
    let half_width = canvas_size.0.max(1) as f32 / 2.0;
    let half_height = canvas_size.1.max(1) as f32 / 2.0;

    Point::new(
        (pixel.0 - half_width) / half_width,
        (half_height - pixel.1) / half_height,
    )
}

/// Positions to stamp at when the pointer travels from `from` to `to`.
///
/// The segment is split into `max(1, ceil(distance / step))` equal steps and one position is
/// returned per step end, so `to` is always included and `from` never is. Steps below
/// [`MIN_STROKE_STEP`], including negative and NaN steps, are raised to it.
pub fn stroke_points(from: Point, to: Point, step: f32) -> SmallVec<[Point; 8]> {
    let step = step.max(MIN_STROKE_STEP);
    let distance = from.distance_to(to);
    let steps = ((distance / step) - STEP_EPSILON).ceil().max(1.0) as u32;

    (1..=steps)
        .map(|i| from.lerp(to, i as f32 / steps as f32))
        .collect()
}

/// Everything the user has currently selected, plus the drag state machine.
#[derive(Debug, Clone, PartialEq)]
pub struct InputState {
    pub tool: Tool,
    pub color: Color,
    /// Stamp size in pixels.
    pub size: f32,
    /// Segment count used for circles.
    pub segments: u32,
    pub stroke_step: f32,
    drag: DragState,
}

impl Default for InputState {
    fn default() -> Self {
        Self::new(
            Tool::Square,
            DEFAULT_COLOR,
            DEFAULT_SIZE,
            DEFAULT_SEGMENTS,
            DEFAULT_STROKE_STEP,
        )
    }
}

impl InputState {
    /// A selection with no drag in progress. `stroke_step` is raised to [`MIN_STROKE_STEP`].
    pub fn new(tool: Tool, color: Color, size: f32, segments: u32, stroke_step: f32) -> Self {
        Self {
            tool,
            color,
            size,
            segments,
            stroke_step: stroke_step.max(MIN_STROKE_STEP),
            drag: DragState::Idle,
        }
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.drag, DragState::Dragging { .. })
    }

    /// A descriptor for a stamp at `position` using the current selection.
    pub fn stamp_at(&self, position: Point) -> ShapeDescriptor {
        ShapeDescriptor::new(
            self.tool.shape_kind(self.segments.max(MIN_SEGMENTS)),
            position,
            self.color,
            self.size,
        )
    }

    /// Feeds one pointer event through the drag state machine, appending stamps to `scene`.
    ///
    /// Returns `true` when the canvas needs to be redrawn.
    pub fn handle_pointer(
        &mut self,
        event: &PointerEvent,
        canvas_size: (u32, u32),
        scene: &mut Scene,
    ) -> bool {
        match (event.kind, self.drag) {
            (PointerEventKind::Down, _) => {
                let position = pixel_to_ndc((event.x, event.y), canvas_size);
                scene.append(self.stamp_at(position));
                self.drag = DragState::Dragging { last: position };
                trace!("Drag started at {:?}", position);
                true
            }
            (PointerEventKind::Move, DragState::Dragging { last }) => {
                if !event.buttons.is_primary_held() {
                    return false;
                }

                let position = pixel_to_ndc((event.x, event.y), canvas_size);
                let points = stroke_points(last, position, self.stroke_step);
                trace!("Stamping {} shapes along the drag", points.len());
                scene.extend(points.into_iter().map(|point| self.stamp_at(point)));

                self.drag = DragState::Dragging { last: position };
                true
            }
            (PointerEventKind::Move, DragState::Idle) => false,
            (PointerEventKind::Up | PointerEventKind::Leave, _) => {
                self.drag = DragState::Idle;
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANVAS: (u32, u32) = (400, 300);

    fn assert_point_close(actual: Point, expected: (f32, f32)) {
        assert!(
            (actual.x - expected.0).abs() < 1e-5 && (actual.y - expected.1).abs() < 1e-5,
            "expected {expected:?}, got {actual:?}"
        );
    }

    fn ndc_to_pixel(x: f32, y: f32) -> (f32, f32) {
        let (w, h) = (CANVAS.0 as f32 / 2.0, CANVAS.1 as f32 / 2.0);
        (x * w + w, h - y * h)
    }

    #[test]
    fn pixel_conversion_maps_center_and_corners() {
        assert_point_close(pixel_to_ndc((200.0, 150.0), CANVAS), (0.0, 0.0));
        assert_point_close(pixel_to_ndc((0.0, 0.0), CANVAS), (-1.0, 1.0));
        assert_point_close(pixel_to_ndc((400.0, 300.0), CANVAS), (1.0, -1.0));
        assert_point_close(pixel_to_ndc((300.0, 75.0), CANVAS), (0.5, 0.5));
    }

    #[test]
    fn stroke_of_five_steps_is_evenly_spaced() {
        let points = stroke_points(Point::new(0.0, 0.0), Point::new(0.0, 0.1), 0.02);

        assert_eq!(points.len(), 5);
        for (point, expected_y) in points.iter().zip([0.02, 0.04, 0.06, 0.08, 0.1]) {
            assert_point_close(*point, (0.0, expected_y));
        }
    }

    #[test]
    fn short_moves_stamp_once_at_the_destination() {
        let points = stroke_points(Point::new(0.1, 0.1), Point::new(0.11, 0.1), 0.02);
        assert_eq!(points.len(), 1);
        assert_point_close(points[0], (0.11, 0.1));

        let in_place = stroke_points(Point::new(0.1, 0.1), Point::new(0.1, 0.1), 0.02);
        assert_eq!(in_place.len(), 1);
    }

    #[test]
    fn tiny_and_negative_steps_are_raised_to_the_minimum() {
        let from = Point::new(-1.0, 0.0);
        let to = Point::new(1.0, 0.0);
        let expected = (2.0 / MIN_STROKE_STEP).round() as usize;

        for step in [1e-7, 0.0, -0.02, f32::NAN] {
            let points = stroke_points(from, to, step);
            assert!(
                points.len().abs_diff(expected) <= 1,
                "step {step} produced {} points",
                points.len(),
            );
        }

        let input = InputState::new(Tool::Square, DEFAULT_COLOR, DEFAULT_SIZE, 3, 1e-7);
        assert_eq!(input.stroke_step, MIN_STROKE_STEP);
    }

    #[test]
    fn stamps_are_never_farther_apart_than_the_step() {
        let from = Point::new(-0.9, 0.3);
        let to = Point::new(0.7, -0.45);
        let points = stroke_points(from, to, 0.02);

        let mut previous = from;
        for point in points.iter() {
            assert!(previous.distance_to(*point) <= 0.02 + 1e-5);
            previous = *point;
        }
        assert_point_close(previous, (0.7, -0.45));
    }

    #[test]
    fn pointer_down_stamps_and_starts_dragging() {
        let mut input = InputState::default();
        let mut scene = Scene::new();

        let redraw = input.handle_pointer(&PointerEvent::down(200.0, 150.0), CANVAS, &mut scene);

        assert!(redraw);
        assert!(input.is_dragging());
        assert_eq!(scene.len(), 1);
        assert_point_close(scene.all()[0].position(), (0.0, 0.0));
        assert_eq!(scene.all()[0].kind(), ShapeKind::Square);
        assert_eq!(scene.all()[0].color(), Color([0.5, 0.5, 1.0, 1.0]));
        assert_eq!(scene.all()[0].size(), 20.0);
    }

    #[test]
    fn drag_interpolates_between_events() {
        let mut input = InputState::default();
        let mut scene = Scene::new();

        input.handle_pointer(&PointerEvent::down(200.0, 150.0), CANVAS, &mut scene);
        let (x, y) = ndc_to_pixel(0.0, 0.1);
        let redraw = input.handle_pointer(
            &PointerEvent::moved(x, y, PointerButtons::PRIMARY),
            CANVAS,
            &mut scene,
        );

        assert!(redraw);
        assert_eq!(scene.len(), 6);
        for (shape, expected_y) in scene.all()[1..].iter().zip([0.02, 0.04, 0.06, 0.08, 0.1]) {
            assert_point_close(shape.position(), (0.0, expected_y));
        }
        assert_eq!(
            input.drag_state(),
            DragState::Dragging {
                last: pixel_to_ndc((x, y), CANVAS)
            }
        );
    }

    #[test]
    fn moves_without_primary_button_are_ignored() {
        let mut input = InputState::default();
        let mut scene = Scene::new();

        input.handle_pointer(&PointerEvent::down(10.0, 10.0), CANVAS, &mut scene);
        let redraw = input.handle_pointer(
            &PointerEvent::moved(100.0, 100.0, PointerButtons::SECONDARY),
            CANVAS,
            &mut scene,
        );

        assert!(!redraw);
        assert_eq!(scene.len(), 1);
    }

    #[test]
    fn moves_while_idle_are_ignored() {
        let mut input = InputState::default();
        let mut scene = Scene::new();

        let redraw = input.handle_pointer(
            &PointerEvent::moved(100.0, 100.0, PointerButtons::PRIMARY),
            CANVAS,
            &mut scene,
        );

        assert!(!redraw);
        assert!(scene.is_empty());
    }

    #[test]
    fn up_and_leave_end_the_drag_without_stamping() {
        for end in [PointerEvent::up(50.0, 50.0), PointerEvent::leave()] {
            let mut input = InputState::default();
            let mut scene = Scene::new();

            input.handle_pointer(&PointerEvent::down(10.0, 10.0), CANVAS, &mut scene);
            let redraw = input.handle_pointer(&end, CANVAS, &mut scene);

            assert!(!redraw);
            assert_eq!(input.drag_state(), DragState::Idle);
            assert_eq!(scene.len(), 1);

            input.handle_pointer(
                &PointerEvent::moved(60.0, 60.0, PointerButtons::PRIMARY),
                CANVAS,
                &mut scene,
            );
            assert_eq!(scene.len(), 1);
        }
    }

    #[test]
    fn circle_tool_uses_current_segments() {
        let mut input = InputState {
            tool: Tool::Circle,
            segments: 7,
            ..InputState::default()
        };
        let mut scene = Scene::new();

        input.handle_pointer(&PointerEvent::down(0.0, 0.0), CANVAS, &mut scene);
        assert_eq!(scene.all()[0].kind(), ShapeKind::Circle { segments: 7 });
    }

    #[test]
    fn button_set_operations() {
        let mut buttons = PointerButtons::NONE;
        buttons.insert(PointerButtons::PRIMARY);
        buttons.insert(PointerButtons::AUXILIARY);
        assert!(buttons.is_primary_held());
        assert!(buttons.contains(PointerButtons::AUXILIARY));

        buttons.remove(PointerButtons::PRIMARY);
        assert!(!buttons.is_primary_held());
        assert_eq!(buttons, PointerButtons::AUXILIARY);
    }
}
