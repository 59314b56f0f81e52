//! The drawing session: the scene, the user's current selection and what the canvas currently
//! shows. UI controls and pointer events are routed through [`Session`], and the host repaints
//! by calling [`Session::render`].

use crate::input::{
    InputState, PointerEvent, PointerEventKind, Tool, DEFAULT_COLOR, DEFAULT_SEGMENTS,
    DEFAULT_SIZE, DEFAULT_STROKE_STEP,
};
use crate::picture::draw_fixed_picture;
use crate::target::DrawTarget;
use crate::{Color, Scene};
use tracing::{debug, info};

/// Smallest stamp size in pixels.
pub const MIN_SIZE: f32 = 1.0;

/// Initial selection of a new session.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    pub tool: Tool,
    pub color: Color,
    pub size: f32,
    pub segments: u32,
    pub stroke_step: f32,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tool: Tool::Square,
            color: DEFAULT_COLOR,
            size: DEFAULT_SIZE,
            segments: DEFAULT_SEGMENTS,
            stroke_step: DEFAULT_STROKE_STEP,
        }
    }
}

impl SessionConfig {
    pub fn with_tool(mut self, tool: Tool) -> Self {
        self.tool = tool;
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = size;
        self
    }

    pub fn with_segments(mut self, segments: u32) -> Self {
        self.segments = segments;
        self
    }

    /// Distance between drag stamps in normalized device units. Values below
    /// [`MIN_STROKE_STEP`](crate::MIN_STROKE_STEP) are raised to it.
    pub fn with_stroke_step(mut self, stroke_step: f32) -> Self {
        self.stroke_step = stroke_step;
        self
    }
}

/// What the canvas shows on the next repaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Scene,
    FixedPicture,
}

#[derive(Debug, Clone)]
pub struct Session {
    scene: Scene,
    input: InputState,
    view: View,
    canvas_size: (u32, u32),
}

impl Session {
    pub fn new(config: SessionConfig, canvas_size: (u32, u32)) -> Self {
        let input = InputState::new(
            config.tool,
            config.color,
            config.size.max(MIN_SIZE),
            config.segments,
            config.stroke_step,
        );

        Self {
            scene: Scene::new(),
            input,
            view: View::Scene,
            canvas_size,
        }
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn canvas_size(&self) -> (u32, u32) {
        self.canvas_size
    }

    /// Must follow every canvas resize so pointer positions keep mapping onto the canvas.
    pub fn set_canvas_size(&mut self, canvas_size: (u32, u32)) {
        self.canvas_size = canvas_size;
    }

    /// Routes a pointer event through the input controller. Returns `true` when the canvas needs
    /// a repaint.
    pub fn on_pointer(&mut self, event: &PointerEvent) -> bool {
        if event.kind == PointerEventKind::Down {
            self.view = View::Scene;
        }

        self.input
            .handle_pointer(event, self.canvas_size, &mut self.scene)
    }

    /// Color slider values are 0-255; the resulting color is always opaque.
    pub fn on_color_change(&mut self, r: u8, g: u8, b: u8) {
        self.input.color = Color::from_rgb8(r, g, b);
        debug!("Color changed to {:?}", self.input.color);
    }

    pub fn on_size_change(&mut self, size: f32) {
        self.input.size = if size.is_nan() {
            MIN_SIZE
        } else {
            size.max(MIN_SIZE)
        };
        debug!("Size changed to {}", self.input.size);
    }

    pub fn on_segments_change(&mut self, segments: u32) {
        self.input.segments = segments;
        debug!("Segments changed to {}", segments);
    }

    pub fn on_tool_select(&mut self, tool: Tool) {
        self.input.tool = tool;
        debug!("Tool changed to {:?}", tool);
    }

    /// Drops every placed shape. The canvas always needs a repaint afterwards.
    pub fn on_clear(&mut self) -> bool {
        info!("Clearing {} shapes", self.scene.len());
        self.scene.clear();
        self.view = View::Scene;
        true
    }

    /// Switches the canvas to the fixed picture. The scene is left untouched and comes back on
    /// the next pointer press.
    pub fn on_draw_fixed_picture(&mut self) -> bool {
        info!("Showing fixed picture");
        self.view = View::FixedPicture;
        true
    }

    /// Repaints the current view onto `target`.
    pub fn render<T: DrawTarget + ?Sized>(&self, target: &mut T) {
        match self.view {
            View::Scene => target.redraw(&self.scene),
            View::FixedPicture => draw_fixed_picture(target),
        }
    }
}
