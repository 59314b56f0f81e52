use futures::executor::block_on;
use paintstamp::{
    Color, PointerButtons, PointerEvent, Renderer, RendererConfig, Session, SessionConfig, Tool,
};

use crate::expectations::PixelExpectation;

// ── Canvas constants ─────────────────────────────────────────────────────────

pub const CANVAS_WIDTH: u32 = 400;
pub const CANVAS_HEIGHT: u32 = 300;

/// The fixed picture is checked on a square canvas so pixel and NDC math stay simple.
pub const PICTURE_CANVAS_SIZE: u32 = 400;

const RED: (u8, u8, u8) = (255, 0, 0);
const GREEN: (u8, u8, u8) = (0, 255, 0);
const YELLOW: (u8, u8, u8) = (255, 255, 0);
const BLUE: (u8, u8, u8) = (0, 0, 255);

fn rgb8(color: (u8, u8, u8)) -> Color {
    Color::from_rgb8(color.0, color.1, color.2)
}

/// Creates a headless renderer for tests, or `None` when this machine has no usable adapter.
pub fn headless_renderer(width: u32, height: u32) -> Option<Renderer<'static>> {
    match block_on(Renderer::try_new_headless(
        (width, height),
        RendererConfig::default(),
    )) {
        Ok(renderer) => Some(renderer),
        Err(error) => {
            eprintln!("Skipping GPU check, no renderer available: {error}");
            None
        }
    }
}

/// A session sized for the stamp scenes.
pub fn new_session() -> Session {
    Session::new(SessionConfig::default(), (CANVAS_WIDTH, CANVAS_HEIGHT))
}

fn click(session: &mut Session, x: f32, y: f32) {
    session.on_pointer(&PointerEvent::down(x, y));
    session.on_pointer(&PointerEvent::up(x, y));
}

/// Stamps one shape of every kind through the session's UI controls and returns what the canvas
/// must show afterwards.
pub fn build_stamp_scene(session: &mut Session) -> Vec<PixelExpectation> {
    let mut expectations = Vec::new();

    // Red square, 20 px wide, centered on (100, 100)
    session.on_tool_select(Tool::Square);
    session.on_size_change(20.0);
    let (r, g, b) = RED;
    session.on_color_change(r, g, b);
    click(session, 100.0, 100.0);

    // Green square overlapping its bottom-right quarter, drawn later so it stays on top
    let (r, g, b) = GREEN;
    session.on_color_change(r, g, b);
    click(session, 110.0, 110.0);

    expectations.push(PixelExpectation::new(94, 94, rgb8(RED), "square"));
    expectations.push(PixelExpectation::new(105, 105, rgb8(GREEN), "later square on top"));
    expectations.push(PixelExpectation::new(116, 116, rgb8(GREEN), "later square"));
    expectations.push(PixelExpectation::background(85, 85, "outside squares"));

    // Yellow triangle, 30 px, apex at y = 85 and base at y = 115
    session.on_tool_select(Tool::Triangle);
    session.on_size_change(30.0);
    let (r, g, b) = YELLOW;
    session.on_color_change(r, g, b);
    click(session, 300.0, 100.0);

    expectations.push(PixelExpectation::new(300, 108, rgb8(YELLOW), "triangle body"));
    expectations.push(PixelExpectation::new(300, 87, rgb8(YELLOW), "triangle apex"));
    expectations.push(PixelExpectation::background(288, 90, "beside triangle apex"));

    // Blue circle, radius 0.1 in normalized units: 20 px across, 15 px up and down
    session.on_tool_select(Tool::Circle);
    session.on_size_change(40.0);
    session.on_segments_change(24);
    let (r, g, b) = BLUE;
    session.on_color_change(r, g, b);
    click(session, 200.0, 200.0);

    expectations.push(PixelExpectation::new(200, 200, rgb8(BLUE), "circle center"));
    expectations.push(PixelExpectation::new(215, 200, rgb8(BLUE), "circle right"));
    expectations.push(PixelExpectation::new(200, 190, rgb8(BLUE), "circle top"));
    expectations.push(PixelExpectation::background(225, 200, "right of circle"));
    expectations.push(PixelExpectation::background(200, 220, "below circle"));

    expectations
}

/// Drags a 10 px white square brush from (50, 250) to (150, 250), which has to leave a gapless
/// bar.
pub fn build_drag_scene(session: &mut Session) -> Vec<PixelExpectation> {
    session.on_tool_select(Tool::Square);
    session.on_size_change(10.0);
    session.on_color_change(255, 255, 255);

    session.on_pointer(&PointerEvent::down(50.0, 250.0));
    session.on_pointer(&PointerEvent::moved(150.0, 250.0, PointerButtons::PRIMARY));
    session.on_pointer(&PointerEvent::up(150.0, 250.0));

    let mut expectations: Vec<PixelExpectation> = (50..=150)
        .step_by(5)
        .map(|x| PixelExpectation::new(x, 250, Color::WHITE, "drag bar"))
        .collect();
    expectations.push(PixelExpectation::background(100, 262, "below drag bar"));
    expectations.push(PixelExpectation::background(160, 250, "past drag end"));

    expectations
}

/// Pixels of the fixed picture on a [`PICTURE_CANVAS_SIZE`] square canvas whose color is known
/// from the triangle table.
pub fn fixed_picture_expectations() -> Vec<PixelExpectation> {
    vec![
        PixelExpectation::new(40, 228, Color([0.55, 0.32, 0.14, 1.0]), "branch"),
        PixelExpectation::new(284, 140, Color([0.10, 0.10, 0.10, 1.0]), "beak"),
        PixelExpectation::new(248, 112, Color([1.0, 0.92, 0.18, 1.0]), "head"),
        PixelExpectation::background(10, 10, "sky"),
    ]
}
