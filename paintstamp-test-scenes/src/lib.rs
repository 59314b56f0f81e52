pub mod expectations;
pub mod recording;
pub mod scene;

pub use expectations::{check_pixels, pixel_at, PixelExpectation};
pub use recording::{RecordedDraw, RecordingTarget};
pub use scene::{
    build_drag_scene, build_stamp_scene, fixed_picture_expectations, headless_renderer,
    new_session, CANVAS_HEIGHT, CANVAS_WIDTH, PICTURE_CANVAS_SIZE,
};
