/// Visual regression tests for the canvas renderer.
///
/// These tests use the headless renderer to draw into the canvas, read it back and validate
/// specific pixel locations against expected colors. Machines without a usable GPU adapter skip
/// them with a message on stderr.
///
/// Run with:   cargo test --test visual_regression
use paintstamp::{draw_fixed_picture, Color, DrawTarget, Scene, ShapeDescriptor};
use paintstamp_test_scenes::{
    build_drag_scene, build_stamp_scene, check_pixels, fixed_picture_expectations,
    headless_renderer, new_session, pixel_at, PixelExpectation, CANVAS_HEIGHT, CANVAS_WIDTH,
    PICTURE_CANVAS_SIZE,
};

fn assert_pixels(pixel_buffer: &[u8], width: u32, height: u32, expectations: &[PixelExpectation]) {
    let failures = check_pixels(pixel_buffer, width, height, expectations);
    if !failures.is_empty() {
        panic!(
            "{} pixel expectation(s) failed:\n{}",
            failures.len(),
            failures.join("\n"),
        );
    }
}

#[test]
fn stamped_shapes_pixel_expectations() {
    let Some(mut renderer) = headless_renderer(CANVAS_WIDTH, CANVAS_HEIGHT) else {
        return;
    };

    let mut session = new_session();
    let expectations = build_stamp_scene(&mut session);
    session.render(&mut renderer);

    let mut pixel_buffer: Vec<u8> = Vec::new();
    renderer.render_to_buffer(&mut pixel_buffer);

    assert_eq!(
        pixel_buffer.len(),
        (CANVAS_WIDTH * CANVAS_HEIGHT * 4) as usize
    );
    assert_pixels(&pixel_buffer, CANVAS_WIDTH, CANVAS_HEIGHT, &expectations);
}

#[test]
fn drag_leaves_no_gaps() {
    let Some(mut renderer) = headless_renderer(CANVAS_WIDTH, CANVAS_HEIGHT) else {
        return;
    };

    let mut session = new_session();
    let expectations = build_drag_scene(&mut session);
    session.render(&mut renderer);

    let mut pixel_buffer: Vec<u8> = Vec::new();
    renderer.render_to_buffer(&mut pixel_buffer);

    assert_pixels(&pixel_buffer, CANVAS_WIDTH, CANVAS_HEIGHT, &expectations);
}

/// A cleared canvas redrawn with an empty scene holds only the clear color.
#[test]
fn clear_then_redraw_is_uniform() {
    let Some(mut renderer) = headless_renderer(CANVAS_WIDTH, CANVAS_HEIGHT) else {
        return;
    };

    let mut session = new_session();
    build_stamp_scene(&mut session);
    session.render(&mut renderer);

    session.on_clear();
    session.render(&mut renderer);

    let mut pixel_buffer: Vec<u8> = Vec::new();
    renderer.render_to_buffer(&mut pixel_buffer);

    assert!(!pixel_buffer.is_empty());
    assert!(
        pixel_buffer.chunks_exact(4).all(|bgra| bgra == [0, 0, 0, 255]),
        "canvas should only contain the clear color",
    );
}

#[test]
fn fixed_picture_pixel_expectations() {
    let Some(mut renderer) = headless_renderer(PICTURE_CANVAS_SIZE, PICTURE_CANVAS_SIZE) else {
        return;
    };

    draw_fixed_picture(&mut renderer);

    let mut pixel_buffer: Vec<u8> = Vec::new();
    renderer.render_to_buffer(&mut pixel_buffer);

    assert_pixels(
        &pixel_buffer,
        PICTURE_CANVAS_SIZE,
        PICTURE_CANVAS_SIZE,
        &fixed_picture_expectations(),
    );
}

/// A circle larger than the initial vertex buffer still draws completely.
#[test]
fn large_circle_grows_buffers() {
    let Some(mut renderer) = headless_renderer(CANVAS_WIDTH, CANVAS_HEIGHT) else {
        return;
    };

    let mut scene = Scene::new();
    scene.append(ShapeDescriptor::circle(
        (0.0, 0.0),
        Color::rgb(1.0, 0.0, 1.0),
        200.0,
        500,
    ));
    renderer.redraw(&scene);

    let mut pixel_buffer: Vec<u8> = Vec::new();
    renderer.render_to_buffer(&mut pixel_buffer);

    // radius 0.5: 100 px horizontally, 75 px vertically around (200, 150)
    let magenta = Color::rgb(1.0, 0.0, 1.0);
    assert_pixels(
        &pixel_buffer,
        CANVAS_WIDTH,
        CANVAS_HEIGHT,
        &[
            PixelExpectation::new(200, 150, magenta, "center"),
            PixelExpectation::new(290, 150, magenta, "right edge"),
            PixelExpectation::new(110, 150, magenta, "left edge"),
            PixelExpectation::new(200, 80, magenta, "top edge"),
            PixelExpectation::background(200, 60, "above"),
        ],
    );
}

#[test]
fn resize_clears_and_keeps_drawing() {
    let Some(mut renderer) = headless_renderer(CANVAS_WIDTH, CANVAS_HEIGHT) else {
        return;
    };

    let mut session = new_session();
    build_stamp_scene(&mut session);
    session.render(&mut renderer);

    renderer.resize((200, 100));
    session.set_canvas_size(renderer.size());

    let mut pixel_buffer: Vec<u8> = Vec::new();
    renderer.render_to_buffer(&mut pixel_buffer);
    assert_eq!(pixel_buffer.len(), 200 * 100 * 4);
    assert_eq!(pixel_at(&pixel_buffer, 200, 50, 50), Some([0, 0, 0, 255]));

    session.render(&mut renderer);
    renderer.render_to_buffer(&mut pixel_buffer);
    // The blue circle keeps its normalized position (0, -1/3)
    assert_pixels(
        &pixel_buffer,
        200,
        100,
        &[PixelExpectation::new(
            100,
            66,
            Color::rgb(0.0, 0.0, 1.0),
            "circle after resize",
        )],
    );
}
