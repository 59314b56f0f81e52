//! Desktop host for the stamp canvas.
//!
//! Press any mouse button to stamp a shape, then drag with the left button held to keep
//! stamping along the pointer path. Keys:
//!
//! * `1` / `2` / `3` select square, triangle or circle
//! * `R` / `G` / `B` raise a color channel, with `Shift` to lower it
//! * `+` / `-` change the size, `[` / `]` the circle segment count
//! * `C` clears the canvas, `P` shows the fixed picture
use futures::executor::block_on;
use paintstamp::logging::{init_logging, LoggingConfig};
use paintstamp::{
    PointerButtons, PointerEvent, PointerEventKind, Renderer, RendererConfig, Session,
    SessionConfig, Tool,
};
use std::sync::Arc;
use tracing::{error, info, warn};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{Key, ModifiersState};
use winit::window::{Window, WindowId};

const INITIAL_SIZE: (u32, u32) = (800, 600);
const COLOR_STEP: u8 = 15;
const SIZE_STEP: f32 = 5.0;
const MAX_SIZE: f32 = 100.0;
const MAX_SEGMENTS: u32 = 60;

struct App {
    window: Option<Arc<Window>>,
    renderer: Option<Renderer<'static>>,
    session: Session,
    /// Slider positions of the red, green and blue channels
    rgb: [u8; 3],
    cursor: (f32, f32),
    buttons: PointerButtons,
    modifiers: ModifiersState,
}

impl App {
    fn new(config: SessionConfig) -> Self {
        let [r, g, b, _] = config.color.to_rgba8();
        Self {
            window: None,
            renderer: None,
            session: Session::new(config, INITIAL_SIZE),
            rgb: [r, g, b],
            cursor: (0.0, 0.0),
            buttons: PointerButtons::NONE,
            modifiers: ModifiersState::empty(),
        }
    }

    fn pointer(&mut self, kind: PointerEventKind) -> bool {
        let event = PointerEvent::new(kind, self.cursor.0, self.cursor.1, self.buttons);
        self.session.on_pointer(&event)
    }

    fn adjust_channel(&mut self, channel: usize) {
        let value = self.rgb[channel];
        self.rgb[channel] = if self.modifiers.shift_key() {
            value.saturating_sub(COLOR_STEP)
        } else {
            value.saturating_add(COLOR_STEP)
        };

        let [r, g, b] = self.rgb;
        self.session.on_color_change(r, g, b);
    }

    /// Maps a key press to a UI control. Returns `true` when the canvas needs a repaint.
    fn key_pressed(&mut self, key: &str) -> bool {
        let size = self.session.input().size;
        let segments = self.session.input().segments;

        match key.to_ascii_lowercase().as_str() {
            "1" => self.session.on_tool_select(Tool::Square),
            "2" => self.session.on_tool_select(Tool::Triangle),
            "3" => self.session.on_tool_select(Tool::Circle),
            "r" => self.adjust_channel(0),
            "g" => self.adjust_channel(1),
            "b" => self.adjust_channel(2),
            "+" | "=" => self.session.on_size_change((size + SIZE_STEP).min(MAX_SIZE)),
            "-" => self.session.on_size_change(size - SIZE_STEP),
            "[" => self.session.on_segments_change(segments.saturating_sub(1).max(3)),
            "]" => self
                .session
                .on_segments_change((segments + 1).min(MAX_SEGMENTS)),
            "c" => return self.session.on_clear(),
            "p" => return self.session.on_draw_fixed_picture(),
            _ => {}
        }

        false
    }

    fn redraw(&mut self, event_loop: &ActiveEventLoop) {
        let Some(renderer) = &mut self.renderer else {
            return;
        };

        self.session.render(renderer);

        match renderer.present() {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                warn!("Surface lost, reconfiguring");
                renderer.reconfigure_surface();
                if let Some(window) = &self.window {
                    window.request_redraw();
                }
            }
            Err(wgpu::SurfaceError::OutOfMemory) => {
                error!("Out of memory while presenting, exiting");
                event_loop.exit();
            }
            Err(surface_error) => warn!("Failed to present frame: {}", surface_error),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attributes = Window::default_attributes()
            .with_title("paintstamp")
            .with_inner_size(PhysicalSize::new(INITIAL_SIZE.0, INITIAL_SIZE.1));
        let window = match event_loop.create_window(attributes) {
            Ok(window) => Arc::new(window),
            Err(window_error) => {
                error!("Failed to create window: {}", window_error);
                event_loop.exit();
                return;
            }
        };

        let window_size = window.inner_size();
        let physical_size = (window_size.width, window_size.height);

        match block_on(Renderer::new(
            window.clone(),
            physical_size,
            RendererConfig::default(),
        )) {
            Ok(renderer) => {
                self.session.set_canvas_size(physical_size);
                self.renderer = Some(renderer);
                window.request_redraw();
                self.window = Some(window);
            }
            Err(renderer_error) => {
                error!("Failed to initialize the renderer: {}", renderer_error);
                event_loop.exit();
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(window) = self.window.clone() else {
            return;
        };

        if window_id != window.id() {
            return;
        }

        let needs_redraw = match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
                false
            }
            WindowEvent::Resized(physical_size) => {
                let new_size = (physical_size.width, physical_size.height);
                if let Some(renderer) = &mut self.renderer {
                    renderer.resize(new_size);
                    self.session.set_canvas_size(renderer.size());
                }
                true
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers = modifiers.state();
                false
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.cursor = (position.x as f32, position.y as f32);
                self.pointer(PointerEventKind::Move)
            }
            WindowEvent::CursorLeft { .. } => self.pointer(PointerEventKind::Leave),
            WindowEvent::MouseInput { state, button, .. } => {
                let button = match button {
                    MouseButton::Left => PointerButtons::PRIMARY,
                    MouseButton::Right => PointerButtons::SECONDARY,
                    MouseButton::Middle => PointerButtons::AUXILIARY,
                    _ => PointerButtons::NONE,
                };

                match state {
                    ElementState::Pressed => {
                        self.buttons.insert(button);
                        self.pointer(PointerEventKind::Down)
                    }
                    ElementState::Released => {
                        self.buttons.remove(button);
                        self.pointer(PointerEventKind::Up)
                    }
                }
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Character(key),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => self.key_pressed(key.as_str()),
            WindowEvent::RedrawRequested => {
                self.redraw(event_loop);
                false
            }
            _ => false,
        };

        if needs_redraw {
            window.request_redraw();
        }
    }
}

pub fn main() {
    init_logging(LoggingConfig::default());
    info!("Starting paintstamp");

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(event_loop_error) => {
            error!("Failed to create the event loop: {}", event_loop_error);
            return;
        }
    };

    let mut app = App::new(SessionConfig::default());
    if let Err(run_error) = event_loop.run_app(&mut app) {
        error!("Event loop terminated with an error: {}", run_error);
    }
}
