//! The wgpu canvas renderer.
//!
//! All drawing goes to an offscreen canvas texture that is kept between frames, so shapes drawn
//! earlier stay visible until the next clear. [`Renderer::present`] copies the canvas onto the
//! window surface; a headless renderer reads it back with [`Renderer::render_to_buffer`] instead.
//!
//! # Examples
//!
//! ```rust,no_run
//! use paintstamp::{Color, DrawTarget, Renderer, RendererConfig, ShapeDescriptor, Scene};
//!
//! # futures::executor::block_on(async {
//! let mut renderer = Renderer::try_new_headless((400, 300), RendererConfig::default())
//!     .await
//!     .expect("no GPU adapter available");
//!
//! let mut scene = Scene::new();
//! scene.append(ShapeDescriptor::square((0.0, 0.0), Color::WHITE, 20.0));
//! renderer.redraw(&scene);
//!
//! let mut pixels = Vec::new();
//! renderer.render_to_buffer(&mut pixels);
//! assert_eq!(pixels.len(), 400 * 300 * 4);
//! # });
//! ```

use crate::error::RendererError;
use crate::geometry::{Geometry, Topology};
use crate::pipeline::{
    compute_padded_bytes_per_row, create_canvas_pass, create_canvas_texture,
    create_color_bind_group_layout, create_color_uniform, create_pipeline,
    create_readback_buffer, create_shader_module, create_writable_buffer,
    encode_copy_texture_to_buffer, BYTES_PER_PIXEL,
};
use crate::target::DrawTarget;
use crate::vertex::{ColorUniform, Vertex};
use crate::Color;
use tracing::{debug, error, info, warn};
use wgpu::{CompositeAlphaMode, InstanceDescriptor, SurfaceTarget};

mod construction;
mod drawing;
mod readback;
mod surface;

/// Vertex capacity the shared vertex buffer starts with. A 12 segment circle fits.
const INITIAL_VERTEX_CAPACITY: usize = 64;

/// Renderer options that can be chosen at construction time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RendererConfig {
    /// Wait for the display's vertical blank when presenting.
    pub vsync: bool,
    /// The color [`DrawTarget::clear`] fills the canvas with.
    pub clear_color: Color,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            vsync: true,
            clear_color: Color::BLACK,
        }
    }
}

impl RendererConfig {
    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    pub fn with_clear_color(mut self, clear_color: Color) -> Self {
        self.clear_color = clear_color;
        self
    }
}

pub struct Renderer<'a> {
    /// Size of the canvas in physical pixels
    pub(crate) physical_size: (u32, u32),
    renderer_config: RendererConfig,

    // WGPU components
    /// `None` for headless renderers
    surface: Option<wgpu::Surface<'a>>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    pipeline: wgpu::RenderPipeline,
    color_uniform_buffer: wgpu::Buffer,
    color_bind_group: wgpu::BindGroup,

    /// Overwritten by every draw call
    vertex_buffer: wgpu::Buffer,
    /// Holds the fan expansion `(0, i, i + 1)` for the largest fan drawn so far. A fan of fewer
    /// vertices uses a prefix of it.
    fan_index_buffer: wgpu::Buffer,
    fan_index_capacity: usize,
    temp_indices: Vec<u32>,

    canvas_texture: wgpu::Texture,
    canvas_view: wgpu::TextureView,

    readback_buffer: Option<wgpu::Buffer>,
    readback_bytes: Vec<u8>,
}
