use super::*;

/// Runs one initialization stage inside wgpu error scopes and turns any captured error into a
/// `RendererError` built by `make_error`.
async fn checked_stage<T>(
    device: &wgpu::Device,
    stage: &str,
    make_error: fn(String) -> RendererError,
    build: impl FnOnce(&wgpu::Device) -> T,
) -> Result<T, RendererError> {
    device.push_error_scope(wgpu::ErrorFilter::OutOfMemory);
    device.push_error_scope(wgpu::ErrorFilter::Validation);

    let value = build(device);

    let validation_error = device.pop_error_scope().await;
    let out_of_memory_error = device.pop_error_scope().await;

    match validation_error.or(out_of_memory_error) {
        Some(wgpu_error) => {
            let error = make_error(wgpu_error.to_string());
            error!("Renderer initialization failed at {}: {}", stage, error);
            Err(error)
        }
        None => {
            debug!("Renderer initialization stage {} done", stage);
            Ok(value)
        }
    }
}

async fn request_device(
    adapter: &wgpu::Adapter,
) -> Result<(wgpu::Device, wgpu::Queue), RendererError> {
    adapter
        .request_device(&wgpu::DeviceDescriptor {
            label: Some("paintstamp_device"),
            required_features: wgpu::Features::empty(),
            required_limits: wgpu::Limits::downlevel_webgl2_defaults()
                .using_resolution(adapter.limits()),
            memory_hints: Default::default(),
            trace: Default::default(),
        })
        .await
        .map_err(|request_error| {
            error!("Failed to request a device: {}", request_error);
            RendererError::context(request_error)
        })
}

impl<'a> Renderer<'a> {
    /// Creates a renderer drawing into `window`.
    ///
    /// `physical_size` must be the current size of the window in physical pixels. Fails when no
    /// adapter can drive the window or when any part of the pipeline cannot be set up.
    pub async fn new(
        window: impl Into<SurfaceTarget<'a>>,
        physical_size: (u32, u32),
        renderer_config: RendererConfig,
    ) -> Result<Self, RendererError> {
        let size = (physical_size.0.max(1), physical_size.1.max(1));

        let instance = wgpu::Instance::new(&InstanceDescriptor::default());
        let surface = instance.create_surface(window).map_err(|surface_error| {
            error!("Failed to create surface: {}", surface_error);
            RendererError::context(surface_error)
        })?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|adapter_error| {
                error!("No adapter can present to the window: {}", adapter_error);
                RendererError::context(adapter_error)
            })?;
        info!("Using adapter {}", adapter.get_info().name);

        let (device, queue) = request_device(&adapter).await?;

        let surface_caps = surface.get_capabilities(&adapter);
        // Colors are written as-is, like an 8-bit unorm WebGL canvas
        let swapchain_format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|format| !format.is_srgb())
            .or_else(|| surface_caps.formats.first().copied())
            .ok_or_else(|| {
                error!("Surface reports no supported formats");
                RendererError::ContextUnavailable("surface has no supported formats".into())
            })?;
        info!("Surface format {:?}", swapchain_format);

        if !surface_caps.usages.contains(wgpu::TextureUsages::COPY_DST) {
            error!("Surface textures cannot be copied into");
            return Err(RendererError::ContextUnavailable(
                "surface does not support COPY_DST".into(),
            ));
        }

        let alpha_mode = if surface_caps
            .alpha_modes
            .contains(&CompositeAlphaMode::Opaque)
        {
            CompositeAlphaMode::Opaque
        } else {
            warn!("Opaque alpha mode unavailable, falling back to Auto");
            CompositeAlphaMode::Auto
        };

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_DST,
            format: swapchain_format,
            width: size.0,
            height: size.1,
            present_mode: present_mode(renderer_config.vsync),
            desired_maximum_frame_latency: 2,
            alpha_mode,
            view_formats: vec![],
        };

        checked_stage(&device, "surface", RendererError::ContextUnavailable, |device| {
            surface.configure(device, &config)
        })
        .await?;

        Self::build_from_device(Some(surface), device, queue, config, size, renderer_config).await
    }

    /// Creates a renderer without a window surface, drawing into a BGRA8 canvas that is read back
    /// with [`Renderer::render_to_buffer`].
    ///
    /// Fails with [`RendererError::ContextUnavailable`] when there is no GPU adapter, which lets
    /// tests skip instead of panicking on machines without one.
    pub async fn try_new_headless(
        physical_size: (u32, u32),
        renderer_config: RendererConfig,
    ) -> Result<Self, RendererError> {
        let size = (physical_size.0.max(1), physical_size.1.max(1));

        let instance = wgpu::Instance::new(&InstanceDescriptor::default());

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: None,
                force_fallback_adapter: false,
            })
            .await
            .map_err(|adapter_error| {
                warn!("No adapter for headless rendering: {}", adapter_error);
                RendererError::context(adapter_error)
            })?;
        info!("Using adapter {} (headless)", adapter.get_info().name);

        let (device, queue) = request_device(&adapter).await?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::COPY_DST,
            format: wgpu::TextureFormat::Bgra8Unorm,
            width: size.0,
            height: size.1,
            present_mode: present_mode(renderer_config.vsync),
            desired_maximum_frame_latency: 2,
            alpha_mode: CompositeAlphaMode::Opaque,
            view_formats: vec![],
        };

        Self::build_from_device(None, device, queue, config, size, renderer_config).await
    }

    /// Shared constructor: builds the pipeline, buffers and canvas on top of the primitives
    /// produced by `new()` or `try_new_headless()`.
    async fn build_from_device(
        surface: Option<wgpu::Surface<'a>>,
        device: wgpu::Device,
        queue: wgpu::Queue,
        config: wgpu::SurfaceConfiguration,
        physical_size: (u32, u32),
        renderer_config: RendererConfig,
    ) -> Result<Self, RendererError> {
        let shader = checked_stage(
            &device,
            "shader",
            RendererError::ShaderCompileFailed,
            create_shader_module,
        )
        .await?;

        let (color_bind_group_layout, color_uniform_buffer, color_bind_group) = checked_stage(
            &device,
            "color uniform",
            RendererError::UniformLookupFailed,
            |device| {
                let layout = create_color_bind_group_layout(device);
                let (buffer, bind_group) =
                    create_color_uniform(device, &layout, renderer_config.clear_color.into());
                (layout, buffer, bind_group)
            },
        )
        .await?;

        let pipeline = checked_stage(
            &device,
            "pipeline",
            RendererError::AttributeLookupFailed,
            |device| create_pipeline(device, &shader, &color_bind_group_layout, config.format),
        )
        .await?;

        let initial_index_count = 3 * INITIAL_VERTEX_CAPACITY.saturating_sub(2);
        let (vertex_buffer, fan_index_buffer, canvas_texture) = checked_stage(
            &device,
            "buffers",
            RendererError::BufferCreationFailed,
            |device| {
                let vertex_buffer = create_writable_buffer(
                    device,
                    "vertex_buffer",
                    (INITIAL_VERTEX_CAPACITY * std::mem::size_of::<Vertex>()) as u64,
                    wgpu::BufferUsages::VERTEX,
                );
                let fan_index_buffer = create_writable_buffer(
                    device,
                    "fan_index_buffer",
                    (initial_index_count * std::mem::size_of::<u32>()) as u64,
                    wgpu::BufferUsages::INDEX,
                );
                let canvas_texture = create_canvas_texture(device, physical_size, config.format);
                (vertex_buffer, fan_index_buffer, canvas_texture)
            },
        )
        .await?;
        let canvas_view = canvas_texture.create_view(&wgpu::TextureViewDescriptor::default());

        let mut temp_indices = Vec::with_capacity(initial_index_count);
        super::drawing::fan_indices(INITIAL_VERTEX_CAPACITY, &mut temp_indices);
        queue.write_buffer(&fan_index_buffer, 0, bytemuck::cast_slice(&temp_indices));

        let mut renderer = Self {
            physical_size,
            renderer_config,
            surface,
            device,
            queue,
            config,
            pipeline,
            color_uniform_buffer,
            color_bind_group,
            vertex_buffer,
            fan_index_buffer,
            fan_index_capacity: INITIAL_VERTEX_CAPACITY,
            temp_indices,
            canvas_texture,
            canvas_view,
            readback_buffer: None,
            readback_bytes: Vec::new(),
        };

        // The canvas starts out in the clear color rather than undefined contents
        renderer.clear();
        info!(
            "Renderer ready: {}x{} {:?}",
            physical_size.0, physical_size.1, renderer.config.format
        );

        Ok(renderer)
    }
}

pub(super) fn present_mode(vsync: bool) -> wgpu::PresentMode {
    if vsync {
        wgpu::PresentMode::AutoVsync
    } else {
        wgpu::PresentMode::AutoNoVsync
    }
}
