use super::*;

impl<'a> Renderer<'a> {
    pub fn size(&self) -> (u32, u32) {
        self.physical_size
    }

    pub fn is_headless(&self) -> bool {
        self.surface.is_none()
    }

    pub fn renderer_config(&self) -> RendererConfig {
        self.renderer_config
    }

    /// Resizes the surface and the canvas. The canvas content is lost and comes back cleared;
    /// the caller is expected to redraw. Zero sized requests (minimized windows) are ignored.
    pub fn resize(&mut self, new_physical_size: (u32, u32)) {
        if new_physical_size.0 == 0 || new_physical_size.1 == 0 {
            debug!("Ignoring resize to {:?}", new_physical_size);
            return;
        }

        info!("Resizing canvas to {}x{}", new_physical_size.0, new_physical_size.1);
        self.physical_size = new_physical_size;
        self.config.width = new_physical_size.0;
        self.config.height = new_physical_size.1;

        self.reconfigure_surface();

        self.canvas_texture =
            create_canvas_texture(&self.device, new_physical_size, self.config.format);
        self.canvas_view = self
            .canvas_texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        self.readback_buffer = None;

        self.clear();
    }

    /// Reconfigures the window surface with the current settings. Needed after the surface
    /// reports itself lost or outdated.
    pub fn reconfigure_surface(&mut self) {
        if let Some(surface) = &self.surface {
            surface.configure(&self.device, &self.config);
        }
    }

    pub fn set_vsync(&mut self, vsync: bool) {
        self.renderer_config.vsync = vsync;
        self.config.present_mode = super::construction::present_mode(vsync);
        self.reconfigure_surface();
    }

    /// Copies the canvas onto the window surface and presents it. Does nothing for a headless
    /// renderer.
    pub fn present(&mut self) -> Result<(), wgpu::SurfaceError> {
        let Some(surface) = &self.surface else {
            return Ok(());
        };

        let frame = surface.get_current_texture()?;

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("present_encoder"),
            });
        encoder.copy_texture_to_texture(
            self.canvas_texture.as_image_copy(),
            frame.texture.as_image_copy(),
            wgpu::Extent3d {
                width: self.physical_size.0.min(frame.texture.width()),
                height: self.physical_size.1.min(frame.texture.height()),
                depth_or_array_layers: 1,
            },
        );
        self.queue.submit(std::iter::once(encoder.finish()));

        frame.present();
        Ok(())
    }
}
