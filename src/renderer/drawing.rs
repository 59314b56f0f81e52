use super::*;

/// Writes the triangle-list expansion of a triangle fan of `vertex_count` vertices into
/// `indices`: `(0, i, i + 1)` for every `i` in `1..vertex_count - 1`.
pub(super) fn fan_indices(vertex_count: usize, indices: &mut Vec<u32>) {
    indices.clear();
    for i in 1..vertex_count.saturating_sub(1) as u32 {
        indices.extend_from_slice(&[0, i, i + 1]);
    }
}

impl Renderer<'_> {
    fn ensure_vertex_capacity(&mut self, vertex_count: usize) {
        let required_size = (vertex_count * std::mem::size_of::<Vertex>()) as u64;
        if self.vertex_buffer.size() >= required_size {
            return;
        }

        let new_size = required_size.next_power_of_two();
        debug!("Growing vertex buffer to {} bytes", new_size);
        self.vertex_buffer = create_writable_buffer(
            &self.device,
            "vertex_buffer",
            new_size,
            wgpu::BufferUsages::VERTEX,
        );
    }

    fn ensure_fan_capacity(&mut self, vertex_count: usize) {
        if vertex_count <= self.fan_index_capacity {
            return;
        }

        let capacity = vertex_count.next_power_of_two();
        fan_indices(capacity, &mut self.temp_indices);
        debug!("Growing fan index buffer to {} vertices", capacity);

        self.fan_index_buffer = create_writable_buffer(
            &self.device,
            "fan_index_buffer",
            (self.temp_indices.len() * std::mem::size_of::<u32>()) as u64,
            wgpu::BufferUsages::INDEX,
        );
        self.queue.write_buffer(
            &self.fan_index_buffer,
            0,
            bytemuck::cast_slice(&self.temp_indices),
        );
        self.fan_index_capacity = capacity;
    }
}

impl DrawTarget for Renderer<'_> {
    fn size(&self) -> (u32, u32) {
        self.physical_size
    }

    fn clear(&mut self) {
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("clear_encoder"),
            });
        {
            let _pass = create_canvas_pass(
                &mut encoder,
                &self.canvas_view,
                wgpu::LoadOp::Clear(self.renderer_config.clear_color.to_wgpu()),
            );
        }
        self.queue.submit(std::iter::once(encoder.finish()));
    }

    /// Uploads `geometry` over the previous contents of the vertex buffer, sets the fill color
    /// and submits a single draw call for it.
    fn draw(&mut self, geometry: &Geometry, color: Color) {
        let vertex_count = geometry.vertices.len();
        let triangle_count = geometry.topology.triangle_count(vertex_count);
        if triangle_count == 0 {
            return;
        }

        self.ensure_vertex_capacity(vertex_count);
        if geometry.topology == Topology::TriangleFan {
            self.ensure_fan_capacity(vertex_count);
        }

        self.queue.write_buffer(
            &self.vertex_buffer,
            0,
            bytemuck::cast_slice(geometry.vertices.as_slice()),
        );
        self.queue.write_buffer(
            &self.color_uniform_buffer,
            0,
            bytemuck::cast_slice(&[ColorUniform::from(color)]),
        );

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("draw_encoder"),
            });
        {
            let mut pass = create_canvas_pass(&mut encoder, &self.canvas_view, wgpu::LoadOp::Load);
            pass.set_pipeline(&self.pipeline);
            pass.set_bind_group(0, &self.color_bind_group, &[]);
            pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));

            match geometry.topology {
                Topology::TriangleList => {
                    pass.draw(0..(triangle_count * 3) as u32, 0..1);
                }
                Topology::TriangleFan => {
                    pass.set_index_buffer(self.fan_index_buffer.slice(..), wgpu::IndexFormat::Uint32);
                    pass.draw_indexed(0..(triangle_count * 3) as u32, 0, 0..1);
                }
            }
        }

        // Submitted right away: the next draw overwrites the same buffers
        self.queue.submit(std::iter::once(encoder.finish()));
    }
}

#[cfg(test)]
mod tests {
    use super::fan_indices;

    #[test]
    fn fan_expansion_shares_the_first_vertex() {
        let mut indices = Vec::new();
        fan_indices(5, &mut indices);
        assert_eq!(indices, vec![0, 1, 2, 0, 2, 3, 0, 3, 4]);
    }

    #[test]
    fn fans_with_fewer_than_three_vertices_have_no_triangles() {
        let mut indices = vec![7, 7, 7];
        fan_indices(2, &mut indices);
        assert!(indices.is_empty());
        fan_indices(0, &mut indices);
        assert!(indices.is_empty());
    }

    #[test]
    fn smaller_fans_are_a_prefix_of_larger_ones() {
        let mut small = Vec::new();
        let mut large = Vec::new();
        fan_indices(14, &mut small);
        fan_indices(64, &mut large);
        assert_eq!(&large[..small.len()], small.as_slice());
    }
}
