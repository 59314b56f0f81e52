use super::*;

fn copy_padded_readback_rows(
    data: &[u8],
    height: u32,
    unpadded_bytes_per_row: u32,
    padded_bytes_per_row: u32,
    output: &mut Vec<u8>,
) {
    let output_size = (unpadded_bytes_per_row * height) as usize;
    output.resize(output_size, 0);

    if padded_bytes_per_row == unpadded_bytes_per_row {
        output.copy_from_slice(&data[..output_size]);
        return;
    }

    for row in 0..height {
        let padded_offset = (row * padded_bytes_per_row) as usize;
        let unpadded_offset = (row * unpadded_bytes_per_row) as usize;
        let row_data = &data[padded_offset..padded_offset + unpadded_bytes_per_row as usize];
        output[unpadded_offset..unpadded_offset + unpadded_bytes_per_row as usize]
            .copy_from_slice(row_data);
    }
}

impl Renderer<'_> {
    fn map_readback_buffer_into(
        device: &wgpu::Device,
        buffer: &wgpu::Buffer,
        mapped_bytes: &mut Vec<u8>,
    ) {
        mapped_bytes.clear();

        let buffer_slice = buffer.slice(..);
        let (sender, receiver) = std::sync::mpsc::channel();
        buffer_slice.map_async(wgpu::MapMode::Read, move |result| {
            if sender.send(result).is_err() {
                warn!("Failed to send map_async result from callback");
            }
        });

        if let Err(error) = device.poll(wgpu::PollType::Wait) {
            warn!("Failed to wait for the readback copy: {}", error);
        }

        let map_result = match receiver.recv() {
            Ok(result) => result,
            Err(error) => {
                warn!("Failed to receive mapped buffer result: {}", error);
                return;
            }
        };

        if let Err(error) = map_result {
            warn!("Failed to map readback buffer: {:?}", error);
            return;
        }

        let mapped_range = buffer_slice.get_mapped_range();
        mapped_bytes.extend_from_slice(&mapped_range);
        drop(mapped_range);
        buffer.unmap();
    }

    /// Reads the canvas back into `buffer` as tightly packed rows of 4-byte pixels in the canvas
    /// format (BGRA8 for headless renderers), top row first.
    ///
    /// On failure the problem is logged and `buffer` is left empty.
    pub fn render_to_buffer(&mut self, buffer: &mut Vec<u8>) {
        buffer.clear();

        let (width, height) = self.physical_size;
        let (unpadded_bytes_per_row, padded_bytes_per_row) =
            compute_padded_bytes_per_row(width, BYTES_PER_PIXEL);
        let buffer_size = (padded_bytes_per_row * height) as u64;

        let readback_buffer = match self.readback_buffer.take() {
            Some(existing_buffer) if existing_buffer.size() >= buffer_size => existing_buffer,
            _ => create_readback_buffer(&self.device, Some("canvas_readback_buffer"), buffer_size),
        };

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("copy_texture_encoder"),
            });

        encode_copy_texture_to_buffer(
            &mut encoder,
            &self.canvas_texture,
            &readback_buffer,
            width,
            height,
            padded_bytes_per_row,
        );

        self.queue.submit(std::iter::once(encoder.finish()));

        let mut readback_bytes = std::mem::take(&mut self.readback_bytes);
        Self::map_readback_buffer_into(&self.device, &readback_buffer, &mut readback_bytes);

        let required_readback_len = (height as usize).saturating_mul(padded_bytes_per_row as usize);
        if readback_bytes.len() >= required_readback_len && !readback_bytes.is_empty() {
            copy_padded_readback_rows(
                &readback_bytes,
                height,
                unpadded_bytes_per_row,
                padded_bytes_per_row,
                buffer,
            );
        }

        self.readback_bytes = readback_bytes;
        self.readback_buffer = Some(readback_buffer);
    }
}
