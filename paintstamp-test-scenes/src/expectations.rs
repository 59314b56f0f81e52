use paintstamp::Color;

/// Channel tolerance used unless a test asks for something else. Covers the rounding of float
/// colors to 8-bit channels.
pub const DEFAULT_TOLERANCE: u8 = 3;

/// One pixel of the canvas that must have a given color after rendering.
#[derive(Debug, Clone)]
pub struct PixelExpectation {
    pub x: u32,
    pub y: u32,
    /// Expected color as 8-bit RGBA.
    pub expected: [u8; 4],
    /// Per-channel tolerance for comparison.
    pub tolerance: u8,
    /// Human-readable label for failure messages.
    pub label: &'static str,
}

impl PixelExpectation {
    pub fn new(x: u32, y: u32, color: Color, label: &'static str) -> Self {
        Self {
            x,
            y,
            expected: color.to_rgba8(),
            tolerance: DEFAULT_TOLERANCE,
            label,
        }
    }

    pub fn with_tolerance(mut self, tolerance: u8) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Expects the default clear color, opaque black.
    pub fn background(x: u32, y: u32, label: &'static str) -> Self {
        Self::new(x, y, Color::BLACK, label)
    }
}

/// Reads pixel `(x, y)` out of BGRA8 data from `Renderer::render_to_buffer` as RGBA.
pub fn pixel_at(pixel_data: &[u8], width: u32, x: u32, y: u32) -> Option<[u8; 4]> {
    let offset = (y as usize * width as usize + x as usize) * 4;
    let bgra = pixel_data.get(offset..offset + 4)?;
    Some([bgra[2], bgra[1], bgra[0], bgra[3]])
}

/// Validates pixel expectations against BGRA8 pixel data from `Renderer::render_to_buffer`.
///
/// Returns a list of human-readable failure descriptions. An empty list means all expectations
/// passed.
pub fn check_pixels(
    pixel_data: &[u8],
    width: u32,
    height: u32,
    expectations: &[PixelExpectation],
) -> Vec<String> {
    let mut failures = Vec::new();

    for expectation in expectations {
        if expectation.x >= width || expectation.y >= height {
            failures.push(format!(
                "[{}] pixel ({},{}) is outside canvas {}×{}",
                expectation.label, expectation.x, expectation.y, width, height,
            ));
            continue;
        }

        let Some(actual) = pixel_at(pixel_data, width, expectation.x, expectation.y) else {
            failures.push(format!(
                "[{}] pixel ({},{}) is out of bounds (buffer len {})",
                expectation.label,
                expectation.x,
                expectation.y,
                pixel_data.len(),
            ));
            continue;
        };

        let tolerance = expectation.tolerance as i16;
        let matches = actual
            .iter()
            .zip(expectation.expected.iter())
            .all(|(&actual, &expected)| channel_matches(actual, expected, tolerance));

        if !matches {
            failures.push(format!(
                "[{}] pixel ({},{}) expected rgba{:?} ±{} but got rgba{:?}",
                expectation.label,
                expectation.x,
                expectation.y,
                expectation.expected,
                expectation.tolerance,
                actual,
            ));
        }
    }

    failures
}

fn channel_matches(actual: u8, expected: u8, tolerance: i16) -> bool {
    let diff = (actual as i16) - (expected as i16);
    diff.abs() <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bgra_data_is_compared_as_rgba() {
        // 2x1 canvas: a red pixel then a black one, stored as BGRA
        let data = [0, 0, 255, 255, 0, 0, 0, 255];
        let expectations = [
            PixelExpectation::new(0, 0, Color::rgb(1.0, 0.0, 0.0), "red"),
            PixelExpectation::background(1, 0, "black"),
        ];

        assert!(check_pixels(&data, 2, 1, &expectations).is_empty());
    }

    #[test]
    fn mismatches_and_out_of_range_pixels_are_reported() {
        let data = [0, 0, 0, 255];
        let expectations = [
            PixelExpectation::new(0, 0, Color::WHITE, "white"),
            PixelExpectation::background(3, 0, "outside"),
        ];

        let failures = check_pixels(&data, 1, 1, &expectations);
        assert_eq!(failures.len(), 2);
        assert!(failures[0].starts_with("[white]"));
        assert!(failures[1].contains("outside canvas"));
    }
}
