/// Represents a color in RGBA format.
///
/// Each channel is a floating point value in the range `[0.0, 1.0]`, which is what the fragment
/// stage consumes directly. Constructors clamp out-of-range input.
///
/// # Examples
///
/// ```
/// use paintstamp::Color;
///
/// // Opaque red
/// let red = Color::rgb(1.0, 0.0, 0.0);
/// assert_eq!(red.to_array(), [1.0, 0.0, 0.0, 1.0]);
///
/// // Slider values are 0-255 and always produce an opaque color
/// let white = Color::from_rgb8(255, 255, 255);
/// assert_eq!(white, Color::WHITE);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color(pub [f32; 4]);

impl Color {
    /// A transparent color.
    pub const TRANSPARENT: Self = Self([0.0, 0.0, 0.0, 0.0]);
    /// An opaque black color. This is the default canvas clear color.
    pub const BLACK: Self = Self([0.0, 0.0, 0.0, 1.0]);
    /// An opaque white color.
    pub const WHITE: Self = Self([1.0, 1.0, 1.0, 1.0]);

    /// Creates an opaque color from red, green and blue channels in `[0.0, 1.0]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use paintstamp::Color;
    ///
    /// let clamped = Color::rgb(2.0, -1.0, 0.5);
    /// assert_eq!(clamped, Color([1.0, 0.0, 0.5, 1.0]));
    /// ```
    pub fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Creates a color from all four channels in `[0.0, 1.0]`.
    pub fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self([unit(r), unit(g), unit(b), unit(a)])
    }

    /// Creates an opaque color from 8-bit channel values, as delivered by the color sliders.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self([
            r as f32 / 255.0,
            g as f32 / 255.0,
            b as f32 / 255.0,
            1.0,
        ])
    }

    /// Returns the color quantized back to 8-bit channels.
    ///
    /// # Examples
    ///
    /// ```
    /// use paintstamp::Color;
    ///
    /// assert_eq!(Color::from_rgb8(12, 200, 77).to_rgba8(), [12, 200, 77, 255]);
    /// ```
    pub fn to_rgba8(&self) -> [u8; 4] {
        self.0.map(|channel| (channel * 255.0).round() as u8)
    }

    pub fn to_array(&self) -> [f32; 4] {
        self.0
    }

    pub(crate) fn to_wgpu(self) -> wgpu::Color {
        wgpu::Color {
            r: self.0[0] as f64,
            g: self.0[1] as f64,
            b: self.0[2] as f64,
            a: self.0[3] as f64,
        }
    }
}

fn unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_channels_become_zero() {
        let color = Color::rgba(f32::NAN, 0.25, 0.5, f32::NAN);
        assert_eq!(color, Color([0.0, 0.25, 0.5, 0.0]));
    }

    #[test]
    fn wgpu_color_keeps_channels() {
        let color = Color::rgba(0.5, 0.25, 1.0, 0.75).to_wgpu();
        assert_eq!((color.r, color.g, color.b, color.a), (0.5, 0.25, 1.0, 0.75));
    }
}
