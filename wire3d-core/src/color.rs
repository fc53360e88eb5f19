/// 8-bit RGBA color plus the floating-point interpolation helpers used by
/// the clipping and rasterization stages

/// Gamma exponent for `apply_gamma` encoding.
pub const GAMMA: f64 = 2.2;

/// An RGBA color. All core operations produce fully opaque colors; channel
/// arithmetic happens in floating point and clamps to [0, 255] on storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const GREEN: Color = Color::new(0, 255, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Build from floating-point channels, clamping into [0, 255].
    pub fn from_f64(r: f64, g: f64, b: f64) -> Self {
        Self::new(clamp_channel(r), clamp_channel(g), clamp_channel(b))
    }
}

fn clamp_channel(value: f64) -> u8 {
    value.clamp(0.0, 255.0) as u8
}

/// Per-channel color derivative between two endpoint colors `dx` apart.
pub fn slope(c1: Color, c0: Color, dx: f64) -> [f64; 3] {
    [
        (c1.r as f64 - c0.r as f64) / dx,
        (c1.g as f64 - c0.g as f64) / dx,
        (c1.b as f64 - c0.b as f64) / dx,
    ]
}

/// Walk `dx` steps along a per-channel slope from a base color.
pub fn interpolate(base: Color, slope: [f64; 3], dx: f64) -> Color {
    Color::from_f64(
        base.r as f64 + slope[0] * dx,
        base.g as f64 + slope[1] * dx,
        base.b as f64 + slope[2] * dx,
    )
}

/// Linear blend between two colors at parameter `t` in [0, 1].
pub fn lerp(from: Color, to: Color, t: f64) -> Color {
    Color::from_f64(
        (1.0 - t) * from.r as f64 + t * to.r as f64,
        (1.0 - t) * from.g as f64 + t * to.g as f64,
        (1.0 - t) * from.b as f64 + t * to.b as f64,
    )
}

/// The two colors for an anti-aliased pixel pair bracketing a fractional
/// minor-axis coordinate. `weight` is the fraction belonging to the high
/// pixel; each color blends toward the sink background by the complementary
/// weight, so the background weights of the pair always sum to 1.
pub fn anti_alias(foreground: Color, background: Color, weight: f64) -> (Color, Color) {
    let low = lerp(foreground, background, weight);
    let high = lerp(foreground, background, 1.0 - weight);
    (low, high)
}

/// Gamma-encode each channel: `v' = 255 * (v / 255)^(1 / GAMMA)`.
pub fn apply_gamma(color: Color) -> Color {
    Color::from_f64(
        encode_channel(color.r),
        encode_channel(color.g),
        encode_channel(color.b),
    )
}

fn encode_channel(value: u8) -> f64 {
    255.0 * (value as f64 / 255.0).powf(1.0 / GAMMA)
}
